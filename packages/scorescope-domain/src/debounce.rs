use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
	quiet: Duration,
	value: Option<T>,
	pending: Option<(T, Instant)>,
	last_emitted: Option<T>,
}
impl<T> Debouncer<T>
where
	T: Clone + PartialEq,
{
	pub fn new(quiet: Duration) -> Self {
		Self { quiet, value: None, pending: None, last_emitted: None }
	}

	pub fn value(&self) -> Option<&T> {
		self.value.as_ref()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|(_, deadline)| *deadline)
	}

	/// A user interaction: track `value` now, settle it after the quiet period.
	pub fn interact(&mut self, value: T, now: Instant) {
		self.value = Some(value.clone());
		self.pending = Some((value, now + self.quiet));
	}

	/// A programmatic change of the bound value. Takes effect at once and is never emitted.
	pub fn sync(&mut self, value: T) {
		self.pending = None;
		self.value = Some(value.clone());
		self.last_emitted = Some(value);
	}

	pub fn reset(&mut self) {
		self.value = None;
		self.pending = None;
		self.last_emitted = None;
	}

	/// Returns the settled value once its deadline has passed, unless it repeats the last one.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let (_, deadline) = self.pending.as_ref()?;

		if now < *deadline {
			return None;
		}

		let (value, _) = self.pending.take()?;

		if self.last_emitted.as_ref() == Some(&value) {
			return None;
		}

		self.last_emitted = Some(value.clone());

		Some(value)
	}

	pub fn flush(&mut self) -> Option<T> {
		let deadline = self.deadline()?;

		self.poll(deadline)
	}
}
