use serde::Serialize;

use crate::{Explorer, Generation, Loaded, SettledRange};

#[derive(Clone, Debug, PartialEq)]
pub struct BrushEvent {
	pub generation: Generation,
	pub item_ids: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum PushOutcome {
	Applied,
	Duplicate,
	Rejected(RejectReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
	StaleGeneration,
	UnknownItems,
	EmptyCandidate,
	NoDataset,
}

impl Explorer {
	pub fn on_brush(&mut self, event: BrushEvent) -> PushOutcome {
		let generation = self.generation;
		let loaded = match self.accept(event.generation) {
			Ok(loaded) => loaded,
			Err(reason) => return reject(reason, generation, event.generation),
		};
		let Some(candidate) = loaded.dataset.subset_from_ids(&event.item_ids) else {
			return reject(RejectReason::UnknownItems, generation, event.generation);
		};

		if candidate.is_empty() {
			return reject(RejectReason::EmptyCandidate, generation, event.generation);
		}

		push(loaded, candidate, "brush")
	}

	pub fn on_range_settled(&mut self, settled: SettledRange) -> PushOutcome {
		let generation = self.generation;
		let loaded = match self.accept(settled.generation) {
			Ok(loaded) => loaded,
			Err(reason) => return reject(reason, generation, settled.generation),
		};
		let range = settled.range;

		if !range.is_finite() {
			return reject(RejectReason::EmptyCandidate, generation, settled.generation);
		}

		let candidate = loaded.dataset.subset_in_range(range.lo, range.hi);

		if candidate.is_empty() {
			return reject(RejectReason::EmptyCandidate, generation, settled.generation);
		}

		push(loaded, candidate, "range")
	}

	fn accept(&mut self, generation: Generation) -> Result<&mut Loaded, RejectReason> {
		let current = self.generation;
		let loaded = self.loaded.as_mut().ok_or(RejectReason::NoDataset)?;

		if generation != current {
			return Err(RejectReason::StaleGeneration);
		}

		Ok(loaded)
	}
}

fn push(loaded: &mut Loaded, candidate: scorescope_domain::Subset, source: &str) -> PushOutcome {
	let size = candidate.len();

	if !loaded.history.push(candidate) {
		tracing::debug!(source, size, "Candidate equals the current subset.");

		return PushOutcome::Duplicate;
	}

	tracing::info!(
		source,
		size,
		cursor = loaded.history.cursor(),
		entries = loaded.history.len(),
		"Applied filter."
	);

	PushOutcome::Applied
}

fn reject(reason: RejectReason, current: Generation, event: Generation) -> PushOutcome {
	tracing::warn!(
		?reason,
		generation = current.get(),
		event_generation = event.get(),
		"Rejected filter event."
	);

	PushOutcome::Rejected(reason)
}
