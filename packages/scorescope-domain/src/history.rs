use crate::dataset::Subset;

#[derive(Clone, Debug)]
pub struct FilterHistory<S = Subset> {
	entries: Vec<S>,
	cursor: usize,
}
impl<S> FilterHistory<S>
where
	S: PartialEq,
{
	pub fn new(origin: S) -> Self {
		Self { entries: vec![origin], cursor: 0 }
	}

	pub fn reset(&mut self, origin: S) {
		self.entries.clear();
		self.entries.push(origin);

		self.cursor = 0;
	}

	pub fn reset_to_origin(&mut self) {
		self.entries.truncate(1);

		self.cursor = 0;
	}

	/// Appends `candidate` after the cursor, discarding the redo future.
	///
	/// Returns `false` without touching the history when `candidate` equals the current entry.
	pub fn push(&mut self, candidate: S) -> bool {
		if self.entries[self.cursor] == candidate {
			return false;
		}

		self.entries.truncate(self.cursor + 1);
		self.entries.push(candidate);

		self.cursor = self.entries.len() - 1;

		true
	}

	pub fn undo(&mut self) -> bool {
		if !self.can_undo() {
			return false;
		}

		self.cursor -= 1;

		true
	}

	pub fn redo(&mut self) -> bool {
		if !self.can_redo() {
			return false;
		}

		self.cursor += 1;

		true
	}

	pub fn current(&self) -> &S {
		&self.entries[self.cursor]
	}

	pub fn can_undo(&self) -> bool {
		self.cursor > 0
	}

	pub fn can_redo(&self) -> bool {
		self.cursor + 1 < self.entries.len()
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		false
	}
}

#[cfg(test)]
mod tests {
	use crate::history::FilterHistory;

	#[test]
	fn reset_leaves_single_origin() {
		let mut history = FilterHistory::new(vec![1, 2, 3]);

		history.push(vec![1]);
		history.push(vec![2]);
		history.reset(vec![9, 8]);

		assert_eq!(history.len(), 1);
		assert_eq!(history.cursor(), 0);
		assert_eq!(history.current(), &vec![9, 8]);
	}

	#[test]
	fn duplicate_push_is_ignored() {
		let mut history = FilterHistory::new(vec![1, 2, 3]);

		assert!(history.push(vec![1, 2]));
		assert!(!history.push(vec![1, 2]));
		assert_eq!(history.len(), 2);
		assert!(!history.push(vec![1, 2]));
		assert_eq!(history.len(), 2);
	}

	#[test]
	fn pushing_the_origin_again_from_origin_is_ignored() {
		let mut history = FilterHistory::new(vec![1, 2, 3]);

		assert!(!history.push(vec![1, 2, 3]));
		assert_eq!(history.len(), 1);
	}

	#[test]
	fn undo_redo_round_trip_restores_state() {
		let mut history = FilterHistory::new(0);

		for step in 1..=4 {
			history.push(step);
		}

		let before = *history.current();

		for _ in 0..3 {
			assert!(history.undo());
		}
		for _ in 0..3 {
			assert!(history.redo());
		}

		assert_eq!(*history.current(), before);
	}

	#[test]
	fn push_after_undo_truncates_future() {
		let mut history = FilterHistory::new("origin");

		history.push("first");
		history.push("second");
		history.undo();
		history.push("third");

		assert_eq!(history.len(), 3);
		assert_eq!(*history.current(), "third");
		assert!(!history.can_redo());
		assert!(history.undo());
		assert_eq!(*history.current(), "first");
	}

	#[test]
	fn navigation_at_boundaries_is_a_no_op() {
		let mut history = FilterHistory::new('o');

		assert!(!history.undo());
		assert!(!history.redo());

		history.push('a');

		assert!(!history.redo());
		assert!(history.undo());
		assert!(!history.undo());
		assert_eq!(history.cursor(), 0);
	}

	#[test]
	fn reset_to_origin_keeps_first_entry() {
		let mut history = FilterHistory::new('o');

		history.push('a');
		history.push('b');
		history.reset_to_origin();

		assert_eq!(history.len(), 1);
		assert_eq!(*history.current(), 'o');
		assert!(!history.can_redo());
	}
}
