use std::collections::BTreeSet;

use ahash::AHashSet;
use serde::Serialize;

use crate::dataset::{Dataset, Subset};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightState {
	Default,
	Active,
	Inactive,
}

#[derive(Clone, Debug)]
pub enum Highlight {
	None,
	Active(AHashSet<usize>),
}
impl Highlight {
	pub fn state_of(&self, position: usize) -> HighlightState {
		match self {
			Self::None => HighlightState::Default,
			Self::Active(positions) if positions.contains(&position) => HighlightState::Active,
			Self::Active(_) => HighlightState::Inactive,
		}
	}

	pub fn ids<'a>(&self, dataset: &'a Dataset) -> Vec<&'a str> {
		let Self::Active(positions) = self else {
			return Vec::new();
		};
		let mut sorted: Vec<usize> = positions.iter().copied().collect();

		sorted.sort_unstable();

		sorted
			.into_iter()
			.filter_map(|position| dataset.item(position))
			.map(|item| item.id.as_str())
			.collect()
	}
}

#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
	names: BTreeSet<String>,
}
impl SelectionSet {
	/// Adds `name` if absent, removes it otherwise. Returns whether it is now selected.
	pub fn toggle(&mut self, name: &str) -> bool {
		if self.names.remove(name) {
			return false;
		}

		self.names.insert(name.to_string());

		true
	}

	pub fn contains(&self, name: &str) -> bool {
		self.names.contains(name)
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn clear(&mut self) {
		self.names.clear();
	}

	pub fn highlighted(&self, dataset: &Dataset, subset: &Subset) -> Highlight {
		if self.names.is_empty() {
			return Highlight::None;
		}

		let positions = subset
			.positions()
			.iter()
			.copied()
			.filter(|&position| {
				dataset.item(position).is_some_and(|item| self.names.contains(&item.study_name))
			})
			.collect();

		Highlight::Active(positions)
	}
}
