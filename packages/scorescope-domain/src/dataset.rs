use std::{cmp::Ordering, sync::Arc};

use ahash::AHashMap;
use serde::Serialize;

use crate::{
	color::ColorDomain,
	error::{Error, Result},
	item::{Item, ResultSet},
};

/// A sorted, de-duplicated selection of item positions within a [`Dataset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subset {
	positions: Arc<[usize]>,
}
impl Subset {
	fn from_unsorted(mut positions: Vec<usize>) -> Self {
		positions.sort_unstable();
		positions.dedup();

		Self { positions: positions.into() }
	}

	pub fn positions(&self) -> &[usize] {
		&self.positions
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn contains(&self, position: usize) -> bool {
		self.positions.binary_search(&position).is_ok()
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PercentileWindow {
	pub lower: f64,
	pub upper: f64,
}

#[derive(Debug)]
pub struct Dataset {
	items: Arc<[Item]>,
	index: AHashMap<String, usize>,
	total_count: usize,
	domain: ColorDomain,
}
impl Dataset {
	pub fn new(set: ResultSet) -> Result<Self> {
		let total_count = set.total_count();
		let mut index = AHashMap::with_capacity(set.items.len());

		for (position, item) in set.items.iter().enumerate() {
			if !item.score.is_finite() {
				return Err(Error::NonFiniteScore { id: item.id.clone() });
			}
			if index.insert(item.id.clone(), position).is_some() {
				return Err(Error::DuplicateItemId { id: item.id.clone() });
			}
		}

		let domain = ColorDomain::from_scores(set.items.iter().map(|item| item.score));

		Ok(Self { items: set.items.into(), index, total_count, domain })
	}

	pub fn items(&self) -> &[Item] {
		&self.items
	}

	pub fn item(&self, position: usize) -> Option<&Item> {
		self.items.get(position)
	}

	pub fn position_of(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn total_count(&self) -> usize {
		self.total_count
	}

	pub fn color_domain(&self) -> ColorDomain {
		self.domain
	}

	pub fn full(&self) -> Subset {
		Subset { positions: (0..self.items.len()).collect() }
	}

	pub fn members<'a>(&'a self, subset: &'a Subset) -> impl Iterator<Item = &'a Item> + 'a {
		subset.positions().iter().filter_map(|&position| self.items.get(position))
	}

	/// Resolves a candidate by id. Any id unknown to this dataset makes the whole candidate stale.
	pub fn subset_from_ids<I, S>(&self, ids: I) -> Option<Subset>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut positions = Vec::new();

		for id in ids {
			positions.push(self.position_of(id.as_ref())?);
		}

		Some(Subset::from_unsorted(positions))
	}

	/// Items of the full dataset scoring within `[lo, hi]`, bounds in either order.
	pub fn subset_in_range(&self, lo: f64, hi: f64) -> Subset {
		let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
		let positions = self
			.items
			.iter()
			.enumerate()
			.filter(|(_, item)| item.score >= lo && item.score <= hi)
			.map(|(position, _)| position)
			.collect();

		Subset { positions }
	}

	pub fn score_range(&self, subset: &Subset) -> Option<(f64, f64)> {
		self.members(subset).map(|item| item.score).fold(None, |range, score| match range {
			None => Some((score, score)),
			Some((min, max)) => Some((min.min(score), max.max(score))),
		})
	}

	pub fn slider_marks(&self) -> Vec<f64> {
		let mut marks: Vec<f64> = self.items.iter().map(|item| item.score).collect();

		marks.sort_by(f64::total_cmp);
		marks.dedup();

		marks
	}

	pub fn histogram_order(&self, subset: &Subset) -> Vec<usize> {
		let mut order: Vec<usize> = subset
			.positions()
			.iter()
			.copied()
			.filter(|&position| position < self.items.len())
			.collect();

		order.sort_by(|&a, &b| {
			self.items[a].score.partial_cmp(&self.items[b].score).unwrap_or(Ordering::Equal)
		});

		order
	}

	pub fn percentile_window(&self, subset: &Subset) -> Option<PercentileWindow> {
		let (min, max) = self.score_range(subset)?;
		let total = self.items.len() as f64;
		let at_or_below =
			|bound: f64| self.items.iter().filter(|item| item.score <= bound).count() as f64;

		Some(PercentileWindow {
			lower: at_or_below(min) / total * 100.0,
			upper: at_or_below(max) / total * 100.0,
		})
	}
}
