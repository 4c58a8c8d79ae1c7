pub mod debounce;
pub mod events;
pub mod source;
pub mod view;

mod error;

use std::{future::Future, pin::Pin, time::Duration};

use serde::{Deserialize, Serialize};

pub use debounce::{DebouncedRangeInput, RangeInputEvent, SettledRange};
pub use error::{Error, Result};
pub use events::{BrushEvent, PushOutcome, RejectReason};
pub use source::{JsonFileSource, ResultSource};
pub use view::{
	ControlsView, ExplorerView, HistogramBar, SliderView, StudiesView, StudyItemView, StudyView,
	SummaryView,
};
use scorescope_domain::{
	ColorMapper, Dataset, FilterHistory, GroupAggregator, Palette, ResultSet, Rgb, SelectionSet,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Identifies the dataset an event was produced against. Bumped on every load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Generation(u64);
impl Generation {
	pub fn get(self) -> u64 {
		self.0
	}

	fn next(self) -> Self {
		Self(self.0.wrapping_add(1))
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
	pub lo: f64,
	pub hi: f64,
}
impl ScoreRange {
	pub fn new(lo: f64, hi: f64) -> Self {
		Self { lo, hi }
	}

	pub fn is_finite(&self) -> bool {
		self.lo.is_finite() && self.hi.is_finite()
	}
}

struct Loaded {
	dataset: Dataset,
	groups: GroupAggregator,
	mapper: ColorMapper,
	history: FilterHistory,
}

/// Owns the filter history, the study selection and the color mapping for the current result
/// set, and answers every user event with a new [`ExplorerView`].
pub struct Explorer {
	palette: Palette,
	highlight_color: Rgb,
	debounce: Duration,
	generation: Generation,
	loaded: Option<Loaded>,
	selection: SelectionSet,
}
impl Explorer {
	pub fn new(cfg: &scorescope_config::ExplorerConfig) -> Result<Self> {
		let palette = Palette::parse(cfg.palette.as_slice())?;
		let highlight_color = Rgb::parse(&cfg.highlight_color)?;

		Ok(Self {
			palette,
			highlight_color,
			debounce: Duration::from_millis(cfg.debounce_ms),
			generation: Generation::default(),
			loaded: None,
			selection: SelectionSet::default(),
		})
	}

	pub fn debounce(&self) -> Duration {
		self.debounce
	}

	pub fn generation(&self) -> Generation {
		self.generation
	}

	/// Replaces the result set. History restarts at the full set and the selection is cleared.
	/// A rejected result set leaves the previous state untouched.
	pub fn load(&mut self, set: ResultSet) -> Result<()> {
		let dataset = Dataset::new(set).inspect_err(|err| {
			tracing::warn!(error = %err, "Rejected result set.");
		})?;
		let groups = GroupAggregator::new(&dataset);
		let mapper = ColorMapper::new(dataset.color_domain(), self.palette.clone());
		let history = FilterHistory::new(dataset.full());

		self.generation = self.generation.next();
		self.selection.clear();

		tracing::info!(
			generation = self.generation.get(),
			items = dataset.len(),
			total_count = dataset.total_count(),
			studies = groups.groups().len(),
			"Loaded result set."
		);

		self.loaded = Some(Loaded { dataset, groups, mapper, history });

		Ok(())
	}

	pub async fn refresh(&mut self, source: &dyn ResultSource, query: &str) -> Result<()> {
		let set = source.fetch(query).await?;

		self.load(set)
	}

	pub fn current_range(&self) -> Option<ScoreRange> {
		let loaded = self.loaded.as_ref()?;
		let (lo, hi) = loaded.dataset.score_range(loaded.history.current())?;

		Some(ScoreRange { lo, hi })
	}

	pub fn undo(&mut self) -> bool {
		let Some(loaded) = self.loaded.as_mut() else {
			return false;
		};
		let moved = loaded.history.undo();

		tracing::debug!(moved, cursor = loaded.history.cursor(), "Undo.");

		moved
	}

	pub fn redo(&mut self) -> bool {
		let Some(loaded) = self.loaded.as_mut() else {
			return false;
		};
		let moved = loaded.history.redo();

		tracing::debug!(moved, cursor = loaded.history.cursor(), "Redo.");

		moved
	}

	/// Back to the full result set with no study selected. Redo is no longer possible.
	pub fn start_over(&mut self) {
		self.selection.clear();

		if let Some(loaded) = self.loaded.as_mut() {
			loaded.history.reset_to_origin();
		}

		tracing::info!(generation = self.generation.get(), "Started over.");
	}

	pub fn toggle_group_highlight(&mut self, name: &str) -> bool {
		let known = self.loaded.as_ref().is_some_and(|loaded| loaded.groups.group(name).is_some());

		if !known {
			tracing::warn!(study = name, "Toggled a study that is not in the result set.");
		}

		let selected = self.selection.toggle(name);

		tracing::debug!(study = name, selected, selected_count = self.selection.len(), "Toggled study.");

		selected
	}

	pub fn view(&self) -> Option<ExplorerView> {
		let loaded = self.loaded.as_ref()?;

		Some(ExplorerView::build(
			self.generation,
			&loaded.dataset,
			&loaded.groups,
			&loaded.mapper,
			&loaded.history,
			&self.selection,
			self.highlight_color,
		))
	}
}
