use serde::Serialize;

use scorescope_domain::{
	ColorMapper, Dataset, FilterHistory, GroupAggregator, Highlight, HighlightState, LegendEntry,
	PercentileWindow, Rgb, SelectionSet,
};

use crate::{Generation, ScoreRange};

#[derive(Clone, Debug, Serialize)]
pub struct ExplorerView {
	pub generation: Generation,
	pub histogram: Vec<HistogramBar>,
	/// `None` while no study is selected, so nothing is dimmed.
	pub highlighted_ids: Option<Vec<String>>,
	pub slider: SliderView,
	pub legend: Vec<LegendEntry>,
	pub studies: StudiesView,
	pub summary: SummaryView,
	pub controls: ControlsView,
}

#[derive(Clone, Debug, Serialize)]
pub struct HistogramBar {
	pub id: String,
	pub name: String,
	pub study_name: String,
	pub score: f64,
	pub color: Rgb,
	pub fill: Rgb,
	pub state: HighlightState,
}

#[derive(Clone, Debug, Serialize)]
pub struct SliderView {
	pub min: f64,
	pub max: f64,
	pub value: Option<ScoreRange>,
	pub marks: Vec<f64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StudiesView {
	pub shown: usize,
	pub total: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub caption: Option<String>,
	pub groups: Vec<StudyView>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StudyView {
	pub name: String,
	pub label: String,
	pub selected: bool,
	pub items: Vec<StudyItemView>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StudyItemView {
	pub id: String,
	pub name: String,
	pub description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
	pub in_subset: bool,
	pub state: HighlightState,
}

#[derive(Clone, Debug, Serialize)]
pub struct SummaryView {
	pub shown: usize,
	pub total_count: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub percentiles: Option<PercentileWindow>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub caption: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ControlsView {
	pub can_undo: bool,
	pub can_redo: bool,
	pub cursor: usize,
	pub entries: usize,
}

impl ExplorerView {
	pub(crate) fn build(
		generation: Generation,
		dataset: &Dataset,
		groups: &GroupAggregator,
		mapper: &ColorMapper,
		history: &FilterHistory,
		selection: &SelectionSet,
		highlight_color: Rgb,
	) -> Self {
		let subset = history.current();
		let highlight = selection.highlighted(dataset, subset);
		let highlighted_ids = match &highlight {
			Highlight::None => None,
			Highlight::Active(_) =>
				Some(highlight.ids(dataset).into_iter().map(str::to_string).collect()),
		};
		let histogram = dataset
			.histogram_order(subset)
			.into_iter()
			.filter_map(|position| {
				let item = dataset.item(position)?;
				let color = mapper.color_for(item.score);
				let state = highlight.state_of(position);
				let fill = if state == HighlightState::Active { highlight_color } else { color };

				Some(HistogramBar {
					id: item.id.clone(),
					name: item.name.clone(),
					study_name: item.study_name.clone(),
					score: item.score,
					color,
					fill,
					state,
				})
			})
			.collect();
		let domain = dataset.color_domain();
		let slider = SliderView {
			min: domain.min,
			max: domain.max,
			value: dataset.score_range(subset).map(|(lo, hi)| ScoreRange { lo, hi }),
			marks: dataset.slider_marks(),
		};
		let group_view = groups.groups_containing(subset);
		let study_rows: Vec<StudyView> = group_view
			.visible()
			.map(|group| StudyView {
				name: group.name.to_string(),
				label: group.label(),
				selected: selection.contains(group.name),
				items: group
					.members
					.iter()
					.filter_map(|member| {
						let item = dataset.item(member.position)?;

						Some(StudyItemView {
							id: item.id.clone(),
							name: item.name.clone(),
							description: item.description.clone(),
							link: item.link.clone(),
							in_subset: member.in_subset,
							state: highlight.state_of(member.position),
						})
					})
					.collect(),
			})
			.collect();
		let shown_studies = group_view.visible_count();
		let total_studies = group_view.total_groups();
		let studies = StudiesView {
			shown: shown_studies,
			total: total_studies,
			caption: (shown_studies < total_studies)
				.then(|| format!("Showing {shown_studies} of {total_studies} studies")),
			groups: study_rows,
		};
		let shown = subset.len();
		let total_count = dataset.total_count();
		let percentiles =
			if shown < total_count { dataset.percentile_window(subset) } else { None };
		let summary = SummaryView {
			shown,
			total_count,
			percentiles,
			caption: percentiles.map(|window| {
				format!(
					"Viewing {shown} variables within the {}-{} percentiles",
					window.lower.floor(),
					window.upper.floor()
				)
			}),
		};
		let controls = ControlsView {
			can_undo: history.can_undo(),
			can_redo: history.can_redo(),
			cursor: history.cursor(),
			entries: history.len(),
		};

		Self {
			generation,
			histogram,
			highlighted_ids,
			slider,
			legend: mapper.legend(dataset, subset),
			studies,
			summary,
			controls,
		}
	}
}
