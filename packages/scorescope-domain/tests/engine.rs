use scorescope_domain::{
	ColorMapper, Dataset, FilterHistory, GroupAggregator, Highlight, HighlightState, Palette,
	ResultSet, SelectionSet,
};
use scorescope_testkit::{TWO_STOP_PALETTE, item, spread_result_set, two_study_result_set};

fn two_study_dataset() -> Dataset {
	Dataset::new(two_study_result_set()).expect("Fixture must be valid.")
}

fn mapper_for(dataset: &Dataset, palette: &[&str]) -> ColorMapper {
	ColorMapper::new(dataset.color_domain(), Palette::parse(palette).expect("Palette must parse."))
}

#[test]
fn reset_yields_origin_only() {
	for set in [two_study_result_set(), spread_result_set(40, 3), ResultSet::default()] {
		let dataset = Dataset::new(set).expect("Fixture must be valid.");
		let mut history = FilterHistory::new(dataset.subset_in_range(0.0, 0.0));

		history.push(dataset.subset_in_range(1.0, 2.0));
		history.reset(dataset.full());

		assert_eq!(history.len(), 1);
		assert_eq!(history.cursor(), 0);
		assert_eq!(history.current(), &dataset.full());
	}
}

#[test]
fn id_set_equal_candidate_does_not_grow_history() {
	let dataset = two_study_dataset();
	let mut history = FilterHistory::new(dataset.full());
	let brushed = dataset.subset_from_ids(["b2", "a3", "b1"]).expect("Ids are known.");
	let reordered = dataset.subset_from_ids(["b1", "b2", "a3"]).expect("Ids are known.");

	assert!(history.push(brushed));
	assert!(!history.push(reordered));
	assert!(!history.push(dataset.subset_in_range(30.0, 50.0)));
	assert_eq!(history.len(), 2);
}

#[test]
fn undo_then_redo_restores_each_depth() {
	let dataset = Dataset::new(spread_result_set(30, 4)).expect("Fixture must be valid.");
	let mut history = FilterHistory::new(dataset.full());
	let pushes = [(0.0, 40.0), (3.0, 30.0), (6.0, 12.0), (7.5, 9.0)];

	for (lo, hi) in pushes {
		assert!(history.push(dataset.subset_in_range(lo, hi)));
	}

	let top = history.current().clone();

	for k in 0..=pushes.len() {
		for _ in 0..k {
			assert!(history.undo());
		}
		for _ in 0..k {
			assert!(history.redo());
		}

		assert_eq!(history.current(), &top, "Round trip of depth {k} must restore the top.");
	}
}

#[test]
fn range_filter_always_starts_from_full_dataset() {
	let dataset = two_study_dataset();
	let mut history = FilterHistory::new(dataset.full());

	history.push(dataset.subset_in_range(10.0, 20.0));
	history.push(dataset.subset_in_range(40.0, 50.0));

	let ids: Vec<&str> = dataset.members(history.current()).map(|item| item.id.as_str()).collect();

	assert_eq!(ids, vec!["b1", "b2"]);
}

#[test]
fn palette_ends_match_domain_ends() {
	let dataset = two_study_dataset();
	let mapper = mapper_for(&dataset, &["#ffd666", "#ffc069", "#ff9c6e", "#ff7875"]);
	let stops = mapper.palette().stops();

	assert_eq!(mapper.color_for(10.0), stops[0]);
	assert_eq!(mapper.color_for(50.0), stops[stops.len() - 1]);
}

#[test]
fn palette_position_is_monotonic_in_score() {
	let dataset = Dataset::new(spread_result_set(200, 5)).expect("Fixture must be valid.");
	let mapper = mapper_for(&dataset, &["#ffd666", "#ffc069", "#ff9c6e", "#ff7875"]);
	let mut previous = f64::NEG_INFINITY;

	for item in dataset.items() {
		let position = mapper.position(item.score);

		assert!(position >= previous, "Position fell at score {}.", item.score);

		previous = position;
	}

	assert_eq!(previous, 3.0);
}

#[test]
fn empty_dataset_domain_is_degenerate() {
	let dataset = Dataset::new(ResultSet::default()).expect("Empty sets are valid.");
	let mapper = mapper_for(&dataset, &TWO_STOP_PALETTE);

	assert!(dataset.color_domain().is_degenerate());
	assert_eq!(mapper.position(42.0), 0.0);
	assert!(mapper.position(42.0).is_finite());
}

#[test]
fn visible_groups_never_lack_members() {
	let dataset = Dataset::new(spread_result_set(60, 7)).expect("Fixture must be valid.");
	let aggregator = GroupAggregator::new(&dataset);

	for (lo, hi) in [(0.0, 0.0), (0.0, 10.0), (12.0, 13.5), (30.0, 90.0), (88.5, 88.5)] {
		let subset = dataset.subset_in_range(lo, hi);
		let view = aggregator.groups_containing(&subset);

		assert_eq!(view.total_groups(), 7);

		for group in view.visible() {
			assert!(group.members.iter().any(|member| member.in_subset), "{} is empty.", group.name);
		}

		let flagged: usize = view.all().iter().map(|group| group.in_subset_count).sum();

		assert_eq!(flagged, subset.len());
	}
}

#[test]
fn group_order_and_member_order_follow_dataset() {
	let dataset = Dataset::new(ResultSet::new(vec![
		item("x1", "X", 5.0),
		item("y1", "Y", 9.0),
		item("x2", "X", 1.0),
		item("z1", "Z", 3.0),
		item("y2", "Y", 2.0),
	]))
	.expect("Fixture must be valid.");
	let aggregator = GroupAggregator::new(&dataset);
	let names: Vec<&str> = aggregator.groups().iter().map(|group| group.name.as_str()).collect();

	assert_eq!(names, vec!["X", "Y", "Z"]);
	assert_eq!(aggregator.group("Y").map(|group| group.members.clone()), Some(vec![1, 4]));
}

#[test]
fn scenario_mid_range_push_spans_both_studies() {
	let dataset = two_study_dataset();
	let aggregator = GroupAggregator::new(&dataset);
	let mapper = mapper_for(&dataset, &TWO_STOP_PALETTE);
	let mut history = FilterHistory::new(dataset.full());

	assert!(history.push(dataset.subset_in_range(25.0, 45.0)));

	let view = aggregator.groups_containing(history.current());
	let visible: Vec<(&str, usize, usize)> = view
		.visible()
		.map(|group| (group.name, group.in_subset_count, group.members.len()))
		.collect();

	assert_eq!(visible, vec![("A", 1, 3), ("B", 1, 2)]);

	let band = (0..mapper.band_count())
		.find(|&band| {
			mapper.bucket_range(band).is_some_and(|range| range.contains(25.0) && range.contains(45.0))
		})
		.expect("One band must cover 25-45.");

	assert_eq!(mapper.count_in_band(dataset.members(history.current()), band), 2);
	assert_eq!(mapper.count_in_band(dataset.items(), band), 5);
}

#[test]
fn scenario_selected_study_outside_subset_highlights_nothing() {
	let dataset = two_study_dataset();
	let subset = dataset.subset_from_ids(["b1", "b2"]).expect("Ids are known.");
	let mut selection = SelectionSet::default();

	assert!(matches!(selection.highlighted(&dataset, &subset), Highlight::None));

	selection.toggle("A");

	let highlight = selection.highlighted(&dataset, &subset);

	assert!(matches!(&highlight, Highlight::Active(positions) if positions.is_empty()));
	assert!(highlight.ids(&dataset).is_empty());

	for position in dataset.full().positions() {
		assert_eq!(highlight.state_of(*position), HighlightState::Inactive);
	}
}

#[test]
fn highlight_assigns_every_item_a_state() {
	let dataset = two_study_dataset();
	let mut selection = SelectionSet::default();

	selection.toggle("B");

	let highlight = selection.highlighted(&dataset, &dataset.full());
	let states: Vec<HighlightState> =
		dataset.full().positions().iter().map(|&position| highlight.state_of(position)).collect();

	assert_eq!(highlight.ids(&dataset), vec!["b1", "b2"]);
	assert_eq!(
		states,
		vec![
			HighlightState::Inactive,
			HighlightState::Inactive,
			HighlightState::Inactive,
			HighlightState::Active,
			HighlightState::Active,
		]
	);

	selection.toggle("B");

	let cleared = selection.highlighted(&dataset, &dataset.full());

	assert!(matches!(cleared, Highlight::None));
	assert_eq!(cleared.state_of(3), HighlightState::Default);
}

#[test]
fn legend_reports_partial_counts() {
	let dataset = two_study_dataset();
	let mapper = mapper_for(&dataset, &["#ffd666", "#ffc069", "#ff7875"]);
	let subset = dataset.subset_in_range(10.0, 20.0);
	let legend = mapper.legend(&dataset, &subset);

	assert_eq!(legend.len(), 2);
	assert_eq!(legend[0].label, "10 - 30");
	assert_eq!(legend[0].description, "(2 / 3 variables)");
	assert!(!legend[0].dimmed);
	assert_eq!(legend[1].label, "30 - 50");
	assert_eq!(legend[1].description, "(0 / 3 variables)");
	assert!(legend[1].dimmed);

	let full = mapper.legend(&dataset, &dataset.full());

	assert_eq!(full[0].description, "(3 variables)");
}
