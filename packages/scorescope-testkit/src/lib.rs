mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use scorescope_config::ExplorerConfig;
use scorescope_domain::{Item, ResultSet};

/// Two-color gradient, so the whole domain is a single legend band.
pub const TWO_STOP_PALETTE: [&str; 2] = ["#ffd666", "#ff7875"];

static FIXTURE_SEQ: AtomicU64 = AtomicU64::new(0);

pub fn item(id: &str, study_name: &str, score: f64) -> Item {
	Item {
		id: id.to_string(),
		name: format!("{id}_name"),
		description: format!("Description of {id}."),
		score,
		study_name: study_name.to_string(),
		link: None,
	}
}

/// Five items over two studies: `A` scores 10, 20, 30 and `B` scores 40, 50.
pub fn two_study_items() -> Vec<Item> {
	vec![
		item("a1", "A", 10.0),
		item("a2", "A", 20.0),
		item("a3", "A", 30.0),
		item("b1", "B", 40.0),
		item("b2", "B", 50.0),
	]
}

pub fn two_study_result_set() -> ResultSet {
	ResultSet::new(two_study_items())
}

/// `count` items spread round-robin over `studies` studies with distinct ascending scores.
pub fn spread_result_set(count: usize, studies: usize) -> ResultSet {
	let studies = studies.max(1);
	let items = (0..count)
		.map(|index| {
			item(&format!("v{index:04}"), &format!("study_{}", index % studies), index as f64 * 1.5)
		})
		.collect();

	ResultSet::new(items)
}

pub fn explorer_config() -> ExplorerConfig {
	ExplorerConfig::default()
}

pub fn explorer_config_with_palette(palette: &[&str]) -> ExplorerConfig {
	ExplorerConfig {
		palette: palette.iter().map(|color| color.to_string()).collect(),
		..ExplorerConfig::default()
	}
}

/// Writes `set` as JSON to a unique temp file and returns its path.
pub fn write_result_set(set: &ResultSet) -> Result<PathBuf> {
	let path = unique_temp_path("results", "json")?;

	fs::write(&path, serde_json::to_vec_pretty(set)?)?;

	Ok(path)
}

fn unique_temp_path(prefix: &str, extension: &str) -> Result<PathBuf> {
	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map_err(|err| Error::Message(format!("System clock is before the Unix epoch: {err}.")))?
		.as_nanos();
	let seq = FIXTURE_SEQ.fetch_add(1, Ordering::Relaxed);

	Ok(env::temp_dir().join(format!("scorescope_{prefix}_{nanos}_{seq}.{extension}")))
}
