use serde::Deserialize;

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#3ccea0";
// Gold, orange, volcano and red at intensity 4 of the Ant Design palettes.
pub const DEFAULT_PALETTE: [&str; 4] = ["#ffd666", "#ffc069", "#ff9c6e", "#ff7875"];

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub explorer: ExplorerConfig,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExplorerConfig {
	/// Quiet period, in milliseconds, before a range slider drag settles.
	#[serde(default = "default_debounce_ms")]
	pub debounce_ms: u64,
	/// Ordered `#rrggbb` stops of the score gradient, lowest score first.
	#[serde(default = "default_palette")]
	pub palette: Vec<String>,
	#[serde(default = "default_highlight_color")]
	pub highlight_color: String,
}
impl Default for ExplorerConfig {
	fn default() -> Self {
		Self {
			debounce_ms: default_debounce_ms(),
			palette: default_palette(),
			highlight_color: default_highlight_color(),
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_debounce_ms() -> u64 {
	DEFAULT_DEBOUNCE_MS
}

fn default_palette() -> Vec<String> {
	DEFAULT_PALETTE.iter().map(|color| color.to_string()).collect()
}

fn default_highlight_color() -> String {
	DEFAULT_HIGHLIGHT_COLOR.to_string()
}
