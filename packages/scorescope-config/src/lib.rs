mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, DEFAULT_DEBOUNCE_MS, DEFAULT_HIGHLIGHT_COLOR, DEFAULT_PALETTE, ExplorerConfig,
	Service,
};

use std::{fs, path::Path};

use scorescope_domain::Rgb;

const MAX_DEBOUNCE_MS: u64 = 60_000;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.explorer.debounce_ms == 0 {
		return Err(Error::Validation {
			message: "explorer.debounce_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.explorer.debounce_ms > MAX_DEBOUNCE_MS {
		return Err(Error::Validation {
			message: format!("explorer.debounce_ms must be {MAX_DEBOUNCE_MS} or less."),
		});
	}
	if cfg.explorer.palette.len() < 2 {
		return Err(Error::Validation {
			message: "explorer.palette must contain at least two colors.".to_string(),
		});
	}

	for (index, color) in cfg.explorer.palette.iter().enumerate() {
		if Rgb::parse(color).is_err() {
			return Err(Error::Validation {
				message: format!("explorer.palette[{index}] must be a #rrggbb color."),
			});
		}
	}

	if Rgb::parse(&cfg.explorer.highlight_color).is_err() {
		return Err(Error::Validation {
			message: "explorer.highlight_color must be a #rrggbb color.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}

	for color in &mut cfg.explorer.palette {
		*color = color.trim().to_ascii_lowercase();
	}

	cfg.explorer.highlight_color = cfg.explorer.highlight_color.trim().to_ascii_lowercase();
}

#[cfg(test)]
mod tests {
	use crate::{Config, ExplorerConfig, Service, normalize, validate};

	fn config_with(explorer: ExplorerConfig) -> Config {
		Config { service: Service { log_level: "info".to_string() }, explorer }
	}

	#[test]
	fn default_explorer_is_valid() {
		assert!(validate(&config_with(ExplorerConfig::default())).is_ok());
	}

	#[test]
	fn normalize_lowercases_colors_and_fills_log_level() {
		let mut cfg = config_with(ExplorerConfig {
			palette: vec![" #FFD666".to_string(), "#FF7875 ".to_string()],
			highlight_color: "#3CCEA0".to_string(),
			..ExplorerConfig::default()
		});

		cfg.service.log_level = "  ".to_string();

		normalize(&mut cfg);

		assert_eq!(cfg.service.log_level, "info");
		assert_eq!(cfg.explorer.palette, vec!["#ffd666".to_string(), "#ff7875".to_string()]);
		assert_eq!(cfg.explorer.highlight_color, "#3ccea0");
		assert!(validate(&cfg).is_ok());
	}
}
