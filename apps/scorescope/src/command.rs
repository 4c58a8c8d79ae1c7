use std::{path::PathBuf, time::Duration};

use scorescope_service::ScoreRange;

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
	Brush(Vec<String>),
	Span { from: String, to: String },
	Range(ScoreRange),
	Undo,
	Redo,
	Toggle(String),
	Reset,
	View,
	Load(PathBuf),
	Wait(Duration),
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
	let line = line.trim();

	if line.is_empty() || line.starts_with('#') {
		return Ok(None);
	}

	let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
	let rest = rest.trim();
	let args: Vec<&str> = rest.split_whitespace().collect();
	let command = match verb {
		"brush" => {
			if args.is_empty() {
				return Err(Error::Command("brush expects at least one item id.".to_string()));
			}

			Command::Brush(args.iter().map(|id| id.to_string()).collect())
		},
		"span" => match args.as_slice() {
			[from, to] => Command::Span { from: from.to_string(), to: to.to_string() },
			_ => return Err(Error::Command("span expects two item ids.".to_string())),
		},
		"range" => match args.as_slice() {
			[lo, hi] => Command::Range(ScoreRange::new(parse_score(lo)?, parse_score(hi)?)),
			_ => return Err(Error::Command("range expects two scores.".to_string())),
		},
		"toggle" => {
			if rest.is_empty() {
				return Err(Error::Command("toggle expects a study name.".to_string()));
			}

			Command::Toggle(rest.to_string())
		},
		"load" => {
			if rest.is_empty() {
				return Err(Error::Command("load expects a file path.".to_string()));
			}

			Command::Load(PathBuf::from(rest))
		},
		"wait" => match args.as_slice() {
			[ms] => Command::Wait(Duration::from_millis(ms.parse().map_err(|_| {
				Error::Command(format!("wait expects milliseconds, got {ms:?}."))
			})?)),
			_ => return Err(Error::Command("wait expects milliseconds.".to_string())),
		},
		"undo" | "redo" | "reset" | "view" if !args.is_empty() =>
			return Err(Error::Command(format!("{verb} takes no arguments."))),
		"undo" => Command::Undo,
		"redo" => Command::Redo,
		"reset" => Command::Reset,
		"view" => Command::View,
		_ => return Err(Error::Command(format!("Unknown command {verb:?}."))),
	};

	Ok(Some(command))
}

fn parse_score(raw: &str) -> Result<f64> {
	let score: f64 =
		raw.parse().map_err(|_| Error::Command(format!("Expected a score, got {raw:?}.")))?;

	if !score.is_finite() {
		return Err(Error::Command(format!("Score {raw:?} is not finite.")));
	}

	Ok(score)
}
