use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::{
	dataset::{Dataset, Subset},
	error::{Error, Result},
	item::Item,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}
impl Rgb {
	pub fn parse(value: &str) -> Result<Self> {
		let invalid = || Error::InvalidColor { value: value.to_string() };
		let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;

		if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
			return Err(invalid());
		}

		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
		};

		Ok(Self { r: channel(0..2)?, g: channel(2..4)?, b: channel(4..6)? })
	}

	/// Mixes in linear RGB so the midpoint of two stops does not darken.
	fn mix_linear(self, other: Self, t: f64) -> Self {
		let mix = |a: u8, b: u8| {
			let (a, b) = (f64::from(a), f64::from(b));

			(a * a * (1.0 - t) + b * b * t).sqrt().round().clamp(0.0, 255.0) as u8
		};

		Self { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
	}
}
impl Display for Rgb {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}
impl Serialize for Rgb {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
	stops: Vec<Rgb>,
}
impl Palette {
	pub fn new(stops: Vec<Rgb>) -> Result<Self> {
		if stops.len() < 2 {
			return Err(Error::PaletteTooShort { count: stops.len() });
		}

		Ok(Self { stops })
	}

	pub fn parse<S>(values: &[S]) -> Result<Self>
	where
		S: AsRef<str>,
	{
		let stops = values.iter().map(|value| Rgb::parse(value.as_ref())).collect::<Result<_>>()?;

		Self::new(stops)
	}

	pub fn stops(&self) -> &[Rgb] {
		&self.stops
	}

	pub fn len(&self) -> usize {
		self.stops.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stops.is_empty()
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorDomain {
	pub min: f64,
	pub max: f64,
}
impl ColorDomain {
	pub fn from_scores<I>(scores: I) -> Self
	where
		I: IntoIterator<Item = f64>,
	{
		let mut scores = scores.into_iter();
		let Some(first) = scores.next() else {
			return Self { min: 0.0, max: 0.0 };
		};

		scores.fold(Self { min: first, max: first }, |domain, score| Self {
			min: domain.min.min(score),
			max: domain.max.max(score),
		})
	}

	pub fn is_degenerate(&self) -> bool {
		self.max <= self.min
	}

	/// Normalized position of `score`, clamped to `[0, 1]`. A collapsed domain maps to `0`.
	pub fn ratio(&self, score: f64) -> f64 {
		if self.is_degenerate() || !score.is_finite() {
			return 0.0;
		}

		((score - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreBand {
	pub lower: f64,
	pub upper: f64,
}
impl ScoreBand {
	pub fn contains(&self, score: f64) -> bool {
		score >= self.lower && score <= self.upper
	}

	pub fn label(&self) -> String {
		format!("{} - {}", format_score(self.lower), format_score(self.upper))
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct LegendEntry {
	pub band: usize,
	pub color: Rgb,
	pub label: String,
	pub description: String,
	pub range: ScoreBand,
	pub total: usize,
	pub in_subset: usize,
	pub dimmed: bool,
}

#[derive(Clone, Debug)]
pub struct ColorMapper {
	domain: ColorDomain,
	palette: Palette,
}
impl ColorMapper {
	pub fn new(domain: ColorDomain, palette: Palette) -> Self {
		Self { domain, palette }
	}

	pub fn domain(&self) -> ColorDomain {
		self.domain
	}

	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	pub fn position(&self, score: f64) -> f64 {
		self.domain.ratio(score) * (self.palette.len() - 1) as f64
	}

	pub fn color_for(&self, score: f64) -> Rgb {
		let stops = self.palette.stops();
		let position = self.position(score);
		let lower = (position.floor() as usize).min(stops.len() - 2);

		stops[lower].mix_linear(stops[lower + 1], position - lower as f64)
	}

	pub fn band_count(&self) -> usize {
		self.palette.len() - 1
	}

	pub fn bucket_range(&self, band: usize) -> Option<ScoreBand> {
		let bands = self.band_count();

		if band >= bands {
			return None;
		}

		let ColorDomain { min, max } = self.domain;
		let span = max - min;
		let lower = if band == 0 { min.floor() } else { min + span * band as f64 / bands as f64 };
		let upper = if band + 1 == bands {
			max.ceil()
		} else {
			min + span * (band + 1) as f64 / bands as f64
		};

		Some(ScoreBand { lower, upper })
	}

	pub fn count_in_band<'a, I>(&self, items: I, band: usize) -> usize
	where
		I: IntoIterator<Item = &'a Item>,
	{
		let Some(range) = self.bucket_range(band) else {
			return 0;
		};

		items.into_iter().filter(|item| range.contains(item.score)).count()
	}

	pub fn legend(&self, dataset: &Dataset, subset: &Subset) -> Vec<LegendEntry> {
		let full = dataset.full();

		(0..self.band_count())
			.filter_map(|band| {
				let range = self.bucket_range(band)?;
				let total = self.count_in_band(dataset.members(&full), band);
				let in_subset = self.count_in_band(dataset.members(subset), band);
				let description = if in_subset < total {
					format!("({in_subset} / {total} variables)")
				} else {
					format!("({total} variables)")
				};

				Some(LegendEntry {
					band,
					color: self.palette.stops()[band],
					label: range.label(),
					description,
					range,
					total,
					in_subset,
					dimmed: in_subset == 0,
				})
			})
			.collect()
	}
}

fn format_score(value: f64) -> String {
	let rendered = format!("{value:.2}");

	rendered.trim_end_matches('0').trim_end_matches('.').to_string()
}
