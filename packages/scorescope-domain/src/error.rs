pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
	#[error("Duplicate item id {id:?} in result set.")]
	DuplicateItemId { id: String },
	#[error("Item {id:?} has a non-finite score.")]
	NonFiniteScore { id: String },
	#[error("A palette needs at least two colors, got {count}.")]
	PaletteTooShort { count: usize },
	#[error("Invalid color {value:?}, expected #rrggbb.")]
	InvalidColor { value: String },
}
