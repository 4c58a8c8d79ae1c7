pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Result source error: {message}")]
	Source { message: String },
	#[error("Range input driver has stopped.")]
	InputClosed,
	#[error(transparent)]
	Domain(#[from] scorescope_domain::Error),
}
