use std::path::PathBuf;

use scorescope_domain::ResultSet;

use crate::{BoxFuture, Error, Result};

/// The search collaborator. Delivers the full result set for a query; fetching, caching and
/// retrying are its concern, never the explorer's.
pub trait ResultSource
where
	Self: Send + Sync,
{
	fn fetch<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<ResultSet>>;
}

#[derive(Clone, Debug)]
pub struct JsonFileSource {
	path: PathBuf,
}
impl JsonFileSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	async fn read(&self) -> Result<ResultSet> {
		let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| Error::Source {
			message: format!("Failed to read {}: {err}.", self.path.display()),
		})?;

		serde_json::from_str(&raw).map_err(|err| Error::Source {
			message: format!("Failed to parse {}: {err}.", self.path.display()),
		})
	}
}

impl ResultSource for JsonFileSource {
	fn fetch<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<ResultSet>> {
		Box::pin(async move {
			tracing::debug!(query, path = %self.path.display(), "Reading result set from file.");

			self.read().await
		})
	}
}
