use serde::{Deserialize, Serialize};

/// One scored search hit ("variable").
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Item {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	pub score: f64,
	pub study_name: String,
	#[serde(default, alias = "e_link", skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
}

/// Payload delivered by the search collaborator whenever the query changes.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ResultSet {
	pub items: Vec<Item>,
	#[serde(default)]
	pub total_count: Option<usize>,
}
impl ResultSet {
	pub fn new(items: Vec<Item>) -> Self {
		Self { items, total_count: None }
	}

	pub fn total_count(&self) -> usize {
		self.total_count.unwrap_or(self.items.len())
	}
}
