use docsearch_api::{Navigation, Suggestion};
use serde::Serialize;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// `false` when the user quit without choosing a page.
	pub accepted: bool,
	pub query: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub navigation: Option<Navigation>,
	/// Absolute URL of the chosen page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// The suggestion that was picked, if navigation targets one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub selection: Option<Suggestion>,
}

impl SearchOutcome {
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			navigation: None,
			url: None,
			selection: None,
		}
	}
}
