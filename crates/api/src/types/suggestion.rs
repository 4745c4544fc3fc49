use serde::{Deserialize, Serialize};

use super::SuggestionKind;

/// A single searchable entity returned by one of the search endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
	pub kind: SuggestionKind,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Section header, set on the first entry of each result group.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	#[serde(rename = "iconURL", default)]
	pub icon_url: String,
}

impl Suggestion {
	pub fn new(kind: impl Into<SuggestionKind>, name: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			name: name.into(),
			title: None,
			label: None,
			icon_url: String::new(),
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
		self.icon_url = icon_url.into();
		self
	}

	/// Text shown for the suggestion in the list.
	///
	/// Tutorials and vignettes are listed by title, everything else by name.
	#[must_use]
	pub fn display_text(&self) -> &str {
		if self.kind.is_document() {
			self.title.as_deref().unwrap_or(&self.name)
		} else {
			&self.name
		}
	}
}

/// Body returned by every search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
	#[serde(default)]
	pub results: Vec<Suggestion>,
}
