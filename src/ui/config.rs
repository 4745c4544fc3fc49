use std::time::Duration;

use docsearch_api::Url;

use super::style::Theme;

/// Default debounce applied between the last edit and the search request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Default documentation site, used for both API calls and page links.
pub const DEFAULT_SITE_URL: &str = "https://docs.cycling74.com";

/// Default documentation section.
pub const DEFAULT_SECTION: &str = "max8";

/// Presentation and navigation settings for the interactive search bar.
#[derive(Debug, Clone)]
pub struct UiConfig {
	pub placeholder: String,
	pub initial_query: String,
	pub debounce: Duration,
	pub theme: Theme,
	/// Site that navigation URLs are built against.
	pub site_url: Url,
	pub section: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			placeholder: "Search".to_string(),
			initial_query: String::new(),
			debounce: DEFAULT_DEBOUNCE,
			theme: Theme::default(),
			site_url: default_site_url(),
			section: DEFAULT_SECTION.to_string(),
		}
	}
}

fn default_site_url() -> Url {
	Url::parse(DEFAULT_SITE_URL).unwrap_or_else(|err| panic!("invalid built-in site URL: {err}"))
}
