use std::time::Duration;

use docsearch::UiConfig;
use docsearch_api::Url;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Host the search endpoints live under.
	pub api_url: Url,
	pub timeout: Duration,
	pub theme_name: String,
	pub ui: UiConfig,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
