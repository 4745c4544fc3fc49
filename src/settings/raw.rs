use serde::Deserialize;

use docsearch::ui::style::theme;
use docsearch::ui::{DEFAULT_DEBOUNCE, DEFAULT_SECTION, DEFAULT_SITE_URL, UiConfig};

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, validation};
use crate::cli::CliArgs;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_PLACEHOLDER: &str = "Search";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	site: SiteSection,
	ui: UiSection,
}

/// Where searches are sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
	section: Option<String>,
	timeout_ms: Option<u64>,
}

/// Where navigation links point.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SiteSection {
	base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	debounce_ms: Option<u64>,
	theme: Option<String>,
	placeholder: Option<String>,
	initial_query: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.api.base_url = Some(url);
		}
		if let Some(section) = cli.section.clone() {
			self.api.section = Some(section);
		}
		if let Some(value) = cli.timeout_ms {
			self.api.timeout_ms = Some(value);
		}
		if let Some(url) = cli.site_url.clone() {
			self.site.base_url = Some(url);
		}
		if let Some(value) = cli.debounce_ms {
			self.ui.debounce_ms = Some(value);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	///
	/// The site defaults to the API host when only the API URL is configured.
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ResolvedConfig, ConfigError> {
		let api_url = validation::http_url(
			"api.base_url",
			self.api.base_url.as_deref().unwrap_or(DEFAULT_SITE_URL),
			sources.source_for_api_url(),
		)?;
		let site_url = match self.site.base_url.as_deref() {
			Some(url) => validation::http_url("site.base_url", url, sources.source_for_site_url())?,
			None => api_url.clone(),
		};
		let section = validation::section(
			self.api.section.as_deref().unwrap_or(DEFAULT_SECTION),
			sources.source_for_section(),
		)?;
		let timeout = validation::timeout(
			self.api.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
			sources.source_for_timeout(),
		)?;
		let debounce = match self.ui.debounce_ms {
			Some(ms) => validation::debounce(ms, sources.source_for_debounce())?,
			None => DEFAULT_DEBOUNCE,
		};
		let theme_name = self
			.ui
			.theme
			.unwrap_or_else(|| theme::DEFAULT_NAME.to_string());
		let theme = validation::theme(&theme_name, sources.source_for_theme())?;

		Ok(ResolvedConfig {
			api_url,
			timeout,
			theme_name,
			ui: UiConfig {
				placeholder: self
					.ui
					.placeholder
					.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
				initial_query: self.ui.initial_query.unwrap_or_default(),
				debounce,
				theme,
				site_url,
				section,
			},
		})
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use clap::Parser;

	use super::*;

	#[test]
	fn cli_overrides_take_precedence() {
		let cli = CliArgs::parse_from([
			"docsearch",
			"--api-url",
			"http://localhost:3000",
			"--site-url",
			"https://mirror.example.com/docs",
			"--section",
			"max9",
			"--timeout-ms",
			"2000",
			"--debounce-ms",
			"300",
			"--theme",
			"solarized",
			"-q",
			"line~",
		]);

		let mut config = RawConfig::default();
		config.api.section = Some("max7".into());
		config.apply_cli_overrides(&cli);

		assert_eq!(config.api.base_url, cli.api_url);
		assert_eq!(config.api.section.as_deref(), Some("max9"));
		assert_eq!(config.api.timeout_ms, Some(2000));
		assert_eq!(config.site.base_url, cli.site_url);
		assert_eq!(config.ui.debounce_ms, Some(300));
		assert_eq!(config.ui.theme, cli.theme);
		assert_eq!(config.ui.initial_query, cli.initial_query);
	}

	#[test]
	fn defaults_resolve_to_the_public_site() {
		let resolved = RawConfig::default()
			.resolve(&ConfigSources::default())
			.expect("defaults are valid");

		assert_eq!(resolved.api_url.as_str(), "https://docs.cycling74.com/");
		assert_eq!(resolved.ui.site_url, resolved.api_url);
		assert_eq!(resolved.ui.section, "max8");
		assert_eq!(resolved.ui.debounce, Duration::from_millis(500));
		assert_eq!(resolved.timeout, Duration::from_secs(10));
		assert_eq!(resolved.ui.placeholder, "Search");
		assert_eq!(resolved.theme_name, "default");
	}

	#[test]
	fn unknown_theme_is_rejected() {
		let mut config = RawConfig::default();
		config.ui.theme = Some("neon".into());
		let err = config.resolve(&ConfigSources::default()).unwrap_err();
		assert_eq!(err.key(), "ui.theme");
		assert!(matches!(err, ConfigError::UnknownTheme { ref name, .. } if name == "neon"));
	}
}
