use std::env;
use std::fmt;

use crate::cli::CliArgs;

/// Where an effective setting came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the settings that are validated. `None` means a config file or
/// the built-in default.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_url: Option<SettingSource>,
	pub(crate) site_url: Option<SettingSource>,
	pub(crate) section: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) debounce: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

fn origin(cli_set: bool, flag: &'static str, var: &'static str) -> Option<SettingSource> {
	if cli_set {
		Some(SettingSource::CliFlag(flag))
	} else if env::var_os(var).is_some() {
		Some(SettingSource::Environment(var))
	} else {
		None
	}
}

impl ConfigSources {
	/// Work out which settings were given on the command line or through the
	/// environment. CLI flags win over environment variables.
	pub(crate) fn detect(cli: &CliArgs) -> Self {
		Self {
			api_url: origin(cli.api_url.is_some(), "--api-url", "DOCSEARCH__API__BASE_URL"),
			site_url: origin(cli.site_url.is_some(), "--site-url", "DOCSEARCH__SITE__BASE_URL"),
			section: origin(cli.section.is_some(), "--section", "DOCSEARCH__API__SECTION"),
			timeout: origin(cli.timeout_ms.is_some(), "--timeout-ms", "DOCSEARCH__API__TIMEOUT_MS"),
			debounce: origin(cli.debounce_ms.is_some(), "--debounce-ms", "DOCSEARCH__UI__DEBOUNCE_MS"),
			theme: origin(cli.theme.is_some(), "--theme", "DOCSEARCH__UI__THEME"),
		}
	}

	pub(crate) fn source_for_api_url(&self) -> SettingSource {
		self.api_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.base_url"))
	}

	pub(crate) fn source_for_site_url(&self) -> SettingSource {
		self.site_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("site.base_url"))
	}

	pub(crate) fn source_for_section(&self) -> SettingSource {
		self.section
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.section"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.timeout_ms"))
	}

	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.debounce
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.debounce_ms"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn cli_flags_are_reported_as_the_origin() {
		let cli = CliArgs::parse_from(["docsearch", "--section", "max9"]);
		let sources = ConfigSources::detect(&cli);
		assert_eq!(sources.source_for_section(), SettingSource::CliFlag("--section"));
	}

	#[test]
	fn unset_settings_fall_back_to_config_keys() {
		let sources = ConfigSources::default();
		assert_eq!(
			sources.source_for_debounce().to_string(),
			"configuration key `ui.debounce_ms`"
		);
	}
}
