use std::time::Duration;

use docsearch::Theme;
use docsearch::ui::style::theme;
use docsearch_api::Url;

use super::{ConfigError, SettingSource};

/// Longest accepted debounce.
pub(crate) const MAX_DEBOUNCE_MS: u64 = 10_000;

pub(crate) fn http_url(key: &'static str, value: &str, origin: SettingSource) -> Result<Url, ConfigError> {
	let url = Url::parse(value.trim())
		.map_err(|err| ConfigError::invalid(key, value, origin.clone(), err.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::invalid(key, value, origin, "must be an http or https URL"));
	}
	if url.cannot_be_a_base() {
		return Err(ConfigError::invalid(key, value, origin, "must be able to carry a path"));
	}
	Ok(url)
}

pub(crate) fn section(value: &str, origin: SettingSource) -> Result<String, ConfigError> {
	let trimmed = value.trim().trim_matches('/');
	if trimmed.is_empty() {
		return Err(ConfigError::invalid("api.section", value, origin, "must not be empty"));
	}
	if trimmed.contains('/') {
		return Err(ConfigError::invalid(
			"api.section",
			value,
			origin,
			"must be a single path segment",
		));
	}
	Ok(trimmed.to_string())
}

pub(crate) fn timeout(ms: u64, origin: SettingSource) -> Result<Duration, ConfigError> {
	if ms == 0 {
		return Err(ConfigError::invalid(
			"api.timeout_ms",
			ms.to_string(),
			origin,
			"must be greater than zero",
		));
	}
	Ok(Duration::from_millis(ms))
}

pub(crate) fn debounce(ms: u64, origin: SettingSource) -> Result<Duration, ConfigError> {
	if ms > MAX_DEBOUNCE_MS {
		return Err(ConfigError::OutOfRange {
			key: "ui.debounce_ms",
			value: ms,
			min: 0,
			max: MAX_DEBOUNCE_MS,
			origin,
		});
	}
	Ok(Duration::from_millis(ms))
}

pub(crate) fn theme(name: &str, origin: SettingSource) -> Result<Theme, ConfigError> {
	theme::by_name(name).ok_or_else(|| ConfigError::UnknownTheme {
		name: name.to_string(),
		known: theme::names().collect(),
		origin,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn urls_must_use_http() {
		let origin = SettingSource::CliFlag("--api-url");
		assert!(http_url("api.base_url", "https://docs.example.com", origin.clone()).is_ok());

		let err = http_url("api.base_url", "ftp://docs.example.com", origin.clone()).unwrap_err();
		assert!(err.to_string().contains("CLI flag `--api-url`"));
		assert!(http_url("api.base_url", "not a url", origin).is_err());
	}

	#[test]
	fn section_is_one_segment() {
		let origin = SettingSource::ConfigKey("api.section");
		assert_eq!(section(" /max8/ ", origin.clone()).unwrap(), "max8");
		assert!(section("", origin.clone()).is_err());
		assert!(section("max8/refpages", origin).is_err());
	}

	#[test]
	fn debounce_is_bounded() {
		let origin = SettingSource::Environment("DOCSEARCH__UI__DEBOUNCE_MS");
		assert_eq!(debounce(0, origin.clone()).unwrap(), Duration::ZERO);
		let err = debounce(MAX_DEBOUNCE_MS + 1, origin).unwrap_err();
		assert!(err.to_string().contains("environment variable"));
		assert!(matches!(err, ConfigError::OutOfRange { value: 10_001, .. }));
	}

	#[test]
	fn zero_timeout_is_rejected() {
		assert!(timeout(0, SettingSource::ConfigKey("api.timeout_ms")).is_err());
	}
}
