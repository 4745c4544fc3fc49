use thiserror::Error;

use super::SettingSource;

/// A setting that failed validation, naming where its value came from.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
	Invalid {
		key: &'static str,
		value: String,
		origin: SettingSource,
		reason: String,
	},

	/// A millisecond duration outside its accepted range.
	#[error("{key} from {origin} must be between {min} and {max} ms (value: {value})")]
	OutOfRange {
		key: &'static str,
		value: u64,
		min: u64,
		max: u64,
		origin: SettingSource,
	},

	#[error("unknown theme '{name}' from {origin} (expected one of: {})", .known.join(", "))]
	UnknownTheme {
		name: String,
		known: Vec<&'static str>,
		origin: SettingSource,
	},
}

impl ConfigError {
	pub(crate) fn invalid<V, R>(key: &'static str, value: V, origin: SettingSource, reason: R) -> Self
	where
		V: Into<String>,
		R: Into<String>,
	{
		Self::Invalid {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}

	/// Configuration key of the rejected setting.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::Invalid { key, .. } | Self::OutOfRange { key, .. } => *key,
			Self::UnknownTheme { .. } => "ui.theme",
		}
	}
}
