//! Where `docsearch` reads its configuration and writes its log.
//!
//! Each location can be overridden through an environment variable. Platform
//! defaults from the `directories` crate are only consulted for locations
//! without an override.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "docsearch";

pub const CONFIG_DIR_ENV: &str = "DOCSEARCH_CONFIG_DIR";
pub const CACHE_DIR_ENV: &str = "DOCSEARCH_CACHE_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "docsearch.log";

/// Resolved application directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
	pub config: PathBuf,
	/// Holds the log file.
	pub cache: PathBuf,
}

impl AppDirs {
	/// Resolve both directories from the process environment.
	pub fn resolve() -> Result<Self> {
		Self::resolve_with(|name| env::var_os(name))
	}

	fn resolve_with(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
		let config = non_empty(lookup(CONFIG_DIR_ENV));
		let cache = non_empty(lookup(CACHE_DIR_ENV));
		if let (Some(config), Some(cache)) = (&config, &cache) {
			return Ok(Self {
				config: config.clone(),
				cache: cache.clone(),
			});
		}

		let platform = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
			.ok_or_else(|| anyhow!("no home directory to place docsearch files in"))?;
		Ok(Self {
			config: config.unwrap_or_else(|| platform.config_local_dir().to_path_buf()),
			cache: cache.unwrap_or_else(|| platform.cache_dir().to_path_buf()),
		})
	}

	/// The user configuration file merged beneath local project files.
	pub fn config_file(&self) -> PathBuf {
		self.config.join(CONFIG_FILE_NAME)
	}

	pub fn log_file(&self) -> PathBuf {
		self.cache.join(LOG_FILE_NAME)
	}
}

/// An empty override counts as unset.
fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}
