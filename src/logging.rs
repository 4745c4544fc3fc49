//! Route `log` records to a file in the cache directory.
//!
//! The terminal belongs to the UI while it runs, so nothing is written to
//! stderr. When the log file cannot be opened logging stays disabled.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::app_dirs::AppDirs;

/// Environment variable holding the `env_logger` filter directives.
pub const LOG_ENV: &str = "DOCSEARCH_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the file logger. Returns the log file path when logging is active.
pub fn initialize() -> Option<PathBuf> {
	let path = AppDirs::resolve().ok()?.log_file();
	let file = open_log_file(&path).ok()?;
	let filter = env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string());

	Builder::new()
		.parse_filters(&filter)
		.target(Target::Pipe(Box::new(file)))
		.format_timestamp_millis()
		.try_init()
		.ok()?;
	log::debug!("logging to {}", path.display());
	Some(path)
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
