use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use docsearch::app_dirs::AppDirs;

use crate::cli::CliArgs;

/// Prefix of environment variables that override configuration keys.
pub(super) const ENV_PREFIX: &str = "DOCSEARCH";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dirs) = AppDirs::resolve() {
		files.push(dirs.config_file());
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".docsearch.toml"));
		files.push(current_dir.join("docsearch.toml"));
	}

	files
}
