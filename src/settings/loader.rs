use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::{ConfigSources, ResolvedConfig};
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	let sources = ConfigSources::detect(cli);
	let resolved = raw
		.resolve(&sources)
		.inspect_err(|err| log::warn!("rejected setting {}: {err}", err.key()))?;
	Ok(resolved)
}
