//! Configuration loading and resolution.
//!
//! [`load`] layers config files, `TSEL__` environment variables and CLI
//! flags, then validates the result into a [`ResolvedConfig`].

mod raw;
mod resolved;
mod sources;

use anyhow::{Result, anyhow};

use crate::cli::CliArgs;
use raw::RawConfig;
#[cfg(test)]
pub(crate) use resolved::PresentationChoice;
pub(crate) use resolved::ResolvedConfig;
use sources::build_config;

/// Load configuration by combining config files, environment variables and
/// CLI arguments.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
