//! Where `tsel` keeps its config file and its log.
//!
//! `TSEL_CONFIG_DIR` and `TSEL_DATA_DIR` take precedence over the platform
//! locations reported by `directories`.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

#[derive(Clone, Copy, Debug)]
enum AppDir {
	Config,
	Data,
}

impl AppDir {
	fn env_var(self) -> &'static str {
		match self {
			Self::Config => "TSEL_CONFIG_DIR",
			Self::Data => "TSEL_DATA_DIR",
		}
	}

	fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = non_empty(env::var_os(self.env_var())) {
			return Ok(dir);
		}
		let dirs = ProjectDirs::from("io", "albo", "tsel")
			.ok_or_else(|| anyhow!("no home directory to place tsel files in"))?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub(crate) fn config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve()
}

/// Directory holding the log file.
pub(crate) fn data_dir() -> Result<PathBuf> {
	AppDir::Data.resolve()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_counts_as_unset() {
		assert_eq!(non_empty(None), None);
		assert_eq!(non_empty(Some(OsString::new())), None);
		assert_eq!(
			non_empty(Some(OsString::from("/tmp/tsel"))),
			Some(PathBuf::from("/tmp/tsel"))
		);
	}

	#[test]
	fn each_directory_has_its_own_override() {
		assert_eq!(AppDir::Config.env_var(), "TSEL_CONFIG_DIR");
		assert_eq!(AppDir::Data.env_var(), "TSEL_DATA_DIR");
	}
}
