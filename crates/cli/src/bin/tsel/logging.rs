//! File logging. The terminal belongs to the picker, so records go to
//! `tsel.log` in the data directory.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::app_dirs;

const LOG_FILE: &str = "tsel.log";

/// Where log records are appended.
pub(crate) fn log_file() -> Result<PathBuf> {
	Ok(app_dirs::data_dir()?.join(LOG_FILE))
}

/// Install the global logger at `level`.
///
/// Returns the log file path, or `None` when logging is off.
pub(crate) fn initialize(level: LevelFilter) -> Result<Option<PathBuf>> {
	if level == LevelFilter::Off {
		return Ok(None);
	}

	let path = log_file()?;
	if let Some(dir) = path.parent() {
		fs::create_dir_all(dir)
			.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.set_time_format_rfc3339()
		.set_target_level(LevelFilter::Error)
		.build();
	WriteLogger::init(level, config, file).context("a logger is already installed")?;
	log::info!("tsel {} logging at {level}", env!("CARGO_PKG_VERSION"));
	Ok(Some(path))
}
