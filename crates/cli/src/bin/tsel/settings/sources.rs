use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use crate::app_dirs;
use crate::cli::CliArgs;

/// Prefix of configuration environment variables, e.g. `TSEL__UI__THEME`.
const ENV_PREFIX: &str = "tsel";

/// A configuration file consulted while loading settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ConfigFile {
	pub(super) path: PathBuf,
	/// Missing required files are an error; optional ones are skipped.
	pub(super) required: bool,
}

/// Files to read, lowest precedence first.
pub(super) fn config_files(cli: &CliArgs) -> Vec<ConfigFile> {
	let defaults = (!cli.no_config)
		.then(default_config_files)
		.unwrap_or_default()
		.into_iter()
		.map(|path| ConfigFile {
			path,
			required: false,
		});
	let explicit = cli.config.iter().map(|path| ConfigFile {
		path: path.clone(),
		required: true,
	});
	defaults.chain(explicit).collect()
}

/// Layer the config files under the `TSEL__*` environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let builder = config_files(cli)
		.into_iter()
		.fold(Config::builder(), |builder, file| {
			log::trace!(
				"config source {} (required: {})",
				file.path.display(),
				file.required
			);
			builder.add_source(File::from(file.path).required(file.required))
		})
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		);

	builder.build().context("failed to read configuration")
}

/// The user config file followed by `.tsel.toml` and `tsel.toml` in the
/// working directory.
fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|cwd| [cwd.join(".tsel.toml"), cwd.join("tsel.toml")]);
	user.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cli::parse_from;

	#[test]
	fn explicit_files_come_last_and_are_required() {
		let cli = parse_from(["tsel", "-c", "a.toml", "--config", "b.toml"]);
		let files = config_files(&cli);

		let (defaults, explicit) = files.split_at(files.len() - 2);
		assert!(defaults.iter().all(|file| !file.required));
		assert!(defaults.iter().any(|file| file.path.ends_with(".tsel.toml")));
		assert!(defaults.iter().any(|file| file.path.ends_with("tsel.toml")));
		assert_eq!(
			explicit,
			[
				ConfigFile {
					path: PathBuf::from("a.toml"),
					required: true
				},
				ConfigFile {
					path: PathBuf::from("b.toml"),
					required: true
				},
			]
		);
	}

	#[test]
	fn no_config_skips_default_locations() {
		let cli = parse_from(["tsel", "--no-config", "-c", "only.toml"]);
		let files = config_files(&cli);
		assert_eq!(files.len(), 1);
		assert_eq!(files[0].path, PathBuf::from("only.toml"));
	}
}
