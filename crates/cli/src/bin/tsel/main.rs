//! `tsel`: pick options from a searchable list in the terminal.

mod app;
mod app_dirs;
mod cli;
mod input;
mod logging;
mod runtime;
mod settings;

use anyhow::Result;
use cli::{Action, OutputFormat, parse_cli, print_json, print_plain};

fn main() -> Result<()> {
	let cli = parse_cli();
	let action = cli.action();

	if action == Action::ListThemes {
		list_themes();
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	if action == Action::PrintConfig {
		resolved.print_summary();
		return Ok(());
	}

	if let Err(err) = logging::initialize(resolved.log_level) {
		eprintln!("tsel: logging disabled: {err:#}");
	}

	let options = input::load(cli.input.as_deref(), cli.json)?;
	let outcome = runtime::run(options, &resolved)?;

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// One theme per line, aliases in parentheses.
fn list_themes() {
	for theme in tsel_tui::style::descriptors() {
		if theme.aliases.is_empty() {
			println!("{}", theme.name);
		} else {
			println!("{} ({})", theme.name, theme.aliases.join(", "));
		}
	}
}
