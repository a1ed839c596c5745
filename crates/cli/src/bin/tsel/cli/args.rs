use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

use crate::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("tsel {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "tsel",
	version,
	long_version = long_version(),
	about = "Pick one or more options from a searchable list",
	long_about = "Pick one or more options from a searchable list.\n\n\
		Options are read from stdin or --input, one per line as `key<TAB>label`. \
		A line without a tab is used as both key and label.",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `tsel` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "Read options from FILE instead of stdin"
	)]
	pub(crate) input: Option<PathBuf>,
	#[arg(
		long,
		help = "Read options as a JSON array of [key, label] pairs or {key, label} objects"
	)]
	pub(crate) json: bool,
	#[arg(short, long, help = "Allow choosing any number of options")]
	pub(crate) multi: bool,
	#[arg(
		short = 'v',
		long = "value",
		value_name = "KEY",
		action = ArgAction::Append,
		help = "Preselect KEY; repeat for several keys in multi mode"
	)]
	pub(crate) value: Vec<String>,
	#[arg(long, value_name = "TEXT", help = "Anchor text while nothing is selected")]
	pub(crate) placeholder: Option<String>,
	#[arg(long = "search-placeholder", value_name = "TEXT", help = "Text in the empty search box")]
	pub(crate) search_placeholder: Option<String>,
	#[arg(short, long, value_name = "TEXT", help = "Title of the option list")]
	pub(crate) title: Option<String>,
	#[arg(long = "no-search", help = "Hide the search box")]
	pub(crate) no_search: bool,
	#[arg(long = "no-clear", help = "Hide the clear button")]
	pub(crate) no_clear: bool,
	#[arg(long, help = "Offer to create an option from unmatched search text")]
	pub(crate) creatable: bool,
	#[arg(long, help = "Put check boxes on the left of each row")]
	pub(crate) reverse: bool,
	#[arg(
		short,
		long,
		value_enum,
		help = "How the open list is shown (default: auto)"
	)]
	pub(crate) presentation: Option<PresentationArg>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: light)")]
	pub(crate) theme: Option<String>,
	#[arg(short = 'l', long = "list-themes", help = "List supported themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TSEL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(short = 'n', long = "no-config", help = "Skip loading default configuration files")]
	pub(crate) no_config: bool,
	#[arg(long = "print-config", help = "Print the resolved configuration and exit")]
	pub(crate) print_config: bool,
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
	#[arg(long = "log-level", value_enum, help = "Log file verbosity (default: warn)")]
	pub(crate) log_level: Option<LogLevelArg>,
}

/// What a run of `tsel` does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
	ListThemes,
	PrintConfig,
	Pick,
}

impl CliArgs {
	/// Informational flags short-circuit the picker so stdout only ever
	/// carries one kind of output.
	pub(crate) fn action(&self) -> Action {
		if self.list_themes {
			Action::ListThemes
		} else if self.print_config {
			Action::PrintConfig
		} else {
			Action::Pick
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Presentations accepted via the command line.
pub(crate) enum PresentationArg {
	Auto,
	Modal,
	Popover,
	BottomSheet,
}

impl PresentationArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			PresentationArg::Auto => "auto",
			PresentationArg::Modal => "modal",
			PresentationArg::Popover => "popover",
			PresentationArg::BottomSheet => "bottom-sheet",
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Log levels accepted via the command line.
pub(crate) enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevelArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			LogLevelArg::Off => "off",
			LogLevelArg::Error => "error",
			LogLevelArg::Warn => "warn",
			LogLevelArg::Info => "info",
			LogLevelArg::Debug => "debug",
			LogLevelArg::Trace => "trace",
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
pub(crate) fn parse_from<I, T>(args: I) -> CliArgs
where
	I: IntoIterator<Item = T>,
	T: Into<std::ffi::OsString> + Clone,
{
	let mut matches = cli_command().get_matches_from(args);
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}
