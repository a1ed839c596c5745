use log::LevelFilter;
use tsel_core::Viewport;
use tsel_tui::{Presentation, SelectLabels, SelectProps, StyleConfig};

use crate::logging;

/// How the open list is presented once the terminal size is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PresentationChoice {
	/// Decide from the terminal size.
	#[default]
	Auto,
	/// Always use this presentation.
	Fixed(Presentation),
}

impl PresentationChoice {
	/// Settle on a presentation. The picker always captures the mouse.
	pub(crate) fn resolve(self, viewport: Viewport) -> Presentation {
		match self {
			Self::Auto => Presentation::detect(true, viewport),
			Self::Fixed(presentation) => presentation,
		}
	}
}

/// Configuration the picker runs with, after layering and validation.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) multi: bool,
	pub(crate) initial: Vec<String>,
	pub(crate) props: SelectProps,
	pub(crate) labels: SelectLabels,
	pub(crate) theme_name: Option<String>,
	pub(crate) style: StyleConfig,
	pub(crate) presentation: PresentationChoice,
	pub(crate) log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut lines = vec!["Effective configuration:".to_string()];
		let mut line = |label: &str, value: String| lines.push(format!("  {label}: {value}"));

		line("Mode", if self.multi { "multi" } else { "single" }.to_string());
		if !self.initial.is_empty() {
			line("Initial value", self.initial.join(", "));
		}
		line("Placeholder", self.labels.placeholder.clone());
		line("Search placeholder", self.labels.search_placeholder.clone());
		if let Some(title) = &self.labels.list_title {
			line("List title", title.clone());
		}
		line("Searchable", bool_to_word(self.props.searchable).into());
		line("Clearable", bool_to_word(self.props.clearable).into());
		line("Creatable", bool_to_word(self.props.creatable).into());
		line("Reverse", bool_to_word(self.props.reverse).into());
		line(
			"Selection count",
			bool_to_word(self.props.show_selection_count).into(),
		);
		line("Dividers", bool_to_word(self.props.option_dividers).into());
		line(
			"Theme",
			self.theme_name
				.clone()
				.unwrap_or_else(|| "(use the library default)".into()),
		);
		line(
			"Presentation",
			match self.presentation {
				PresentationChoice::Auto => "auto".to_string(),
				PresentationChoice::Fixed(presentation) => format!("{presentation:?}"),
			},
		);
		line("Log level", self.log_level.to_string());
		if self.log_level != LevelFilter::Off
			&& let Ok(path) = logging::log_file()
		{
			line("Log file", path.display().to_string());
		}

		let mut text = lines.join("\n");
		text.push('\n');
		text
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			multi: true,
			initial: vec!["a".into(), "b".into()],
			props: SelectProps::default(),
			labels: SelectLabels::default().list_title("Fruit"),
			theme_name: Some("dark".into()),
			style: StyleConfig::default(),
			presentation: PresentationChoice::Fixed(Presentation::BottomSheet),
			log_level: LevelFilter::Off,
		}
	}

	#[test]
	fn summary_lists_effective_values() {
		let summary = config().summary();
		assert!(summary.starts_with("Effective configuration:\n"));
		assert!(summary.contains("  Mode: multi\n"));
		assert!(summary.contains("  Initial value: a, b\n"));
		assert!(summary.contains("  List title: Fruit\n"));
		assert!(summary.contains("  Presentation: BottomSheet\n"));
		assert!(!summary.contains("Log file"));
	}

	#[test]
	fn auto_presentation_follows_terminal_size() {
		let auto = PresentationChoice::Auto;
		assert_eq!(auto.resolve(Viewport::new(120, 40)), Presentation::Popover);
		assert_eq!(auto.resolve(Viewport::new(40, 12)), Presentation::BottomSheet);
		assert_eq!(
			PresentationChoice::Fixed(Presentation::Modal).resolve(Viewport::new(40, 12)),
			Presentation::Modal
		);
	}
}
