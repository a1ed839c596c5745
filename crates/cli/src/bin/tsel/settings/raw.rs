use std::str::FromStr;

use anyhow::{Result, anyhow, bail, ensure};
use log::LevelFilter;
use serde::Deserialize;
use tsel_tui::{Presentation, SelectLabels, SelectProps, StyleConfig};

use super::resolved::{PresentationChoice, ResolvedConfig};
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	select: SelectSection,
	ui: UiSection,
	log: LogSection,
}

/// Widget behaviour and copy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SelectSection {
	multi: Option<bool>,
	placeholder: Option<String>,
	search_placeholder: Option<String>,
	list_title: Option<String>,
	searchable: Option<bool>,
	clearable: Option<bool>,
	creatable: Option<bool>,
	reverse: Option<bool>,
	show_selection_count: Option<bool>,
	option_dividers: Option<bool>,
	empty_search_msg: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	presentation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the file and environment values.
	///
	/// Boolean switches only ever move a setting away from its default, so an
	/// absent switch leaves the configured value alone.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		let select = &mut self.select;
		if cli.multi {
			select.multi = Some(true);
		}
		if let Some(text) = cli.placeholder.clone() {
			select.placeholder = Some(text);
		}
		if let Some(text) = cli.search_placeholder.clone() {
			select.search_placeholder = Some(text);
		}
		if let Some(text) = cli.title.clone() {
			select.list_title = Some(text);
		}
		if cli.no_search {
			select.searchable = Some(false);
		}
		if cli.no_clear {
			select.clearable = Some(false);
		}
		if cli.creatable {
			select.creatable = Some(true);
		}
		if cli.reverse {
			select.reverse = Some(true);
		}

		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(presentation) = cli.presentation {
			self.ui.presentation = Some(presentation.as_str().to_string());
		}
		if let Some(level) = cli.log_level {
			self.log.level = Some(level.as_str().to_string());
		}
	}

	/// Validate and convert into the configuration the picker runs with.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let select = self.select;
		let multi = select.multi.unwrap_or(false);
		ensure!(
			multi || cli.value.len() <= 1,
			"single mode takes at most one --value, got {}",
			cli.value.len()
		);

		let defaults = SelectProps::default();
		let props = SelectProps {
			searchable: select.searchable.unwrap_or(defaults.searchable),
			clearable: select.clearable.unwrap_or(defaults.clearable),
			creatable: select.creatable.unwrap_or(defaults.creatable),
			reverse: select.reverse.unwrap_or(defaults.reverse),
			show_selection_count: select
				.show_selection_count
				.unwrap_or(defaults.show_selection_count),
			option_dividers: select.option_dividers.unwrap_or(defaults.option_dividers),
			..defaults
		};

		let mut labels = SelectLabels::default();
		if let Some(text) = select.placeholder {
			labels = labels.placeholder(text);
		}
		if let Some(text) = select.search_placeholder {
			labels = labels.search_placeholder(text);
		}
		if let Some(text) = select.list_title.filter(|text| !text.trim().is_empty()) {
			labels = labels.list_title(text);
		}
		if let Some(text) = select.empty_search_msg {
			labels = labels.empty_search_msg(text);
		}

		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty());
		let style = match &theme_name {
			Some(name) => {
				let theme = tsel_tui::style::by_name(name)
					.ok_or_else(|| anyhow!("unknown theme '{name}' (see --list-themes)"))?;
				StyleConfig::with_theme(theme)
			}
			None => StyleConfig::default(),
		};

		let presentation = match self.ui.presentation.as_deref() {
			Some(value) => parse_presentation(value)?,
			None => PresentationChoice::Auto,
		};
		let log_level = match self.log.level.as_deref() {
			Some(value) => parse_level(value)?,
			None => LevelFilter::Warn,
		};

		Ok(ResolvedConfig {
			multi,
			initial: cli.value.clone(),
			props,
			labels,
			theme_name,
			style,
			presentation,
			log_level,
		})
	}
}

/// Parse a presentation name.
fn parse_presentation(value: &str) -> Result<PresentationChoice> {
	let choice = match value.trim().to_ascii_lowercase().as_str() {
		"auto" => PresentationChoice::Auto,
		"modal" => PresentationChoice::Fixed(Presentation::Modal),
		"popover" => PresentationChoice::Fixed(Presentation::Popover),
		"bottom-sheet" | "bottom_sheet" | "sheet" => {
			PresentationChoice::Fixed(Presentation::BottomSheet)
		}
		other => bail!("unknown presentation '{other}'"),
	};
	Ok(choice)
}

fn parse_level(value: &str) -> Result<LevelFilter> {
	LevelFilter::from_str(value.trim()).map_err(|_| anyhow!("unknown log level '{value}'"))
}
