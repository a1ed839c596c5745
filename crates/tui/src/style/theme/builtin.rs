//! Themes shipped inside the crate as TOML documents.
//!
//! A document names the theme, lists its aliases and gives a `[styles.<slot>]`
//! table for every slot of [`Theme`]. Exactly one document may set
//! `default = true`; without one the first document by file name is the
//! default.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, include_dir};
use ratatui::style::Style;
use serde::Deserialize;

use super::Theme;
use super::color::{parse_color, parse_modifier};
use super::registry::ThemeRegistration;

static THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/themes");

struct Builtins {
	registrations: Vec<ThemeRegistration>,
	default: Theme,
}

fn builtins() -> &'static Builtins {
	static BUILTINS: OnceLock<Builtins> = OnceLock::new();
	BUILTINS.get_or_init(|| {
		load(&THEME_DIR).unwrap_or_else(|error| panic!("built-in themes are broken: {error:#}"))
	})
}

/// The theme used when nothing else is chosen.
#[must_use]
pub fn default_theme() -> Theme {
	builtins().default
}

/// The themes bundled with the widget.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins().registrations.clone()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeDocument {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: BTreeMap<String, SlotSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SlotSpec {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl SlotSpec {
	fn style(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).context("fg")?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).context("bg")?);
		}
		for modifier in &self.modifiers {
			style = style.add_modifier(parse_modifier(modifier)?);
		}
		Ok(style)
	}
}

fn load(dir: &Dir) -> Result<Builtins> {
	let mut files: Vec<_> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default: Option<(String, Theme)> = None;
	for file in files {
		let source = file.path().display().to_string();
		let text = file
			.contents_utf8()
			.with_context(|| format!("{source} is not UTF-8"))?;
		let (registration, is_default) = parse_document(text).with_context(|| source.clone())?;

		if is_default {
			if let Some((existing, _)) = &default {
				bail!(
					"both `{existing}` and `{}` are marked as the default theme",
					registration.name
				);
			}
			default = Some((registration.name.clone(), registration.theme));
		}
		registrations.push(registration);
	}

	let default = match (default, registrations.first()) {
		(Some((_, theme)), _) => theme,
		(None, Some(first)) => first.theme,
		(None, None) => bail!("no built-in themes found"),
	};
	Ok(Builtins {
		registrations,
		default,
	})
}

fn parse_document(text: &str) -> Result<(ThemeRegistration, bool)> {
	let document: ThemeDocument = toml::from_str(text)?;

	let mut theme = Theme::PLAIN;
	for (slot, spec) in &document.styles {
		let target = theme
			.slot_mut(slot)
			.with_context(|| format!("unknown style slot `{slot}`"))?;
		*target = spec.style().with_context(|| format!("styles.{slot}"))?;
	}
	if let Some(missing) = Theme::SLOTS
		.iter()
		.find(|slot| !document.styles.contains_key(**slot))
	{
		bail!("theme `{}` has no `[styles.{missing}]` table", document.name);
	}

	let aliases = document
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty());
	let registration = ThemeRegistration::new(document.name.clone(), theme).aliases(aliases);
	Ok((registration, document.default))
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Modifier};

	use super::*;

	fn full_document(extra: &str) -> String {
		let mut text = format!("name = \"test\"\naliases = [\" t \", \"\"]\n{extra}\n");
		for slot in Theme::SLOTS {
			text.push_str(&format!("[styles.{slot}]\n"));
		}
		text
	}

	#[test]
	fn bundled_themes_load() {
		let names: Vec<_> = builtin_themes()
			.into_iter()
			.map(|registration| registration.name)
			.collect();
		assert_eq!(names, vec!["dark", "light", "mono"]);
		assert_eq!(
			default_theme().option_check_active.bg,
			Some(Color::Rgb(0x16, 0x16, 0xff))
		);
	}

	#[test]
	fn document_fills_every_slot() {
		let text = full_document("").replace(
			"[styles.divider]\n",
			"[styles.divider]\nfg = \"red\"\nmodifiers = [\"bold\"]\n",
		);
		let (registration, is_default) = parse_document(&text).unwrap();
		assert!(!is_default);
		assert_eq!(registration.aliases, vec!["t"]);
		assert_eq!(registration.theme.divider.fg, Some(Color::Red));
		assert!(registration.theme.divider.add_modifier.contains(Modifier::BOLD));
		assert_eq!(registration.theme.select, Style::new());
	}

	#[test]
	fn missing_and_unknown_slots_are_rejected() {
		let missing = full_document("").replace("[styles.divider]\n", "");
		let error = parse_document(&missing).unwrap_err();
		assert!(format!("{error:#}").contains("styles.divider"));

		let unknown = full_document("[styles.border]\n");
		assert!(parse_document(&unknown).is_err());

		let bad_colour =
			full_document("").replace("[styles.select]\n", "[styles.select]\nfg = \"plaid\"\n");
		let error = parse_document(&bad_colour).unwrap_err();
		assert!(format!("{error:#}").contains("styles.select"));
	}
}
