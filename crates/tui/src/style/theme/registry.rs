//! Theme lookup by case-insensitive name or alias.

use std::collections::HashMap;
use std::sync::OnceLock;

use anyhow::{Result, bail};

use super::Theme;
use super::builtin::builtin_themes;

/// A theme under a name and optional aliases.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// Canonical name, as listed by [`names`].
	pub name: String,
	/// The styles.
	pub theme: Theme,
	/// Other names that resolve to this theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	#[allow(missing_docs)]
	#[must_use]
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Add several aliases.
	#[must_use]
	pub fn aliases<I, S>(mut self, aliases: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.aliases.extend(aliases.into_iter().map(Into::into));
		self
	}
}

/// A known theme with its aliases.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	#[allow(missing_docs)]
	pub name: String,
	#[allow(missing_docs)]
	pub aliases: Vec<String>,
	#[allow(missing_docs)]
	pub theme: Theme,
}

fn key(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Themes in load order. `lookup` maps the key of every canonical name and
/// alias to an index into `themes`.
#[derive(Debug, Default)]
struct Registry {
	themes: Vec<ThemeDescriptor>,
	lookup: HashMap<String, usize>,
}

impl Registry {
	/// Index `registrations`. Two themes may not share a name or an alias.
	fn build(registrations: Vec<ThemeRegistration>) -> Result<Self> {
		let mut registry = Self::default();
		for registration in registrations {
			let index = registry.themes.len();
			let mut aliases = Vec::new();
			let names = std::iter::once(registration.name.as_str())
				.chain(registration.aliases.iter().map(String::as_str));
			for (position, name) in names.enumerate() {
				let name_key = key(name);
				if name_key.is_empty() {
					continue;
				}
				match registry.lookup.get(&name_key) {
					Some(&owner) if owner == index => {}
					Some(&owner) => bail!(
						"theme `{}` claims `{name}`, already taken by `{}`",
						registration.name,
						registry.themes[owner].name
					),
					None => {
						registry.lookup.insert(name_key, index);
						if position > 0 {
							aliases.push(name.to_string());
						}
					}
				}
			}
			aliases.sort_by_key(|alias| alias.to_ascii_lowercase());
			registry.themes.push(ThemeDescriptor {
				name: registration.name,
				aliases,
				theme: registration.theme,
			});
		}
		Ok(registry)
	}

	fn sorted(&self) -> Vec<ThemeDescriptor> {
		let mut themes = self.themes.clone();
		themes.sort_by_key(|theme| theme.name.to_ascii_lowercase());
		themes
	}
}

fn registry() -> &'static Registry {
	static REGISTRY: OnceLock<Registry> = OnceLock::new();
	REGISTRY.get_or_init(|| {
		Registry::build(builtin_themes())
			.unwrap_or_else(|error| panic!("built-in themes are broken: {error:#}"))
	})
}

/// Look a theme up by name or alias, ignoring case and surrounding spaces.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let registry = registry();
	let index = *registry.lookup.get(&key(name))?;
	Some(registry.themes[index].theme)
}

/// Canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<String> {
	descriptors().into_iter().map(|theme| theme.name).collect()
}

/// Every theme, sorted by name.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	registry().sorted()
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Style};

	use super::*;
	use crate::style::default_theme;

	fn tinted() -> Theme {
		Theme {
			select: Style::new().fg(Color::Blue),
			..default_theme()
		}
	}

	#[test]
	fn builtins_resolve_by_name_and_alias() {
		assert_eq!(names(), vec!["dark", "light", "mono"]);
		assert!(by_name(" LIGHT ").is_some());
		assert_eq!(by_name("default"), by_name("light"));
		assert_eq!(by_name("night"), by_name("dark"));
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn descriptors_list_aliases_without_the_name() {
		let registry = Registry::build(vec![
			ThemeRegistration::new("sea-glass", tinted()).aliases(["Sea Glass", "SEA-GLASS", " "]),
		])
		.expect("builds");
		let [descriptor]: [ThemeDescriptor; 1] =
			registry.sorted().try_into().expect("one theme");
		assert_eq!(descriptor.aliases, vec!["Sea Glass"]);
		assert_eq!(registry.lookup.get("sea glass"), Some(&0));
	}

	#[test]
	fn shared_names_are_rejected() {
		let alias = Registry::build(vec![
			ThemeRegistration::new("first", tinted()).aliases(["shared"]),
			ThemeRegistration::new("second", default_theme()).aliases(["shared"]),
		])
		.unwrap_err();
		assert!(format!("{alias:#}").contains("already taken by `first`"));

		let name = Registry::build(vec![
			ThemeRegistration::new("same", tinted()),
			ThemeRegistration::new("Same", default_theme()),
		]);
		assert!(name.is_err());
	}
}
