//! Visual styling.
//!
//! Themes supply one style per slot. [`StyleOverrides`] patches individual
//! slots on top of the active theme, and [`StyleConfig`] carries both.

/// Theme definitions, built-in themes and the theme registry.
pub mod theme;

pub use theme::{
	StyleOverrides, Theme, ThemeDescriptor, ThemeRegistration, builtin_themes, by_name,
	default_theme, descriptors, names,
};

/// The theme and overrides a provider draws with.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme.
	pub theme: Theme,
	/// Slot patches applied over the theme.
	pub overrides: StyleOverrides,
}

impl StyleConfig {
	/// Style with `theme` and no overrides.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self {
			theme,
			overrides: StyleOverrides::default(),
		}
	}

	/// Replace the slot overrides.
	#[must_use]
	pub fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
		self.overrides = overrides;
		self
	}

	/// The theme with overrides applied; this is what components draw with.
	#[must_use]
	pub fn resolved(&self) -> Theme {
		self.theme.patched(&self.overrides)
	}
}
