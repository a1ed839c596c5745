//! Custom rendering hooks.
//!
//! A hook replaces the default drawing of one part of the select. Hit
//! testing still uses the default geometry, so a hook should draw inside the
//! rectangle it is given.

use ratatui::Frame;
use ratatui::layout::Rect;
use tsel_core::{SelectMode, SelectOption};

use crate::style::Theme;

/// What the anchor hook sees.
#[derive(Debug, Clone, Copy)]
pub struct AnchorContext<'a> {
	/// Selected options in value order.
	pub selected: &'a [&'a SelectOption],
	#[allow(missing_docs)]
	pub mode: SelectMode,
	/// Placeholder text for an empty value.
	pub placeholder: &'a str,
	/// Whether the list is open.
	pub open: bool,
	/// Whether the select is disabled.
	pub disabled: bool,
	/// Active theme.
	pub theme: &'a Theme,
}

/// What the search hook sees.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
	/// Current search text.
	pub text: &'a str,
	/// Placeholder for empty text.
	pub placeholder: &'a str,
	/// Active theme.
	pub theme: &'a Theme,
}

/// What the option hook sees for one row.
#[derive(Debug, Clone, Copy)]
pub struct OptionContext<'a> {
	/// The option on this row.
	pub option: &'a SelectOption,
	/// Position among the filtered options.
	pub index: usize,
	/// Whether the option is part of the value.
	pub checked: bool,
	/// Whether the keyboard cursor is on this row.
	pub highlighted: bool,
	/// Selection effect intensity in `0.0..=1.0`.
	pub fade: f32,
	#[allow(missing_docs)]
	pub mode: SelectMode,
	/// Active theme.
	pub theme: &'a Theme,
}

/// Draws the anchor content inside its border.
pub type AnchorHook = Box<dyn Fn(&mut Frame, Rect, &AnchorContext<'_>)>;
/// Draws the search row.
pub type SearchHook = Box<dyn Fn(&mut Frame, Rect, &SearchContext<'_>)>;
/// Draws one option row.
pub type OptionHook = Box<dyn Fn(&mut Frame, Rect, &OptionContext<'_>)>;
/// Draws a divider between option rows.
pub type DividerHook = Box<dyn Fn(&mut Frame, Rect, &Theme)>;

/// Optional replacements for the default drawing.
#[derive(Default)]
pub struct RenderHooks {
	pub(crate) anchor: Option<AnchorHook>,
	pub(crate) search: Option<SearchHook>,
	pub(crate) option: Option<OptionHook>,
	pub(crate) divider: Option<DividerHook>,
}

impl RenderHooks {
	/// Replace the anchor content.
	#[must_use]
	pub fn render_anchor(
		mut self,
		hook: impl Fn(&mut Frame, Rect, &AnchorContext<'_>) + 'static,
	) -> Self {
		self.anchor = Some(Box::new(hook));
		self
	}

	/// Replace the search row.
	#[must_use]
	pub fn render_search(
		mut self,
		hook: impl Fn(&mut Frame, Rect, &SearchContext<'_>) + 'static,
	) -> Self {
		self.search = Some(Box::new(hook));
		self
	}

	/// Replace each option row.
	#[must_use]
	pub fn render_option(
		mut self,
		hook: impl Fn(&mut Frame, Rect, &OptionContext<'_>) + 'static,
	) -> Self {
		self.option = Some(Box::new(hook));
		self
	}

	/// Replace the dividers drawn between rows.
	#[must_use]
	pub fn render_divider(mut self, hook: impl Fn(&mut Frame, Rect, &Theme) + 'static) -> Self {
		self.divider = Some(Box::new(hook));
		self
	}
}

impl std::fmt::Debug for RenderHooks {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RenderHooks")
			.field("anchor", &self.anchor.is_some())
			.field("search", &self.search.is_some())
			.field("option", &self.option.is_some())
			.field("divider", &self.divider.is_some())
			.finish()
	}
}
