mod builtin;
mod color;
mod registry;

use ratatui::style::{Color, Style};

pub use builtin::{builtin_themes, default_theme};
pub use color::{parse_color, parse_modifier};
pub use registry::{ThemeDescriptor, ThemeRegistration, by_name, descriptors, names};

macro_rules! theme_slots {
	($($(#[doc = $doc:literal])+ $slot:ident,)+) => {
		/// One style per themeable part of the select.
		///
		/// Slots are grouped by where they render: `select_*` on the anchor,
		/// `search_*` in the search row and `option_*` in the list.
		#[derive(Debug, Clone, Copy, PartialEq)]
		pub struct Theme {
			$(
				$(#[doc = $doc])+
				pub $slot: Style,
			)+
		}

		impl Theme {
			/// Every slot name, in declaration order. Theme documents use
			/// these as table keys.
			pub const SLOTS: &'static [&'static str] = &[$(stringify!($slot)),+];

			/// A theme where every slot is the empty style.
			pub const PLAIN: Self = Self {
				$($slot: Style::new(),)+
			};

			/// The slot called `name`.
			pub fn slot_mut(&mut self, name: &str) -> Option<&mut Style> {
				match name {
					$(stringify!($slot) => Some(&mut self.$slot),)+
					_ => None,
				}
			}

			/// Return this theme with `overrides` patched on top.
			#[must_use]
			pub fn patched(mut self, overrides: &StyleOverrides) -> Self {
				$(
					if let Some(style) = overrides.$slot {
						self.$slot = self.$slot.patch(style);
					}
				)+
				self
			}
		}

		/// Per-slot style patches layered over a [`Theme`].
		///
		/// A `Some` slot is patched onto the theme's style with
		/// [`Style::patch`], so an override only needs the attributes it changes.
		#[derive(Clone, Copy, Debug, Default, PartialEq)]
		pub struct StyleOverrides {
			$(
				$(#[doc = $doc])+
				pub $slot: Option<Style>,
			)+
		}

		impl StyleOverrides {
			/// Whether no slot is overridden.
			#[must_use]
			pub fn is_empty(&self) -> bool {
				true $(&& self.$slot.is_none())+
			}
		}
	};
}

theme_slots! {
	/// Border and background of the anchor.
	select,
	/// Placeholder text on an empty anchor.
	select_placeholder_text,
	/// Selected label on a single-select anchor.
	select_text,
	/// Chip label on a multi-select anchor.
	select_pill_text,
	/// The `✕` segment of a chip.
	select_pill_remove,
	/// Chevron and clear icons on the anchor.
	select_icon,
	/// Background of the search row.
	search_container,
	/// Typed search text.
	search_input,
	/// Search placeholder text.
	search_placeholder,
	/// Back icon in the search row.
	search_back_icon,
	/// Clear icon in the search row.
	search_clear_icon,
	/// List title and selection count.
	stats_text,
	/// Border and background of the popover surface.
	option_list_container,
	/// Background of the scrolling list.
	option_list,
	/// Base style of every row.
	option_container,
	/// Row label.
	option_text,
	/// Row under the keyboard cursor.
	option_highlight,
	/// Checkbox of a checked row.
	option_check_active,
	/// Checkbox of an unchecked row.
	option_check_inactive,
	/// Colour faded in on hover and press; only the background is used.
	selection_effect,
	/// Separators between list sections.
	divider,
	/// Empty list message and create button.
	empty_text,
	/// Layered over a disabled anchor.
	disabled_mask,
}

impl Theme {
	/// Background colour rows fade towards on hover or press.
	#[must_use]
	pub fn effect_color(&self) -> Color {
		self.selection_effect.bg.unwrap_or(Color::DarkGray)
	}

	/// Anchor border style; an open list borrows the active check colour.
	#[must_use]
	pub fn anchor_border(&self, open: bool) -> Style {
		match (open, self.option_check_active.bg) {
			(true, Some(accent)) => self.select.fg(accent),
			_ => self.select,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slot_names_reach_their_fields() {
		let mut theme = Theme::PLAIN;
		assert_eq!(Theme::SLOTS.len(), 23);
		for name in Theme::SLOTS {
			assert!(theme.slot_mut(name).is_some(), "{name}");
		}
		assert!(theme.slot_mut("border").is_none());

		if let Some(style) = theme.slot_mut("divider") {
			*style = Style::new().fg(Color::Red);
		}
		assert_eq!(theme.divider.fg, Some(Color::Red));
	}
}
