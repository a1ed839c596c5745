//! Glyphs drawn by the select components.

use ratatui::style::Style;
use ratatui::text::Span;

/// An icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
	/// Checked checkbox mark.
	Check,
	/// Anchor chevron.
	ChevronDown,
	/// Back button in the search row.
	ChevronLeft,
	/// Clear and remove buttons.
	Close,
}

impl Icon {
	/// The glyph; every icon is one cell wide.
	#[must_use]
	pub const fn glyph(self) -> &'static str {
		match self {
			Self::Check => "✓",
			Self::ChevronDown => "▾",
			Self::ChevronLeft => "‹",
			Self::Close => "✕",
		}
	}

	/// The glyph as a styled span.
	#[must_use]
	pub fn span(self, style: Style) -> Span<'static> {
		Span::styled(self.glyph(), style)
	}
}
