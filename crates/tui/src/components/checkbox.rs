//! Three-cell checkbox drawn at the edge of each option row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use super::icons::Icon;
use crate::style::Theme;

/// Width of a checkbox in cells.
pub const CHECKBOX_WIDTH: u16 = 3;

/// `[✓]` when checked, `[ ]` otherwise, or blank when hidden.
#[derive(Debug, Clone, Copy)]
pub struct Checkbox<'a> {
	checked: bool,
	hidden: bool,
	theme: &'a Theme,
}

impl<'a> Checkbox<'a> {
	/// A visible checkbox.
	#[must_use]
	pub fn new(checked: bool, theme: &'a Theme) -> Self {
		Self {
			checked,
			hidden: false,
			theme,
		}
	}

	/// Leave the cells blank.
	#[must_use]
	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}
}

impl Widget for Checkbox<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if self.hidden || area.width < CHECKBOX_WIDTH || area.height == 0 {
			return;
		}
		let (mark, style) = if self.checked {
			(Icon::Check.glyph(), self.theme.option_check_active)
		} else {
			(" ", self.theme.option_check_inactive)
		};
		buf.set_string(area.x, area.y, format!("[{mark}]"), style);
	}
}
