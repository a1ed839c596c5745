//! Horizontal rule between popover sections.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::style::Theme;

/// One row of `─`.
#[derive(Debug, Clone, Copy)]
pub struct Divider<'a> {
	theme: &'a Theme,
}

impl<'a> Divider<'a> {
	#[allow(missing_docs)]
	#[must_use]
	pub fn new(theme: &'a Theme) -> Self {
		Self { theme }
	}
}

impl Widget for Divider<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 {
			return;
		}
		let line = "─".repeat(usize::from(area.width));
		buf.set_string(area.x, area.y, line, self.theme.divider);
	}
}
