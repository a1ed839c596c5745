use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::style::Theme;

/// Rows the spacer occupies below the last option.
pub const BOTTOM_SPACER_ROWS: u16 = 1;

/// Blank trailing row so the last option does not sit on the border.
#[derive(Debug, Clone, Copy)]
pub struct BottomSpacer<'a> {
	theme: &'a Theme,
}

impl<'a> BottomSpacer<'a> {
	#[allow(missing_docs)]
	#[must_use]
	pub fn new(theme: &'a Theme) -> Self {
		Self { theme }
	}
}

impl Widget for BottomSpacer<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let height = area.height.min(BOTTOM_SPACER_ROWS);
		buf.set_style(Rect { height, ..area }, self.theme.option_list);
	}
}
