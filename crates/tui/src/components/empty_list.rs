//! Placeholder shown in place of option rows.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Rows needed to show the message and a create button.
pub const EMPTY_LIST_ROWS: u16 = 3;

/// Centered italic message with an optional create button underneath.
#[derive(Debug, Clone)]
pub struct EmptyList<'a> {
	message: &'a str,
	create: Option<String>,
	theme: &'a Theme,
}

impl<'a> EmptyList<'a> {
	#[allow(missing_docs)]
	#[must_use]
	pub fn new(message: &'a str, theme: &'a Theme) -> Self {
		Self {
			message,
			create: None,
			theme,
		}
	}

	/// Show a create button with this text.
	#[must_use]
	pub fn create_button(mut self, text: Option<String>) -> Self {
		self.create = text;
		self
	}

	/// Draw into `buf` and return where the create button landed.
	pub fn render_with_hit(self, area: Rect, buf: &mut Buffer) -> Option<Rect> {
		if area.height == 0 || area.width == 0 {
			return None;
		}
		let message_style = self.theme.empty_text.add_modifier(Modifier::ITALIC);
		Line::styled(self.message, message_style)
			.alignment(Alignment::Center)
			.render(Rect { height: 1, ..area }, buf);

		let button = self.create?;
		if area.height < EMPTY_LIST_ROWS {
			return None;
		}
		let width = (button.width() as u16).min(area.width);
		let hit = Rect {
			x: area.x + (area.width - width) / 2,
			y: area.y + 2,
			width,
			height: 1,
		};
		let button_style = self.theme.empty_text.add_modifier(Modifier::BOLD);
		Line::styled(button, button_style).render(hit, buf);
		Some(hit)
	}
}

impl Widget for EmptyList<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let _ = self.render_with_hit(area, buf);
	}
}
