//! Single-line search input with back and clear buttons.

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use tui_textarea::{CursorMove, TextArea};

use super::icons::Icon;
use crate::style::Theme;

/// Where the search row's buttons were drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchHits {
	/// The `‹` back button.
	pub back: Option<Rect>,
	/// The `✕` clear button, present only while there is text.
	pub clear: Option<Rect>,
}

/// Search input backed by a [`TextArea`] that never grows a second line.
#[derive(Debug, Clone)]
pub struct SearchBox {
	textarea: TextArea<'static>,
	placeholder: String,
}

impl Default for SearchBox {
	fn default() -> Self {
		Self::new(String::new())
	}
}

impl SearchBox {
	/// An empty box showing `placeholder`.
	#[must_use]
	pub fn new(placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		let mut textarea = TextArea::default();
		textarea.set_placeholder_text(placeholder.clone());
		Self {
			textarea,
			placeholder,
		}
	}

	/// Current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map_or("", String::as_str)
	}

	/// Replace the text, leaving the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		let mut textarea = TextArea::new(vec![text.to_string()]);
		textarea.set_placeholder_text(self.placeholder.clone());
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	/// Replace the placeholder.
	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.placeholder = placeholder.into();
		self.textarea.set_placeholder_text(self.placeholder.clone());
	}

	/// Feed a key press; returns whether the text changed.
	///
	/// Enter is left to the caller. A newline that slips in through another
	/// binding is folded back into one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if key.code == KeyCode::Enter {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		if self.textarea.lines().len() > 1 {
			let joined = self.textarea.lines().join(" ");
			self.set_text(&joined);
		}
		self.text() != before
	}

	/// Draw the row: back button, input, then the clear button when there is
	/// text to clear.
	pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) -> SearchHits {
		if area.width < 4 || area.height == 0 {
			return SearchHits::default();
		}
		let area = Rect { height: 1, ..area };
		buf.set_style(area, theme.search_container);

		let back = Rect { width: 1, ..area };
		buf.set_string(back.x, back.y, Icon::ChevronLeft.glyph(), theme.search_back_icon);

		let has_text = !self.text().is_empty();
		let trailing = if has_text { 2 } else { 0 };
		let input = Rect {
			x: area.x + 2,
			width: area.width.saturating_sub(2 + trailing),
			..area
		};

		self.textarea.set_style(theme.search_input);
		self.textarea.set_placeholder_style(theme.search_placeholder);
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea
			.set_cursor_style(theme.search_input.add_modifier(Modifier::REVERSED));
		Widget::render(&self.textarea, input, buf);

		let clear = has_text.then(|| {
			let clear = Rect {
				x: area.right() - 1,
				width: 1,
				..area
			};
			buf.set_string(clear.x, clear.y, Icon::Close.glyph(), theme.search_clear_icon);
			clear
		});

		SearchHits {
			back: Some(back),
			clear,
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_reports_changes_and_enter_is_ignored() {
		let mut search = SearchBox::new("Search...");
		assert!(search.input(key(KeyCode::Char('t'))));
		assert!(search.input(key(KeyCode::Char('w'))));
		assert!(!search.input(key(KeyCode::Enter)));
		assert_eq!(search.text(), "tw");
		assert!(search.input(key(KeyCode::Backspace)));
		assert_eq!(search.text(), "t");
	}

	#[test]
	fn clear_button_only_with_text() {
		let theme = crate::style::default_theme();
		let area = Rect::new(0, 0, 20, 1);
		let mut buf = Buffer::empty(area);
		let mut search = SearchBox::new("Search...");

		let hits = search.render(area, &mut buf, &theme);
		assert_eq!(hits.back, Some(Rect::new(0, 0, 1, 1)));
		assert_eq!(hits.clear, None);

		search.set_text("abc");
		let hits = search.render(area, &mut buf, &theme);
		assert_eq!(hits.clear, Some(Rect::new(19, 0, 1, 1)));
		assert_eq!(buf[(19, 0)].symbol(), "✕");
	}
}
