//! One option row: label plus checkbox.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tsel_core::SelectMode;
use unicode_truncate::UnicodeTruncateStr;

use super::checkbox::{CHECKBOX_WIDTH, Checkbox};
use crate::animation::blend;
use crate::style::Theme;

/// An option row.
///
/// The label sits on the left with the checkbox on the right, or the other
/// way round when `reverse` is set. Single-mode rows hide the checkbox of
/// unchecked options.
#[derive(Debug, Clone, Copy)]
pub struct SelectRow<'a> {
	label: &'a str,
	checked: bool,
	highlighted: bool,
	mode: SelectMode,
	reverse: bool,
	fade: f32,
	theme: &'a Theme,
}

impl<'a> SelectRow<'a> {
	#[allow(missing_docs)]
	#[must_use]
	pub fn new(label: &'a str, checked: bool, mode: SelectMode, theme: &'a Theme) -> Self {
		Self {
			label,
			checked,
			highlighted: false,
			mode,
			reverse: false,
			fade: 0.0,
			theme,
		}
	}

	/// Mark as the keyboard cursor row.
	#[must_use]
	pub fn highlighted(mut self, highlighted: bool) -> Self {
		self.highlighted = highlighted;
		self
	}

	/// Put the checkbox before the label.
	#[must_use]
	pub fn reverse(mut self, reverse: bool) -> Self {
		self.reverse = reverse;
		self
	}

	/// Selection effect intensity in `0.0..=1.0`.
	#[must_use]
	pub fn fade(mut self, fade: f32) -> Self {
		self.fade = fade;
		self
	}
}

impl Widget for SelectRow<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 || area.width == 0 {
			return;
		}
		let area = Rect { height: 1, ..area };

		let mut base = self.theme.option_container;
		if self.highlighted {
			base = base.patch(self.theme.option_highlight);
		}
		if self.fade > 0.0 {
			let under = base
				.bg
				.or(self.theme.option_list.bg)
				.unwrap_or(ratatui::style::Color::Reset);
			base = base.bg(blend(under, self.theme.effect_color(), self.fade));
		}
		buf.set_style(area, base);

		let inner = Rect {
			x: area.x + 1,
			width: area.width.saturating_sub(2),
			..area
		};
		let box_width = CHECKBOX_WIDTH + 1;
		let (box_area, label_area) = if inner.width <= box_width {
			(None, inner)
		} else if self.reverse {
			let boxed = Rect {
				width: CHECKBOX_WIDTH,
				..inner
			};
			let label = Rect {
				x: inner.x + box_width,
				width: inner.width - box_width,
				..inner
			};
			(Some(boxed), label)
		} else {
			let boxed = Rect {
				x: inner.right() - CHECKBOX_WIDTH,
				width: CHECKBOX_WIDTH,
				..inner
			};
			let label = Rect {
				width: inner.width - box_width,
				..inner
			};
			(Some(boxed), label)
		};

		let (label, _) = self.label.unicode_truncate(usize::from(label_area.width));
		buf.set_string(label_area.x, label_area.y, label, self.theme.option_text);

		if let Some(box_area) = box_area {
			let hidden = self.mode == SelectMode::Single && !self.checked;
			Checkbox::new(self.checked, self.theme)
				.hidden(hidden)
				.render(box_area, buf);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::default_theme;

	fn draw(row: SelectRow<'_>) -> String {
		let area = Rect::new(0, 0, 16, 1);
		let mut buf = Buffer::empty(area);
		row.render(area, &mut buf);
		(0..area.width).map(|x| buf[(x, 0)].symbol()).collect()
	}

	#[test]
	fn multi_rows_always_show_a_checkbox() {
		let theme = default_theme();
		assert_eq!(
			draw(SelectRow::new("One", false, SelectMode::Multi, &theme)),
			" One        [ ] "
		);
		assert_eq!(
			draw(SelectRow::new("One", true, SelectMode::Multi, &theme).reverse(true)),
			" [✓] One        "
		);
	}

	#[test]
	fn single_rows_hide_unchecked_box() {
		let theme = default_theme();
		assert_eq!(
			draw(SelectRow::new("Two", false, SelectMode::Single, &theme)),
			" Two            "
		);
		assert_eq!(
			draw(SelectRow::new("Two", true, SelectMode::Single, &theme)),
			" Two        [✓] "
		);
	}
}
