//! Chips for the options chosen in a multi select.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tsel_core::SelectOption;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use super::icons::Icon;
use crate::style::Theme;

const CHIP_GAP: u16 = 1;
const CHIP_CHROME: u16 = 4;

/// Remove button of one visible chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipHit {
	/// Key the chip stands for.
	pub key: String,
	/// Cell holding the `✕`.
	pub remove: Rect,
}

/// A horizontal run of ` label ✕ ` chips.
///
/// Chips that do not fit are summarised by a trailing `+N` and get no hit
/// region.
#[derive(Debug, Clone)]
pub struct Selections<'a> {
	chips: &'a [&'a SelectOption],
	theme: &'a Theme,
}

impl<'a> Selections<'a> {
	#[allow(missing_docs)]
	#[must_use]
	pub fn new(chips: &'a [&'a SelectOption], theme: &'a Theme) -> Self {
		Self { chips, theme }
	}

	/// Draw on the first row of `area` and return the visible chips' hits.
	pub fn render(self, area: Rect, buf: &mut Buffer) -> Vec<ChipHit> {
		let mut hits = Vec::new();
		if area.height == 0 || area.width == 0 {
			return hits;
		}
		let right = area.right();
		let mut x = area.x;

		for (index, option) in self.chips.iter().enumerate() {
			let remaining = self.chips.len() - index - 1;
			let reserve = if remaining > 0 {
				CHIP_GAP + overflow_marker(remaining).width() as u16
			} else {
				0
			};
			let room = right.saturating_sub(x).saturating_sub(reserve);
			if room <= CHIP_CHROME {
				self.render_overflow(self.chips.len() - index, x, area, buf);
				return hits;
			}

			let (label, label_width) = option
				.label
				.unicode_truncate(usize::from(room - CHIP_CHROME));
			let label_width = label_width as u16;
			if label_width < option.label.width() as u16 && index > 0 {
				self.render_overflow(self.chips.len() - index, x, area, buf);
				return hits;
			}

			buf.set_string(x, area.y, format!(" {label} "), self.theme.select_pill_text);
			let remove_x = x + label_width + 2;
			buf.set_string(remove_x, area.y, Icon::Close.glyph(), self.theme.select_pill_remove);
			buf.set_string(remove_x + 1, area.y, " ", self.theme.select_pill_remove);
			hits.push(ChipHit {
				key: option.key.clone(),
				remove: Rect::new(remove_x, area.y, 1, 1),
			});
			x = remove_x + 2 + CHIP_GAP;
		}
		hits
	}

	fn render_overflow(&self, hidden: usize, x: u16, area: Rect, buf: &mut Buffer) {
		let marker = overflow_marker(hidden);
		let width = area.right().saturating_sub(x);
		let (marker, _) = marker.unicode_truncate(usize::from(width));
		buf.set_string(x, area.y, marker, self.theme.select_pill_text);
	}
}

fn overflow_marker(hidden: usize) -> String {
	format!("+{hidden}")
}
