//! Scroll geometry and the scroll indicator drawn beside the rows.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget};

use crate::style::Theme;

/// How `len` items scroll through `visible` slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Number of items.
	pub len: usize,
	/// Slots on screen, never more than `len`.
	pub visible: usize,
	/// Largest useful offset.
	pub max_offset: usize,
}

impl ScrollMetrics {
	#[allow(missing_docs)]
	#[must_use]
	pub fn compute(len: usize, visible: usize) -> Self {
		let visible = visible.min(len);
		Self {
			len,
			visible,
			max_offset: len - visible,
		}
	}

	/// Whether some items are off screen.
	#[must_use]
	pub fn overflows(&self) -> bool {
		self.max_offset > 0
	}

	/// Clamp `offset` so that `cursor` is visible and no slot is empty.
	#[must_use]
	pub fn follow(&self, offset: usize, cursor: Option<usize>) -> usize {
		if !self.overflows() || self.visible == 0 {
			return 0;
		}
		let offset = match cursor {
			Some(cursor) if cursor < offset => cursor,
			Some(cursor) if cursor >= offset + self.visible => cursor + 1 - self.visible,
			_ => offset,
		};
		offset.min(self.max_offset)
	}

	/// Indicator state for `offset`; the thumb reaches the end of the track
	/// at the largest offset.
	#[must_use]
	pub fn indicator(&self, offset: usize) -> ScrollbarState {
		if !self.overflows() {
			return ScrollbarState::default();
		}
		let position = offset.min(self.max_offset) * (self.len - 1) / self.max_offset;
		ScrollbarState::new(self.len)
			.viewport_content_length(self.visible)
			.position(position)
	}
}

/// Whether the cell at `column`, `row` lies inside `area`.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	area.contains(Position::new(column, row))
}

/// Draw the indicator in the rightmost column of `area`.
///
/// Returns the scrollbar column and the content area left of it.
pub fn render_scrollbar(
	area: Rect,
	buf: &mut Buffer,
	state: &mut ScrollbarState,
	theme: &Theme,
) -> (Rect, Rect) {
	let width = area.width.min(1);
	let content = Rect {
		width: area.width - width,
		..area
	};
	let column = Rect {
		x: content.right(),
		width,
		..area
	};

	let track = Style::new().fg(theme.option_list_container.fg.unwrap_or_default());
	Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.track_style(track)
		.thumb_style(theme.stats_text)
		.render(column, buf, state);
	(column, content)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_overflowing_lists_scroll() {
		let fits = ScrollMetrics::compute(3, 10);
		assert!(!fits.overflows());
		assert_eq!(fits.visible, 3);
		assert_eq!(fits.follow(2, Some(2)), 0);

		let long = ScrollMetrics::compute(30, 10);
		assert!(long.overflows());
		assert_eq!(long.max_offset, 20);
		assert_eq!(long.follow(0, Some(12)), 3);
		assert_eq!(long.follow(8, Some(4)), 4);
		assert_eq!(long.follow(25, None), 20);
	}

	#[test]
	fn point_in_rect_excludes_far_edges() {
		let area = Rect::new(2, 2, 3, 1);
		assert!(point_in_rect(2, 2, area));
		assert!(!point_in_rect(5, 2, area));
		assert!(!point_in_rect(2, 3, area));
		assert!(!point_in_rect(2, 2, Rect::new(2, 2, 0, 0)));
	}

	#[test]
	fn scrollbar_takes_the_last_column() {
		let area = Rect::new(0, 0, 6, 4);
		let mut buf = Buffer::empty(area);
		let mut state = ScrollMetrics::compute(8, 4).indicator(0);
		let (column, content) = render_scrollbar(area, &mut buf, &mut state, &Theme::PLAIN);
		assert_eq!(column, Rect::new(5, 0, 1, 4));
		assert_eq!(content, Rect::new(0, 0, 5, 4));
		assert_eq!(buf[(0, 0)].symbol(), " ");
	}
}
