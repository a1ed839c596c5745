//! Cursor, scroll offset and geometry of the open option list.

use ratatui::layout::Rect;
use ratatui::widgets::ScrollbarState;

use crate::components::scrollbar::{ScrollMetrics, point_in_rect};

/// Aggregate state for the option rows and their interactions.
#[derive(Debug, Clone)]
pub(crate) struct ListState {
	/// Index of the highlighted row among the filtered options.
	cursor: Option<usize>,
	/// First visible row.
	offset: usize,
	/// Number of filtered options.
	len: usize,
	/// Rows each option takes, two when dividers separate them.
	row_height: u16,
	/// Where the rows were last drawn.
	pub area: Option<Rect>,
	/// Scrollbar state for the rows.
	pub scrollbar_state: ScrollbarState,
	/// Cached scroll metrics for the last rendered viewport.
	pub metrics: Option<ScrollMetrics>,
}

impl Default for ListState {
	fn default() -> Self {
		Self {
			cursor: None,
			offset: 0,
			len: 0,
			row_height: 1,
			area: None,
			scrollbar_state: ScrollbarState::default(),
			metrics: None,
		}
	}
}

impl ListState {
	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	pub fn offset(&self) -> usize {
		self.offset
	}

	pub fn set_row_height(&mut self, row_height: u16) {
		self.row_height = row_height.max(1);
	}

	/// Track a new filtered length and keep the cursor on a valid row.
	pub fn set_len(&mut self, len: usize) {
		self.len = len;
		if len == 0 {
			self.cursor = None;
			self.offset = 0;
		} else if let Some(cursor) = self.cursor {
			if cursor >= len {
				self.cursor = Some(len - 1);
			}
		} else {
			self.cursor = Some(0);
		}
	}

	/// Put the cursor on `index` (or the first row) and scroll to the top.
	pub fn reset(&mut self, index: Option<usize>) {
		self.offset = 0;
		self.cursor = if self.len == 0 {
			None
		} else {
			Some(index.unwrap_or(0).min(self.len - 1))
		};
		self.area = None;
	}

	/// Step by one row, wrapping past either end.
	pub fn step(&mut self, forward: bool) {
		if self.len == 0 {
			return;
		}
		let next = match (self.cursor, forward) {
			(None, true) => 0,
			(None, false) => self.len - 1,
			(Some(cursor), true) => (cursor + 1) % self.len,
			(Some(cursor), false) => cursor.checked_sub(1).unwrap_or(self.len - 1),
		};
		self.cursor = Some(next);
	}

	/// Move a page, stopping at the ends.
	pub fn page(&mut self, forward: bool) {
		if self.len == 0 {
			return;
		}
		let page = self.visible_options().max(1);
		let cursor = self.cursor.unwrap_or(0);
		let next = if forward {
			(cursor + page).min(self.len - 1)
		} else {
			cursor.saturating_sub(page)
		};
		self.cursor = Some(next);
	}

	pub fn first(&mut self) {
		if self.len > 0 {
			self.cursor = Some(0);
		}
	}

	pub fn last(&mut self) {
		if self.len > 0 {
			self.cursor = Some(self.len - 1);
		}
	}

	/// Move the cursor to the row drawn at `row`; returns its index.
	pub fn select_at(&mut self, column: u16, row: u16) -> Option<usize> {
		let index = self.index_at(column, row)?;
		self.cursor = Some(index);
		Some(index)
	}

	/// Index of the option drawn at the given cell, if any.
	pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.area?;
		if !point_in_rect(column, row, area) {
			return None;
		}
		let relative = row - area.y;
		if relative % self.row_height != 0 {
			return None;
		}
		let index = self.offset + usize::from(relative / self.row_height);
		(index < self.len).then_some(index)
	}

	/// Options that fit in the last drawn area.
	pub fn visible_options(&self) -> usize {
		self.area.map_or(0, |area| {
			usize::from(area.height.div_ceil(self.row_height))
		})
	}

	/// Adjust the offset so the cursor is on screen, then refresh the
	/// scrollbar for `visible` option slots.
	pub fn update_scroll(&mut self, visible: usize) {
		let metrics = ScrollMetrics::compute(self.len, visible);
		self.offset = metrics.follow(self.offset, self.cursor);
		self.scrollbar_state = metrics.indicator(self.offset);
		self.metrics = Some(metrics);
	}
}
