use std::time::Instant;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tsel_core::{AnchorRect, EmptyState, SelectMode, SelectOption, Selection};
use unicode_width::UnicodeWidthStr;

use super::hooks::{AnchorContext, OptionContext, SearchContext};
use super::{PopoverHits, Select};
use crate::components::bottom_spacer::BOTTOM_SPACER_ROWS;
use crate::components::empty_list::EMPTY_LIST_ROWS;
use crate::components::{
	ANCHOR_HEIGHT, Anchor, BottomSpacer, Divider, EmptyList, PopoverHost, PopoverRequest,
	SelectRow, render_scrollbar,
};
use crate::provider::SelectProvider;
use crate::style::Theme;

impl Select {
	/// Draw the anchor into `area` and record where it landed.
	///
	/// The open list is not drawn here; it belongs to the portal layer drawn
	/// by [`SelectProvider::render_portal`] after everything else.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, provider: &SelectProvider) {
		self.render_anchor(frame, area, provider.theme());
	}

	fn render_anchor(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let area = Rect {
			height: area.height.min(ANCHOR_HEIGHT),
			..area
		};
		self.state
			.set_anchor_rect(AnchorRect::new(area.x, area.y, area.width, area.height));

		let mode = self.state.mode();
		let open = self.state.is_open();
		let disabled = self.state.is_disabled();
		let selection = self.state.selection(&self.options);
		let selected: Vec<&SelectOption> = selection.entries().iter().collect();

		let hits = Anchor::new(&selected, mode, &self.labels.placeholder, theme)
			.open(open)
			.disabled(disabled)
			.clearable(self.props.clearable)
			.custom_content(self.hooks.anchor.is_some())
			.render(area, frame.buffer_mut());

		if let Some(hook) = &self.hooks.anchor {
			let context = AnchorContext {
				selected: &selected,
				mode,
				placeholder: &self.labels.placeholder,
				open,
				disabled,
				theme,
			};
			hook(frame, hits.content, &context);
			if disabled {
				frame.buffer_mut().set_style(area, theme.disabled_mask);
			}
		}
		self.anchor_hits = Some(hits);
	}

	/// Where the popover goes this frame.
	///
	/// While a resize settles the previous area is kept, clipped to `frame`.
	/// Once it settles the layout is recomputed for the measured viewport.
	pub(crate) fn place_popover(
		&mut self,
		host: &dyn PopoverHost,
		frame: Rect,
		content_height: u16,
		now: Instant,
	) -> Rect {
		if let Some(measured) = self.resize.poll(now) {
			self.popover_area = None;
			self.viewport = Some(measured);
		}
		let area = match self.popover_area {
			Some(cached) if self.resize.is_pending(now) => cached.intersection(frame),
			_ => {
				let viewport = self.viewport.map_or(frame, |measured| {
					Rect {
						width: measured.width,
						height: measured.height,
						..frame
					}
					.intersection(frame)
				});
				host.layout(&PopoverRequest {
					viewport,
					anchor: self.state.anchor(),
					content_height,
				})
			}
		};
		self.popover_area = Some(area);
		area
	}

	/// Draw the open list through `host`. Closed selects draw nothing.
	pub(crate) fn render_popover(
		&mut self,
		frame: &mut Frame,
		host: &dyn PopoverHost,
		theme: &Theme,
		now: Instant,
	) {
		if !self.state.is_open() {
			self.popover = None;
			return;
		}

		let mode = self.state.mode();
		let selection = self.state.selection(&self.options);
		let rows: Vec<SelectOption> = self
			.state
			.filtered(&self.options)
			.into_iter()
			.cloned()
			.collect();
		let empty = self.state.empty_state(&self.options);
		let row_height = if self.props.option_dividers { 2 } else { 1 };
		self.list.set_len(rows.len());
		self.list.set_row_height(row_height);

		let show_stats = self.labels.list_title.is_some()
			|| (mode == SelectMode::Multi && self.props.show_selection_count);
		let header = u16::from(self.props.searchable) + u16::from(show_stats);
		let body = match &empty {
			Some(EmptyState::NoMatches { create: Some(_) }) => EMPTY_LIST_ROWS,
			Some(_) => 1,
			None => u16::try_from(rows.len())
				.unwrap_or(u16::MAX)
				.saturating_mul(row_height)
				.saturating_sub(row_height - 1),
		};
		let content_height = header
			.saturating_add(u16::from(header > 0))
			.saturating_add(body)
			.saturating_add(BOTTOM_SPACER_ROWS)
			.saturating_add(2);

		let area = self.place_popover(host, frame.area(), content_height, now);

		let mut rest = host.render_shell(
			area,
			frame.buffer_mut(),
			self.labels.list_title.as_deref(),
			theme,
		);
		let mut hits = PopoverHits {
			area,
			..PopoverHits::default()
		};

		if self.props.searchable {
			let row = split_top(&mut rest, 1);
			if let Some(hook) = &self.hooks.search {
				let context = SearchContext {
					text: self.search.text(),
					placeholder: &self.labels.search_placeholder,
					theme,
				};
				hook(frame, row, &context);
			} else {
				hits.search = self.search.render(row, frame.buffer_mut(), theme);
			}
		}
		if show_stats {
			let row = split_top(&mut rest, 1);
			self.render_stats(row, frame.buffer_mut(), &selection, mode, theme);
		}
		if header > 0 {
			let row = split_top(&mut rest, 1);
			Divider::new(theme).render(row, frame.buffer_mut());
		}
		let spacer = split_bottom(&mut rest, BOTTOM_SPACER_ROWS);
		BottomSpacer::new(theme).render(spacer, frame.buffer_mut());

		match empty {
			Some(EmptyState::NoOptions) => {
				self.list.area = None;
				EmptyList::new(&self.labels.no_options_msg, theme).render(rest, frame.buffer_mut());
			}
			Some(EmptyState::NoMatches { create }) => {
				self.list.area = None;
				let button = create.map(|text| self.labels.create_button(&text));
				hits.create = EmptyList::new(&self.labels.empty_search_msg, theme)
					.create_button(button)
					.render_with_hit(rest, frame.buffer_mut());
			}
			None => self.render_rows(frame, rest, &rows, &selection, theme, now),
		}

		self.popover = Some(hits);
	}

	fn render_stats(
		&self,
		area: Rect,
		buf: &mut Buffer,
		selection: &Selection,
		mode: SelectMode,
		theme: &Theme,
	) {
		if area.width < 2 {
			return;
		}
		if let Some(title) = &self.labels.list_title {
			buf.set_stringn(
				area.x + 1,
				area.y,
				title,
				usize::from(area.width - 1),
				theme.stats_text,
			);
		}
		if mode == SelectMode::Multi && self.props.show_selection_count {
			let count = self.labels.selection_count(selection.len());
			let width = count.width() as u16;
			if width + 1 < area.width {
				buf.set_string(area.right() - 1 - width, area.y, count, theme.stats_text);
			}
		}
	}

	fn render_rows(
		&mut self,
		frame: &mut Frame,
		area: Rect,
		rows: &[SelectOption],
		selection: &Selection,
		theme: &Theme,
		now: Instant,
	) {
		let mode = self.state.mode();
		self.list.area = Some(area);
		let visible = self.list.visible_options();
		self.list.update_scroll(visible);

		let mut rows_area = area;
		if self.props.scroll_indicator && self.list.metrics.is_some_and(|m| m.overflows()) {
			let (_, content) = render_scrollbar(
				area,
				frame.buffer_mut(),
				&mut self.list.scrollbar_state,
				theme,
			);
			rows_area = content;
			self.list.area = Some(rows_area);
		}

		let row_height = if self.props.option_dividers { 2 } else { 1 };
		let cursor = self.list.cursor();
		let offset = self.list.offset();
		for (slot, (index, option)) in rows.iter().enumerate().skip(offset).enumerate() {
			let Ok(slot) = u16::try_from(slot) else {
				break;
			};
			let y = rows_area.y.saturating_add(slot.saturating_mul(row_height));
			if y >= rows_area.bottom() {
				break;
			}
			let row = Rect::new(rows_area.x, y, rows_area.width, 1);
			let checked = selection.is_checked(&option.key);
			let highlighted = cursor == Some(index);
			let fade = self.fades.intensity(&option.key, now);

			if let Some(hook) = &self.hooks.option {
				let context = OptionContext {
					option,
					index,
					checked,
					highlighted,
					fade,
					mode,
					theme,
				};
				hook(frame, row, &context);
			} else {
				SelectRow::new(&option.label, checked, mode, theme)
					.highlighted(highlighted)
					.reverse(self.props.reverse)
					.fade(fade)
					.render(row, frame.buffer_mut());
			}

			let divider_y = y + 1;
			if row_height == 2 && index + 1 < rows.len() && divider_y < rows_area.bottom() {
				let line = Rect::new(rows_area.x, divider_y, rows_area.width, 1);
				match &self.hooks.divider {
					Some(hook) => hook(frame, line, theme),
					None => Divider::new(theme).render(line, frame.buffer_mut()),
				}
			}
		}
	}
}

fn split_top(area: &mut Rect, rows: u16) -> Rect {
	let rows = rows.min(area.height);
	let top = Rect {
		height: rows,
		..*area
	};
	area.y += rows;
	area.height -= rows;
	top
}

fn split_bottom(area: &mut Rect, rows: u16) -> Rect {
	let rows = rows.min(area.height);
	area.height -= rows;
	Rect {
		y: area.y + area.height,
		height: rows,
		..*area
	}
}
