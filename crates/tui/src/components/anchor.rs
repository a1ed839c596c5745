//! The trigger a select is drawn as while closed.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Widget};
use tsel_core::{SelectMode, SelectOption};
use unicode_truncate::UnicodeTruncateStr;

use super::icons::Icon;
use super::selections::{ChipHit, Selections};
use crate::style::Theme;

/// Rows an anchor needs: one line of content inside a border.
pub const ANCHOR_HEIGHT: u16 = 3;

/// Regions of a drawn anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorHits {
	/// The whole anchor; a click here launches the list.
	pub trigger: Rect,
	/// Inner cells holding the placeholder, label or chips.
	pub content: Rect,
	/// The `✕` clear icon when shown.
	pub clear: Option<Rect>,
	/// Remove buttons of visible chips.
	pub chips: Vec<ChipHit>,
}

/// Anchor widget.
#[derive(Debug, Clone)]
pub struct Anchor<'a> {
	selected: &'a [&'a SelectOption],
	mode: SelectMode,
	placeholder: &'a str,
	open: bool,
	disabled: bool,
	clearable: bool,
	custom_content: bool,
	theme: &'a Theme,
}

impl<'a> Anchor<'a> {
	/// Anchor showing `selected`, or `placeholder` when nothing is selected.
	#[must_use]
	pub fn new(
		selected: &'a [&'a SelectOption],
		mode: SelectMode,
		placeholder: &'a str,
		theme: &'a Theme,
	) -> Self {
		Self {
			selected,
			mode,
			placeholder,
			open: false,
			disabled: false,
			clearable: true,
			custom_content: false,
			theme,
		}
	}

	#[allow(missing_docs)]
	#[must_use]
	pub fn open(mut self, open: bool) -> Self {
		self.open = open;
		self
	}

	#[allow(missing_docs)]
	#[must_use]
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Offer the clear icon while something is selected.
	#[must_use]
	pub fn clearable(mut self, clearable: bool) -> Self {
		self.clearable = clearable;
		self
	}

	/// Leave the content cells empty for a render hook to fill.
	#[must_use]
	pub fn custom_content(mut self, custom: bool) -> Self {
		self.custom_content = custom;
		self
	}

	/// Draw and report the clickable regions.
	pub fn render(self, area: Rect, buf: &mut Buffer) -> AnchorHits {
		let block = Block::bordered()
			.border_set(border::ROUNDED)
			.border_style(self.theme.anchor_border(self.open));
		let inner = block.inner(area);
		block.render(area, buf);

		let mut hits = AnchorHits {
			trigger: area,
			..AnchorHits::default()
		};
		if inner.width < 4 || inner.height == 0 {
			return self.finish(area, buf, hits);
		}
		let line = Rect { height: 1, ..inner };

		let chevron_x = line.right() - 2;
		buf.set_string(chevron_x, line.y, Icon::ChevronDown.glyph(), self.theme.select_icon);
		let mut content_right = chevron_x.saturating_sub(1);

		if self.clearable && !self.selected.is_empty() && chevron_x >= line.x + 4 {
			let clear_x = chevron_x - 2;
			buf.set_string(clear_x, line.y, Icon::Close.glyph(), self.theme.select_icon);
			hits.clear = Some(Rect::new(clear_x, line.y, 1, 1));
			content_right = clear_x.saturating_sub(1);
		}

		let content = Rect {
			x: line.x + 1,
			width: content_right.saturating_sub(line.x + 1),
			..line
		};
		hits.content = content;

		if !self.custom_content {
			self.render_content(content, buf, &mut hits);
		}
		self.finish(area, buf, hits)
	}

	fn render_content(&self, content: Rect, buf: &mut Buffer, hits: &mut AnchorHits) {
		let width = usize::from(content.width);
		match (self.selected, self.mode) {
			([], _) => {
				let (text, _) = self.placeholder.unicode_truncate(width);
				buf.set_string(content.x, content.y, text, self.theme.select_placeholder_text);
			}
			([first, ..], SelectMode::Single) => {
				let (text, _) = first.label.unicode_truncate(width);
				buf.set_string(content.x, content.y, text, self.theme.select_text);
			}
			(chips, SelectMode::Multi) => {
				hits.chips = Selections::new(chips, self.theme).render(content, buf);
			}
		}
	}

	fn finish(&self, area: Rect, buf: &mut Buffer, hits: AnchorHits) -> AnchorHits {
		if self.disabled {
			buf.set_style(area, self.theme.disabled_mask);
		}
		hits
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::default_theme;

	fn line(buf: &Buffer, y: u16) -> String {
		(0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
	}

	#[test]
	fn empty_anchor_shows_placeholder_and_chevron() {
		let theme = default_theme();
		let area = Rect::new(0, 0, 20, ANCHOR_HEIGHT);
		let mut buf = Buffer::empty(area);
		let hits = Anchor::new(&[], SelectMode::Single, "Select...", &theme).render(area, &mut buf);

		assert_eq!(line(&buf, 0), "╭──────────────────╮");
		assert_eq!(line(&buf, 1), "│ Select...      ▾ │");
		assert_eq!(hits.clear, None);
		assert_eq!(hits.trigger, area);
	}

	#[test]
	fn selected_anchor_offers_clear() {
		let theme = default_theme();
		let option = SelectOption::new("1", "One");
		let selected = [&option];
		let area = Rect::new(0, 0, 20, ANCHOR_HEIGHT);
		let mut buf = Buffer::empty(area);
		let hits = Anchor::new(&selected, SelectMode::Single, "Select...", &theme)
			.render(area, &mut buf);

		assert_eq!(line(&buf, 1), "│ One          ✕ ▾ │");
		assert_eq!(hits.clear, Some(Rect::new(15, 1, 1, 1)));

		let hits = Anchor::new(&selected, SelectMode::Single, "Select...", &theme)
			.clearable(false)
			.render(area, &mut Buffer::empty(area));
		assert_eq!(hits.clear, None);
	}
}
