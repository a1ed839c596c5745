//! Surfaces an open option list can be drawn on.
//!
//! A [`PopoverHost`] decides where the list goes and draws its frame. The
//! host is chosen once, when the [`SelectProvider`](crate::SelectProvider)
//! is built, from a [`Presentation`].

use std::fmt::Debug;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::border;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Widget};
use serde::{Deserialize, Serialize};
use tsel_core::{AnchorRect, Placement, PlacementConfig, Viewport};

use crate::style::Theme;

/// Below this size the bottom sheet is used regardless of pointer support.
const SMALL_VIEWPORT: Viewport = Viewport::new(48, 16);

/// How open lists are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Presentation {
	/// Full-screen sheet.
	#[default]
	Modal,
	/// Dropdown hanging off the anchor.
	Popover,
	/// Sheet docked to the bottom of the screen.
	BottomSheet,
}

impl Presentation {
	/// Pick a presentation for a terminal.
	///
	/// Small viewports get the bottom sheet. Otherwise terminals with mouse
	/// capture get the anchored popover and keyboard-only ones the modal.
	#[must_use]
	pub fn detect(pointer_capture: bool, viewport: Viewport) -> Self {
		if viewport.width < SMALL_VIEWPORT.width || viewport.height < SMALL_VIEWPORT.height {
			Self::BottomSheet
		} else if pointer_capture {
			Self::Popover
		} else {
			Self::Modal
		}
	}

	/// The host implementing this presentation with default settings.
	#[must_use]
	pub fn host(self) -> Box<dyn PopoverHost> {
		match self {
			Self::Modal => Box::new(ModalSheet),
			Self::Popover => Box::new(AnchoredPopover::default()),
			Self::BottomSheet => Box::new(BottomSheet::default()),
		}
	}
}

/// What a host needs to place a popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoverRequest {
	/// Drawable area of the frame.
	pub viewport: Rect,
	/// Last measured anchor, if it has rendered yet.
	pub anchor: Option<AnchorRect>,
	/// Rows the content wants, borders included.
	pub content_height: u16,
}

/// Places and frames an open option list.
pub trait PopoverHost: Debug + Send + Sync {
	/// Which presentation this host implements.
	fn kind(&self) -> Presentation;

	/// Outer rectangle of the popover.
	fn layout(&self, request: &PopoverRequest) -> Rect;

	/// Clear `area`, draw the frame and return the content area inside it.
	fn render_shell(&self, area: Rect, buf: &mut Buffer, title: Option<&str>, theme: &Theme) -> Rect {
		Clear.render(area, buf);
		let mut block = Block::bordered()
			.border_set(border::ROUNDED)
			.border_style(theme.option_list_container)
			.style(theme.option_list);
		if let Some(title) = title.filter(|_| self.kind() == Presentation::Modal) {
			block = block.title(Line::styled(format!(" {title} "), theme.stats_text));
		}
		let inner = block.inner(area);
		block.render(area, buf);
		inner
	}
}

/// Covers the whole viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalSheet;

impl PopoverHost for ModalSheet {
	fn kind(&self) -> Presentation {
		Presentation::Modal
	}

	fn layout(&self, request: &PopoverRequest) -> Rect {
		request.viewport
	}
}

/// Hangs below the anchor, flipping and shifting to stay on screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchoredPopover {
	/// Size limits.
	pub config: PlacementConfig,
}

impl PopoverHost for AnchoredPopover {
	fn kind(&self) -> Presentation {
		Presentation::Popover
	}

	fn layout(&self, request: &PopoverRequest) -> Rect {
		let Some(anchor) = request.anchor else {
			return ModalSheet.layout(request);
		};
		let viewport = Viewport::new(request.viewport.width, request.viewport.height);
		let relative = AnchorRect {
			x: anchor.x.saturating_sub(request.viewport.x),
			y: anchor.y.saturating_sub(request.viewport.y),
			..anchor
		};
		let placement = Placement::compute(relative, viewport, request.content_height, &self.config);
		Rect {
			x: request.viewport.x + placement.left(viewport),
			y: request.viewport.y + placement.top,
			width: placement.width,
			height: placement.height,
		}
	}
}

/// Docked to the bottom edge at a share of the viewport height.
#[derive(Debug, Clone, Copy)]
pub struct BottomSheet {
	/// Share of the viewport height, in percent.
	pub height_percent: u16,
}

impl Default for BottomSheet {
	fn default() -> Self {
		Self { height_percent: 60 }
	}
}

impl PopoverHost for BottomSheet {
	fn kind(&self) -> Presentation {
		Presentation::BottomSheet
	}

	fn layout(&self, request: &PopoverRequest) -> Rect {
		let area = request.viewport;
		let share = u32::from(area.height) * u32::from(self.height_percent.min(100)) / 100;
		let height = (share as u16).max(3.min(area.height));
		Rect {
			y: area.bottom() - height,
			height,
			..area
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn request(anchor: Option<AnchorRect>) -> PopoverRequest {
		PopoverRequest {
			viewport: Rect::new(0, 0, 100, 40),
			anchor,
			content_height: 10,
		}
	}

	#[test]
	fn detect_prefers_bottom_sheet_on_small_screens() {
		assert_eq!(
			Presentation::detect(true, Viewport::new(40, 30)),
			Presentation::BottomSheet
		);
		assert_eq!(Presentation::detect(true, Viewport::new(120, 40)), Presentation::Popover);
		assert_eq!(Presentation::detect(false, Viewport::new(120, 40)), Presentation::Modal);
	}

	#[test]
	fn popover_hangs_below_anchor() {
		let host = AnchoredPopover::default();
		let area = host.layout(&request(Some(AnchorRect::new(10, 2, 20, 3))));
		assert_eq!(area, Rect::new(10, 5, 28, 10));
	}

	#[test]
	fn popover_without_anchor_falls_back_to_modal() {
		let host = AnchoredPopover::default();
		assert_eq!(host.layout(&request(None)), Rect::new(0, 0, 100, 40));
	}

	#[test]
	fn bottom_sheet_docks_to_bottom() {
		let area = BottomSheet::default().layout(&request(None));
		assert_eq!(area, Rect::new(0, 16, 100, 24));
		assert_eq!(area.bottom(), 40);
	}

	#[test]
	fn hosts_report_their_kind() {
		for presentation in [
			Presentation::Modal,
			Presentation::Popover,
			Presentation::BottomSheet,
		] {
			assert_eq!(presentation.host().kind(), presentation);
		}
	}
}
