//! Popover placement relative to a measured anchor.
//!
//! All units are terminal cells. The popover hangs below its anchor, grows to
//! at least [`PlacementConfig::min_width`], flips to the anchor's right edge
//! when it would overflow horizontally and is pushed up when it would run
//! past the bottom of the viewport.

/// On-screen rectangle of the anchor, recorded each time it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorRect {
	/// Left column.
	pub x: u16,
	/// Top row.
	pub y: u16,
	/// Width in columns.
	pub width: u16,
	/// Height in rows.
	pub height: u16,
}

impl AnchorRect {
	/// Build an anchor rectangle.
	#[must_use]
	pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Column just past the right edge.
	#[must_use]
	pub fn right(&self) -> u16 {
		self.x.saturating_add(self.width)
	}

	/// Row just past the bottom edge.
	#[must_use]
	pub fn bottom(&self) -> u16 {
		self.y.saturating_add(self.height)
	}
}

/// Size of the drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
	/// Columns.
	pub width: u16,
	/// Rows.
	pub height: u16,
}

impl Viewport {
	/// Build a viewport.
	#[must_use]
	pub const fn new(width: u16, height: u16) -> Self {
		Self { width, height }
	}
}

/// Sizing knobs for the anchored popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
	/// Narrowest popover, regardless of anchor width.
	pub min_width: u16,
	/// Tallest popover.
	pub max_height: u16,
	/// Rows between the anchor's bottom edge and the popover.
	pub gap: u16,
	/// Rows kept free at the top and bottom of the viewport.
	pub margin: u16,
}

impl Default for PlacementConfig {
	fn default() -> Self {
		Self {
			min_width: 28,
			max_height: 18,
			gap: 0,
			margin: 1,
		}
	}
}

/// Which viewport edge the popover is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
	/// Offset of the popover's left edge from the viewport's left edge.
	Left(u16),
	/// Offset of the popover's right edge from the viewport's right edge.
	Right(u16),
}

/// Resolved popover geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
	/// Horizontal anchoring.
	pub edge: HorizontalEdge,
	/// Top row.
	pub top: u16,
	/// Width in columns.
	pub width: u16,
	/// Height in rows.
	pub height: u16,
}

impl Placement {
	/// Place a popover wanting `content_height` rows next to `anchor`.
	#[must_use]
	pub fn compute(
		anchor: AnchorRect,
		viewport: Viewport,
		content_height: u16,
		config: &PlacementConfig,
	) -> Self {
		let width = anchor.width.max(config.min_width).min(viewport.width);

		let overflows = u32::from(anchor.x) + u32::from(width) > u32::from(viewport.width);
		let edge = if overflows {
			let right = viewport.width.saturating_sub(anchor.right());
			HorizontalEdge::Right(right.min(viewport.width.saturating_sub(width)))
		} else {
			HorizontalEdge::Left(anchor.x)
		};

		let usable = viewport
			.height
			.saturating_sub(config.margin.saturating_mul(2));
		let height = content_height.min(config.max_height).min(usable);

		let mut top = anchor.bottom().saturating_add(config.gap);
		let limit = viewport.height.saturating_sub(config.margin);
		if top.saturating_add(height) > limit {
			top = limit.saturating_sub(height).max(config.margin.min(limit));
		}

		Self {
			edge,
			top,
			width,
			height,
		}
	}

	/// Left column once resolved against `viewport`.
	#[must_use]
	pub fn left(&self, viewport: Viewport) -> u16 {
		match self.edge {
			HorizontalEdge::Left(left) => left,
			HorizontalEdge::Right(right) => viewport
				.width
				.saturating_sub(right)
				.saturating_sub(self.width),
		}
	}

	/// Whether the popover hangs from the right.
	#[must_use]
	pub fn is_right_anchored(&self) -> bool {
		matches!(self.edge, HorizontalEdge::Right(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn wide() -> PlacementConfig {
		PlacementConfig {
			min_width: 280,
			max_height: 400,
			gap: 0,
			margin: 16,
		}
	}

	#[test]
	fn flips_right_when_min_width_overflows() {
		let anchor = AnchorRect::new(400, 10, 100, 40);
		let viewport = Viewport::new(450, 900);
		let placement = Placement::compute(anchor, viewport, 300, &wide());

		assert!(placement.is_right_anchored());
		assert_eq!(placement.width, 280);
		assert_eq!(placement.left(viewport), 170);
	}

	#[test]
	fn stays_left_when_there_is_room() {
		let anchor = AnchorRect::new(20, 10, 100, 40);
		let viewport = Viewport::new(1024, 900);
		let placement = Placement::compute(anchor, viewport, 300, &wide());

		assert_eq!(placement.edge, HorizontalEdge::Left(20));
		assert_eq!(placement.top, 50);
	}

	#[test]
	fn uses_anchor_width_when_wider_than_minimum() {
		let anchor = AnchorRect::new(0, 0, 320, 3);
		let viewport = Viewport::new(1024, 900);
		let placement = Placement::compute(anchor, viewport, 10, &wide());
		assert_eq!(placement.width, 320);
	}

	#[test]
	fn right_anchor_aligns_with_anchor_right_edge() {
		let anchor = AnchorRect::new(76, 2, 20, 3);
		let viewport = Viewport::new(100, 40);
		let placement = Placement::compute(anchor, viewport, 10, &PlacementConfig::default());

		assert_eq!(placement.edge, HorizontalEdge::Right(4));
		assert_eq!(placement.left(viewport) + placement.width, anchor.right());
	}

	#[test]
	fn bottom_overflow_pushes_popover_up() {
		let anchor = AnchorRect::new(0, 30, 30, 3);
		let viewport = Viewport::new(80, 40);
		let config = PlacementConfig::default();
		let placement = Placement::compute(anchor, viewport, 12, &config);

		assert_eq!(placement.height, 12);
		assert_eq!(placement.top, 40 - 12 - config.margin);
	}

	#[test]
	fn height_is_capped_by_viewport() {
		let anchor = AnchorRect::new(0, 0, 30, 3);
		let viewport = Viewport::new(80, 10);
		let placement = Placement::compute(anchor, viewport, 50, &PlacementConfig::default());

		assert_eq!(placement.height, 8);
		assert_eq!(placement.top, 1);
	}

	#[test]
	fn narrow_viewport_clamps_width() {
		let anchor = AnchorRect::new(5, 0, 10, 3);
		let viewport = Viewport::new(20, 30);
		let placement = Placement::compute(anchor, viewport, 5, &PlacementConfig::default());

		assert_eq!(placement.width, 20);
		assert_eq!(placement.left(viewport), 0);
	}
}
