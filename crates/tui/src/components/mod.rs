//! Building blocks the select is drawn from.
//!
//! Each component draws into a [`Buffer`](ratatui::buffer::Buffer) and, where
//! it has clickable parts, returns their rectangles so the owner can route
//! mouse events without re-deriving layout.

pub mod anchor;
pub mod bottom_spacer;
pub mod checkbox;
pub mod divider;
pub mod empty_list;
pub mod icons;
pub mod list_container;
pub mod scrollbar;
pub mod search_box;
pub mod select_row;
pub mod selections;

pub use anchor::{ANCHOR_HEIGHT, Anchor, AnchorHits};
pub use bottom_spacer::BottomSpacer;
pub use checkbox::Checkbox;
pub use divider::Divider;
pub use empty_list::EmptyList;
pub use icons::Icon;
pub use list_container::{
	AnchoredPopover, BottomSheet, ModalSheet, PopoverHost, PopoverRequest, Presentation,
};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use search_box::{SearchBox, SearchHits};
pub use select_row::SelectRow;
pub use selections::{ChipHit, Selections};
