//! Headless model behind the `tsel` select widget.
//!
//! Nothing here draws. The crate holds the option and value types, the
//! reconciliation of a value against available options, search filtering,
//! popover placement and the open/closed state machine. Rendering crates
//! drive [`SelectState`] and forward the [`SelectEvent`]s it returns.

mod error;
pub mod filter;
pub mod option;
pub mod placement;
pub mod selection;
pub mod state;
mod value;

pub use error::SelectError;
pub use filter::{creatable_text, filter_options, label_matches};
pub use option::{OptionList, SelectOption};
pub use placement::{AnchorRect, HorizontalEdge, Placement, PlacementConfig, Viewport};
pub use selection::Selection;
pub use state::{EmptyState, SelectEvent, SelectState, ValueControl, Visibility};
pub use value::{SelectMode, SelectValue};
