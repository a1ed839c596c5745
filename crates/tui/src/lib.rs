//! Terminal select widget for `ratatui`.
//!
//! A [`Select`] draws as an anchor in the host UI and opens a searchable
//! option list on demand. Open lists are drawn through a [`SelectProvider`],
//! which fixes the presentation (modal sheet, anchored popover or bottom
//! sheet) and the style for every select it serves. The state machine lives
//! in [`tsel_core`]; this crate draws it and routes terminal input into it.

pub mod animation;
pub mod components;
mod config;
pub mod measure;
mod provider;
mod select;
pub mod style;


pub use config::SelectLabels;
pub use provider::{EventOutcome, SelectProvider};
pub use select::{
	AnchorContext, AnchorHook, DividerHook, MultiSelect, OptionContext, OptionHook, RenderHooks,
	SearchContext, SearchHook, Select, SelectKind, SelectProps, SingleSelect,
};
pub use tsel_core;

pub use crate::components::{
	AnchoredPopover, BottomSheet, ModalSheet, PopoverHost, PopoverRequest, Presentation,
};
pub use crate::style::{StyleConfig, StyleOverrides, Theme, builtin_themes, default_theme};
