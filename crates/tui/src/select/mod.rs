//! The select orchestrator.
//!
//! [`Select`] wires a [`SelectState`] to the components: it draws the anchor
//! in place, draws the popover when the provider asks for the portal layer,
//! routes keys and clicks to state operations and forwards the resulting
//! events to the host's callbacks.

mod actions;
mod hooks;
mod list_state;
mod render;

use std::time::Instant;

use ratatui::layout::Rect;
use tsel_core::{
	OptionList, SelectError, SelectEvent, SelectMode, SelectState, SelectValue, ValueControl,
	Viewport,
};

pub use self::hooks::{
	AnchorContext, AnchorHook, DividerHook, OptionContext, OptionHook, RenderHooks,
	SearchContext, SearchHook,
};
use self::list_state::ListState;
use crate::animation::Fades;
use crate::components::{AnchorHits, SearchBox, SearchHits};
use crate::config::SelectLabels;
use crate::measure::ResizeDebounce;

type SingleChange = Box<dyn FnMut(Option<&str>)>;
type MultiChange = Box<dyn FnMut(&[String])>;
type TextHandler = Box<dyn FnMut(&str)>;

/// A single select: at most one key, reported as `Option<&str>`.
#[derive(Default)]
pub struct SingleSelect {
	value: Option<String>,
	on_change_value: Option<SingleChange>,
}

impl SingleSelect {
	/// Nothing selected, no callback.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start with `key` selected.
	#[must_use]
	pub fn value(mut self, key: impl Into<String>) -> Self {
		self.value = Some(key.into());
		self
	}

	/// Called with the new key (or `None` once cleared) on every change.
	#[must_use]
	pub fn on_change_value(mut self, callback: impl FnMut(Option<&str>) + 'static) -> Self {
		self.on_change_value = Some(Box::new(callback));
		self
	}

	/// The selected key as last known to the widget.
	#[must_use]
	pub fn current(&self) -> Option<&str> {
		self.value.as_deref()
	}
}

/// A multi select: an ordered list of keys.
#[derive(Default)]
pub struct MultiSelect {
	value: Vec<String>,
	on_change_value: Option<MultiChange>,
}

impl MultiSelect {
	/// Nothing selected, no callback.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start with `keys` selected, in order.
	#[must_use]
	pub fn values<I, S>(mut self, keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.value = keys.into_iter().map(Into::into).collect();
		self
	}

	/// Called with the full new key list on every change.
	#[must_use]
	pub fn on_change_value(mut self, callback: impl FnMut(&[String]) + 'static) -> Self {
		self.on_change_value = Some(Box::new(callback));
		self
	}

	/// The selected keys as last known to the widget.
	#[must_use]
	pub fn current(&self) -> &[String] {
		&self.value
	}
}

/// Single or multi, each with its own value type and change callback.
pub enum SelectKind {
	#[allow(missing_docs)]
	Single(SingleSelect),
	#[allow(missing_docs)]
	Multi(MultiSelect),
}

impl From<SingleSelect> for SelectKind {
	fn from(single: SingleSelect) -> Self {
		Self::Single(single)
	}
}

impl From<MultiSelect> for SelectKind {
	fn from(multi: MultiSelect) -> Self {
		Self::Multi(multi)
	}
}

impl SelectKind {
	/// Which mode this kind selects in.
	#[must_use]
	pub fn mode(&self) -> SelectMode {
		match self {
			Self::Single(_) => SelectMode::Single,
			Self::Multi(_) => SelectMode::Multi,
		}
	}

	fn value(&self) -> SelectValue {
		match self {
			Self::Single(single) => SelectValue::Single(single.value.clone()),
			Self::Multi(multi) => SelectValue::Multi(multi.value.clone()),
		}
	}

	fn sync(&mut self, value: &SelectValue) {
		match (self, value) {
			(Self::Single(single), SelectValue::Single(key)) => single.value.clone_from(key),
			(Self::Multi(multi), SelectValue::Multi(keys)) => multi.value.clone_from(keys),
			(kind, value) => log::warn!(
				"ignoring {:?} value for a {:?} select",
				value.mode(),
				kind.mode()
			),
		}
	}

	fn emit(&mut self, value: &SelectValue) {
		match (self, value) {
			(Self::Single(single), SelectValue::Single(key)) => {
				if let Some(callback) = single.on_change_value.as_mut() {
					callback(key.as_deref());
				}
			}
			(Self::Multi(multi), SelectValue::Multi(keys)) => {
				if let Some(callback) = multi.on_change_value.as_mut() {
					callback(keys);
				}
			}
			_ => {}
		}
	}
}

/// Behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectProps {
	/// Show the search row and route typing into it.
	pub searchable: bool,
	/// Offer the anchor's clear icon and clear on Backspace.
	pub clearable: bool,
	/// Allow promoting unmatched search text to a new option.
	pub creatable: bool,
	/// Ignore all interaction and draw the disabled mask.
	pub disabled: bool,
	/// Only emit value changes; the host pushes values back with
	/// [`Select::set_value`].
	pub controlled: bool,
	/// Put checkboxes before labels.
	pub reverse: bool,
	/// Show `Selections: N` in multi mode.
	pub show_selection_count: bool,
	/// Draw a divider between option rows.
	pub option_dividers: bool,
	/// Draw a scrollbar when rows overflow.
	pub scroll_indicator: bool,
}

impl Default for SelectProps {
	fn default() -> Self {
		Self {
			searchable: true,
			clearable: true,
			creatable: false,
			disabled: false,
			controlled: false,
			reverse: false,
			show_selection_count: true,
			option_dividers: false,
			scroll_indicator: true,
		}
	}
}

#[derive(Default)]
struct Handlers {
	on_change_input: Option<TextHandler>,
	on_create_item: Option<TextHandler>,
}

#[derive(Debug, Clone, Default)]
struct PopoverHits {
	area: Rect,
	search: SearchHits,
	create: Option<Rect>,
}

/// A select widget instance.
pub struct Select {
	options: OptionList,
	kind: SelectKind,
	state: SelectState,
	props: SelectProps,
	labels: SelectLabels,
	hooks: RenderHooks,
	handlers: Handlers,
	search: SearchBox,
	list: ListState,
	fades: Fades,
	resize: ResizeDebounce,
	anchor_hits: Option<AnchorHits>,
	popover: Option<PopoverHits>,
	popover_area: Option<Rect>,
	/// Terminal size reported by the last settled resize.
	viewport: Option<Viewport>,
}

impl Select {
	/// A closed select over `options`.
	#[must_use]
	pub fn new(options: OptionList, kind: impl Into<SelectKind>) -> Self {
		let kind = kind.into();
		let labels = SelectLabels::default();
		let mut select = Self {
			options,
			state: SelectState::new(kind.value()),
			kind,
			props: SelectProps::default(),
			search: SearchBox::new(labels.search_placeholder.clone()),
			labels,
			hooks: RenderHooks::default(),
			handlers: Handlers::default(),
			list: ListState::default(),
			fades: Fades::default(),
			resize: ResizeDebounce::default(),
			anchor_hits: None,
			popover: None,
			popover_area: None,
			viewport: None,
		};
		select.apply_props(SelectProps::default());
		select
	}

	/// Replace the behaviour switches.
	#[must_use]
	pub fn with_props(mut self, props: SelectProps) -> Self {
		self.apply_props(props);
		self
	}

	/// Replace the displayed text.
	#[must_use]
	pub fn with_labels(mut self, labels: SelectLabels) -> Self {
		self.search.set_placeholder(labels.search_placeholder.clone());
		self.labels = labels;
		self
	}

	/// Install render hooks.
	#[must_use]
	pub fn with_hooks(mut self, hooks: RenderHooks) -> Self {
		self.hooks = hooks;
		self
	}

	/// Called with the search text every time it changes.
	#[must_use]
	pub fn on_change_input(mut self, callback: impl FnMut(&str) + 'static) -> Self {
		self.handlers.on_change_input = Some(Box::new(callback));
		self
	}

	/// Called once with the text of every option created from the search.
	#[must_use]
	pub fn on_create_item(mut self, callback: impl FnMut(&str) + 'static) -> Self {
		self.handlers.on_create_item = Some(Box::new(callback));
		self
	}

	fn apply_props(&mut self, props: SelectProps) {
		let control = if props.controlled {
			ValueControl::Controlled
		} else {
			ValueControl::Uncontrolled
		};
		let mode = self.state.mode();
		let state = std::mem::replace(&mut self.state, SelectState::empty(mode));
		self.state = state
			.with_control(control)
			.with_creatable(props.creatable);
		let events = self.state.set_disabled(props.disabled);
		self.props = props;
		let _ = self.dispatch(events);
	}

	/// Supplied options.
	#[must_use]
	pub fn options(&self) -> &OptionList {
		&self.options
	}

	/// Kind with its last known value.
	#[must_use]
	pub fn kind(&self) -> &SelectKind {
		&self.kind
	}

	/// Current value.
	#[must_use]
	pub fn value(&self) -> &SelectValue {
		self.state.value()
	}

	#[allow(missing_docs)]
	#[must_use]
	pub fn mode(&self) -> SelectMode {
		self.state.mode()
	}

	/// Whether the list is open.
	#[must_use]
	pub fn is_open(&self) -> bool {
		self.state.is_open()
	}

	/// The underlying state machine.
	#[must_use]
	pub fn state(&self) -> &SelectState {
		&self.state
	}

	#[allow(missing_docs)]
	#[must_use]
	pub fn props(&self) -> &SelectProps {
		&self.props
	}

	#[allow(missing_docs)]
	#[must_use]
	pub fn labels(&self) -> &SelectLabels {
		&self.labels
	}

	/// Current search text.
	#[must_use]
	pub fn search_text(&self) -> &str {
		self.state.search()
	}

	/// Index of the highlighted row among the filtered options.
	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		self.list.cursor()
	}

	/// Toggle the list, as a press on the anchor does.
	pub fn launch(&mut self) -> Vec<SelectEvent> {
		let events = self.state.launch();
		self.dispatch(events)
	}

	/// Close the list and reset the search text.
	pub fn dismiss(&mut self) -> Vec<SelectEvent> {
		let events = self.state.dismiss();
		self.dispatch(events)
	}

	/// Replace the search text.
	pub fn set_search(&mut self, text: impl Into<String>) -> Vec<SelectEvent> {
		let events = self.state.set_search(text);
		self.dispatch(events)
	}

	/// Press the row for `key`.
	pub fn press(&mut self, key: &str) -> Vec<SelectEvent> {
		if self.state.is_disabled() {
			return Vec::new();
		}
		self.fades.press(key, Instant::now());
		let events = self.state.press(key, &self.options);
		self.dispatch(events)
	}

	/// Remove `key` from the value without opening the list.
	pub fn remove(&mut self, key: &str) -> Vec<SelectEvent> {
		if self.state.is_disabled() {
			return Vec::new();
		}
		let events = self.state.remove(key, &self.options);
		self.dispatch(events)
	}

	/// Empty the value.
	pub fn clear(&mut self) -> Vec<SelectEvent> {
		if self.state.is_disabled() {
			return Vec::new();
		}
		let events = self.state.clear();
		self.dispatch(events)
	}

	/// Promote the search text to an option and select it.
	pub fn create(&mut self) -> Vec<SelectEvent> {
		if self.state.is_disabled() {
			return Vec::new();
		}
		let events = self.state.create(&self.options);
		self.dispatch(events)
	}

	/// Push a value from the host.
	pub fn set_value(&mut self, value: SelectValue) -> Result<(), SelectError> {
		self.state.set_value(value.clone())?;
		self.kind.sync(&value);
		Ok(())
	}

	/// Replace the supplied options. Created options are kept.
	pub fn set_options(&mut self, options: OptionList) {
		self.options = options;
		self.refresh_len();
	}

	/// Enable or disable interaction; disabling closes the list.
	pub fn set_disabled(&mut self, disabled: bool) -> Vec<SelectEvent> {
		self.props.disabled = disabled;
		let events = self.state.set_disabled(disabled);
		self.dispatch(events)
	}

	/// Queue a re-measure after the terminal was resized.
	pub fn on_viewport_resize(&mut self, viewport: Viewport) {
		self.resize.notify(viewport, Instant::now());
	}

	/// Whether another frame is needed soon for fades or a settling resize.
	pub fn needs_tick(&mut self) -> bool {
		let now = Instant::now();
		self.fades.prune(now) || self.resize.is_pending(now)
	}

	/// Forget everything tied to being on screen: created options, search
	/// text, measurements and the open flag.
	pub fn unmount(&mut self) {
		self.state.reset();
		self.search.set_text("");
		self.list = ListState::default();
		self.fades.clear();
		self.anchor_hits = None;
		self.popover = None;
		self.popover_area = None;
		self.viewport = None;
	}

	fn refresh_len(&mut self) {
		let len = self.state.filtered(&self.options).len();
		self.list.set_len(len);
	}

	fn first_checked_index(&self) -> Option<usize> {
		let selection = self.state.selection(&self.options);
		self.state
			.filtered(&self.options)
			.iter()
			.position(|option| selection.is_checked(&option.key))
	}

	fn dispatch(&mut self, events: Vec<SelectEvent>) -> Vec<SelectEvent> {
		for event in &events {
			match event {
				SelectEvent::ValueChanged(value) => {
					if self.state.control() == ValueControl::Uncontrolled {
						self.kind.sync(value);
					}
					self.kind.emit(value);
				}
				SelectEvent::InputChanged(text) => {
					self.search.set_text(text);
					self.refresh_len();
					self.list.reset(None);
					if let Some(callback) = self.handlers.on_change_input.as_mut() {
						callback(text);
					}
				}
				SelectEvent::ItemCreated(text) => {
					if let Some(callback) = self.handlers.on_create_item.as_mut() {
						callback(text);
					}
				}
				SelectEvent::Opened => {
					self.refresh_len();
					let index = self.first_checked_index();
					self.list.reset(index);
				}
				SelectEvent::Closed => {
					self.popover = None;
					self.fades.clear();
				}
			}
		}
		if self.state.is_open() {
			self.refresh_len();
		}
		events
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	fn options() -> OptionList {
		OptionList::try_new([("1", "One"), ("2", "Two")]).expect("options")
	}

	#[test]
	fn single_press_reports_key_and_closes() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let mut select = Select::new(
			options(),
			SingleSelect::new().on_change_value(move |key| {
				sink.borrow_mut().push(key.map(str::to_string));
			}),
		);

		let _ = select.launch();
		assert_eq!(select.state().filtered(select.options()).len(), 2);
		let _ = select.press("1");

		assert_eq!(*seen.borrow(), vec![Some("1".to_string())]);
		assert!(!select.is_open());
		match select.kind() {
			SelectKind::Single(single) => assert_eq!(single.current(), Some("1")),
			SelectKind::Multi(_) => panic!("single select turned multi"),
		}
	}

	#[test]
	fn multi_press_appends_and_stays_open() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let mut select = Select::new(
			options(),
			MultiSelect::new()
				.values(["1"])
				.on_change_value(move |keys| sink.borrow_mut().push(keys.to_vec())),
		);

		let _ = select.launch();
		let _ = select.press("2");

		assert_eq!(*seen.borrow(), vec![vec!["1".to_string(), "2".to_string()]]);
		assert!(select.is_open());
	}

	#[test]
	fn create_calls_handler_once() {
		let created = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&created);
		let mut select = Select::new(options(), MultiSelect::new())
			.with_props(SelectProps {
				creatable: true,
				..SelectProps::default()
			})
			.on_create_item(move |text| sink.borrow_mut().push(text.to_string()));

		let _ = select.launch();
		let _ = select.set_search("Three");
		let _ = select.create();

		assert_eq!(*created.borrow(), vec!["Three".to_string()]);
		assert_eq!(select.value(), &SelectValue::Multi(vec!["Three".into()]));
	}

	#[test]
	fn search_changes_reach_input_handler() {
		let inputs = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&inputs);
		let mut select = Select::new(options(), SingleSelect::new())
			.on_change_input(move |text| sink.borrow_mut().push(text.to_string()));

		let _ = select.launch();
		let _ = select.set_search("tw");
		assert_eq!(select.state().filtered(select.options()).len(), 1);
		let _ = select.dismiss();

		assert_eq!(*inputs.borrow(), vec!["tw".to_string(), String::new()]);
	}

	#[test]
	fn controlled_select_waits_for_host() {
		let mut select = Select::new(options(), SingleSelect::new()).with_props(SelectProps {
			controlled: true,
			..SelectProps::default()
		});
		let events = select.press("2");
		assert!(events.contains(&SelectEvent::ValueChanged(SelectValue::Single(Some(
			"2".into()
		)))));
		assert_eq!(select.value(), &SelectValue::Single(None));

		select
			.set_value(SelectValue::Single(Some("2".into())))
			.expect("same mode");
		assert_eq!(select.value(), &SelectValue::Single(Some("2".into())));
	}

	#[test]
	fn disabled_select_ignores_operations() {
		let mut select = Select::new(options(), SingleSelect::new().value("1"));
		let _ = select.set_disabled(true);
		assert!(select.launch().is_empty());
		assert!(select.clear().is_empty());
		assert_eq!(select.value(), &SelectValue::Single(Some("1".into())));
	}

	#[test]
	fn opening_highlights_first_selected_row() {
		let mut select = Select::new(options(), SingleSelect::new().value("2"));
		let _ = select.launch();
		assert_eq!(select.cursor(), Some(1));
	}
}
