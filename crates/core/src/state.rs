//! The select state machine.
//!
//! [`SelectState`] owns everything a select tracks between renders: whether
//! the list is open, the search text, options created from that text, the
//! last measured anchor and (when uncontrolled) a mirror of the value. Every
//! mutating operation returns the [`SelectEvent`]s it produced so the caller
//! can forward them to whatever callbacks it holds.

use crate::error::SelectError;
use crate::filter::{creatable_text, filter_options};
use crate::option::{OptionList, SelectOption, union};
use crate::placement::AnchorRect;
use crate::selection::Selection;
use crate::value::{SelectMode, SelectValue};

/// Whether the option list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
	/// Only the anchor is visible.
	#[default]
	Closed,
	/// The list is showing and accepts search input.
	Open,
}

/// Who owns the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueControl {
	/// The state mirrors every change it emits.
	#[default]
	Uncontrolled,
	/// Changes are only emitted; the host pushes the new value back with
	/// [`SelectState::set_value`].
	Controlled,
}

/// Something the host may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
	/// The selection changed to this value.
	ValueChanged(SelectValue),
	/// The search text changed.
	InputChanged(String),
	/// A new option was created from the search text.
	ItemCreated(String),
	/// The list opened.
	Opened,
	/// The list closed.
	Closed,
}

/// Why the option list has no rows to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
	/// No options were supplied or created at all.
	NoOptions,
	/// Options exist but none match the search text.
	NoMatches {
		/// Text that can be promoted to a new option, when creation is enabled.
		create: Option<String>,
	},
}

/// Local state of one select.
#[derive(Debug, Clone)]
pub struct SelectState {
	value: SelectValue,
	control: ValueControl,
	visibility: Visibility,
	search: String,
	created: Vec<SelectOption>,
	anchor: Option<AnchorRect>,
	disabled: bool,
	creatable: bool,
}

impl SelectState {
	/// Create a closed state holding `value`.
	#[must_use]
	pub fn new(value: SelectValue) -> Self {
		Self {
			value,
			control: ValueControl::default(),
			visibility: Visibility::default(),
			search: String::new(),
			created: Vec::new(),
			anchor: None,
			disabled: false,
			creatable: false,
		}
	}

	/// Create a closed, empty state for `mode`.
	#[must_use]
	pub fn empty(mode: SelectMode) -> Self {
		Self::new(SelectValue::empty(mode))
	}

	/// Choose who owns the value.
	#[must_use]
	pub fn with_control(mut self, control: ValueControl) -> Self {
		self.control = control;
		self
	}

	/// Allow promoting unmatched search text to new options.
	#[must_use]
	pub fn with_creatable(mut self, creatable: bool) -> Self {
		self.creatable = creatable;
		self
	}

	/// Single or multi.
	#[must_use]
	pub fn mode(&self) -> SelectMode {
		self.value.mode()
	}

	/// Current value (the last one set by the host when controlled).
	#[must_use]
	pub fn value(&self) -> &SelectValue {
		&self.value
	}

	/// Whether the list is open.
	#[must_use]
	pub fn is_open(&self) -> bool {
		self.visibility == Visibility::Open
	}

	/// Current visibility.
	#[must_use]
	pub fn visibility(&self) -> Visibility {
		self.visibility
	}

	/// Current search text.
	#[must_use]
	pub fn search(&self) -> &str {
		&self.search
	}

	/// Options created from search text, oldest first.
	#[must_use]
	pub fn created(&self) -> &[SelectOption] {
		&self.created
	}

	/// Last measured anchor rectangle.
	#[must_use]
	pub fn anchor(&self) -> Option<AnchorRect> {
		self.anchor
	}

	/// Whether interaction is suppressed.
	#[must_use]
	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	/// Whether creation is enabled.
	#[must_use]
	pub fn is_creatable(&self) -> bool {
		self.creatable
	}

	/// Who owns the value.
	#[must_use]
	pub fn control(&self) -> ValueControl {
		self.control
	}

	/// Enable or disable interaction. Disabling closes an open list.
	pub fn set_disabled(&mut self, disabled: bool) -> Vec<SelectEvent> {
		self.disabled = disabled;
		if disabled { self.dismiss() } else { Vec::new() }
	}

	/// Enable or disable creation.
	pub fn set_creatable(&mut self, creatable: bool) {
		self.creatable = creatable;
	}

	/// Replace the value from the host side.
	pub fn set_value(&mut self, value: SelectValue) -> Result<(), SelectError> {
		if value.mode() != self.mode() {
			return Err(SelectError::ModeMismatch {
				expected: self.mode(),
				actual: value.mode(),
			});
		}
		self.value = value;
		Ok(())
	}

	/// Record where the anchor was drawn.
	pub fn set_anchor_rect(&mut self, rect: AnchorRect) {
		self.anchor = Some(rect);
	}

	/// Drop everything tied to the mounted lifetime: created options, search
	/// text, the measured anchor and the open flag.
	pub fn reset(&mut self) {
		self.visibility = Visibility::Closed;
		self.search.clear();
		self.created.clear();
		self.anchor = None;
	}

	/// Supplied options followed by created ones.
	pub fn options<'a>(
		&'a self,
		options: &'a OptionList,
	) -> impl Iterator<Item = &'a SelectOption> + 'a {
		union(options, &self.created)
	}

	/// The value resolved against the available options.
	#[must_use]
	pub fn selection(&self, options: &OptionList) -> Selection {
		Selection::resolve(&self.value, self.options(options))
	}

	/// Options matching the current search text.
	#[must_use]
	pub fn filtered<'a>(&'a self, options: &'a OptionList) -> Vec<&'a SelectOption> {
		filter_options(self.options(options), &self.search)
	}

	/// Why nothing is listed, or `None` when there are rows.
	#[must_use]
	pub fn empty_state(&self, options: &OptionList) -> Option<EmptyState> {
		if options.is_empty() && self.created.is_empty() {
			return Some(EmptyState::NoOptions);
		}
		if !self.filtered(options).is_empty() {
			return None;
		}
		Some(EmptyState::NoMatches {
			create: self.creatable_text(options).map(str::to_string),
		})
	}

	/// Text that [`create`](Self::create) would promote, if any.
	#[must_use]
	pub fn creatable_text(&self, options: &OptionList) -> Option<&str> {
		if !self.creatable {
			return None;
		}
		creatable_text(self.options(options), &self.search)
	}

	/// Toggle the list from the anchor.
	pub fn launch(&mut self) -> Vec<SelectEvent> {
		if self.disabled {
			return Vec::new();
		}
		match self.visibility {
			Visibility::Closed => {
				log::debug!("select opened");
				self.visibility = Visibility::Open;
				vec![SelectEvent::Opened]
			}
			Visibility::Open => self.dismiss(),
		}
	}

	/// Close the list and reset the search text.
	pub fn dismiss(&mut self) -> Vec<SelectEvent> {
		let mut events = self.set_search(String::new());
		if self.visibility == Visibility::Open {
			log::debug!("select closed");
			self.visibility = Visibility::Closed;
			events.push(SelectEvent::Closed);
		}
		events
	}

	/// Update the search text.
	pub fn set_search(&mut self, text: impl Into<String>) -> Vec<SelectEvent> {
		let text = text.into();
		if text == self.search {
			return Vec::new();
		}
		self.search.clone_from(&text);
		vec![SelectEvent::InputChanged(text)]
	}

	/// Press the row for `key`.
	///
	/// Single mode replaces (or clears, when `key` is already selected) the
	/// value and closes the list. Multi mode toggles membership and leaves
	/// the list open.
	pub fn press(&mut self, key: &str, options: &OptionList) -> Vec<SelectEvent> {
		let next = self.selection(options).toggled(key);
		let mut events = Vec::new();
		self.emit_value(next, &mut events);
		if self.mode() == SelectMode::Single {
			events.extend(self.dismiss());
		}
		events
	}

	/// Remove `key` from the value without opening the list.
	pub fn remove(&mut self, key: &str, options: &OptionList) -> Vec<SelectEvent> {
		let mut events = Vec::new();
		if let Some(next) = self.selection(options).without(key) {
			self.emit_value(next, &mut events);
		}
		events
	}

	/// Empty the value.
	pub fn clear(&mut self) -> Vec<SelectEvent> {
		let mut events = Vec::new();
		self.emit_value(SelectValue::empty(self.mode()), &mut events);
		events
	}

	/// Promote the search text to a new option and select it.
	pub fn create(&mut self, options: &OptionList) -> Vec<SelectEvent> {
		let Some(text) = self.creatable_text(options).map(str::to_string) else {
			return Vec::new();
		};
		log::debug!("creating option '{text}'");
		self.created.push(SelectOption::simple(text.clone()));
		let mut events = vec![SelectEvent::ItemCreated(text.clone())];
		events.extend(self.press(&text, options));
		events
	}

	fn emit_value(&mut self, next: SelectValue, events: &mut Vec<SelectEvent>) {
		if self.control == ValueControl::Uncontrolled {
			self.value = next.clone();
		}
		events.push(SelectEvent::ValueChanged(next));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn options() -> OptionList {
		OptionList::try_new([("1", "One"), ("2", "Two")]).expect("options")
	}

	fn single() -> SelectState {
		SelectState::empty(SelectMode::Single)
	}

	fn multi(keys: &[&str]) -> SelectState {
		SelectState::new(SelectValue::Multi(
			keys.iter().map(|k| k.to_string()).collect(),
		))
	}

	fn value_changes(events: &[SelectEvent]) -> Vec<&SelectValue> {
		events
			.iter()
			.filter_map(|event| match event {
				SelectEvent::ValueChanged(value) => Some(value),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn launch_opens_and_toggles_closed() {
		let mut state = single();
		assert_eq!(state.launch(), vec![SelectEvent::Opened]);
		assert!(state.is_open());
		assert_eq!(state.launch(), vec![SelectEvent::Closed]);
		assert!(!state.is_open());
	}

	#[test]
	fn disabled_state_ignores_launch() {
		let mut state = single();
		let _ = state.set_disabled(true);
		assert!(state.launch().is_empty());
		assert!(!state.is_open());
	}

	#[test]
	fn single_press_selects_and_closes() {
		let list = options();
		let mut state = single();
		let _ = state.launch();
		assert_eq!(state.filtered(&list).len(), 2);

		let events = state.press("1", &list);
		assert_eq!(
			value_changes(&events),
			vec![&SelectValue::Single(Some("1".into()))]
		);
		assert!(events.contains(&SelectEvent::Closed));
		assert!(!state.is_open());
	}

	#[test]
	fn pressing_selected_single_row_clears() {
		let list = options();
		let mut state = SelectState::new(SelectValue::Single(Some("1".into())));
		let _ = state.launch();
		let events = state.press("1", &list);
		assert_eq!(value_changes(&events), vec![&SelectValue::Single(None)]);
		assert!(!state.is_open());
	}

	#[test]
	fn multi_press_appends_and_stays_open() {
		let list = options();
		let mut state = multi(&["1"]);
		let _ = state.launch();
		let events = state.press("2", &list);
		assert_eq!(
			value_changes(&events),
			vec![&SelectValue::Multi(vec!["1".into(), "2".into()])]
		);
		assert!(state.is_open());

		let events = state.press("1", &list);
		assert_eq!(
			value_changes(&events),
			vec![&SelectValue::Multi(vec!["2".into()])]
		);
	}

	#[test]
	fn remove_and_clear_do_not_open() {
		let list = options();
		let mut state = multi(&["1", "2"]);
		let events = state.remove("1", &list);
		assert_eq!(
			value_changes(&events),
			vec![&SelectValue::Multi(vec!["2".into()])]
		);
		assert!(state.remove("1", &list).is_empty());

		let events = state.clear();
		assert_eq!(value_changes(&events), vec![&SelectValue::Multi(Vec::new())]);
		assert!(!state.is_open());
	}

	#[test]
	fn dismiss_resets_search() {
		let mut state = single();
		let _ = state.launch();
		assert_eq!(
			state.set_search("tw"),
			vec![SelectEvent::InputChanged("tw".into())]
		);
		let events = state.dismiss();
		assert_eq!(
			events,
			vec![SelectEvent::InputChanged(String::new()), SelectEvent::Closed]
		);
		assert_eq!(state.search(), "");
	}

	#[test]
	fn empty_states_are_distinguished() {
		let list = options();
		let mut state = single();
		assert_eq!(state.empty_state(&OptionList::new()), Some(EmptyState::NoOptions));
		assert_eq!(state.empty_state(&list), None);

		let _ = state.set_search("zzz");
		assert_eq!(
			state.empty_state(&list),
			Some(EmptyState::NoMatches { create: None })
		);

		state.set_creatable(true);
		assert_eq!(
			state.empty_state(&list),
			Some(EmptyState::NoMatches {
				create: Some("zzz".into())
			})
		);
	}

	#[test]
	fn create_adds_option_selects_it_and_reports_once() {
		let list = options();
		let mut state = multi(&[]).with_creatable(true);
		let _ = state.launch();
		let _ = state.set_search("Three");

		let events = state.create(&list);
		let created: Vec<_> = events
			.iter()
			.filter(|event| matches!(event, SelectEvent::ItemCreated(_)))
			.collect();
		assert_eq!(created, vec![&SelectEvent::ItemCreated("Three".into())]);
		assert_eq!(state.created(), &[SelectOption::simple("Three")]);
		assert_eq!(state.value(), &SelectValue::Multi(vec!["Three".into()]));
		assert!(state.selection(&list).is_checked("Three"));
	}

	#[test]
	fn create_is_refused_when_disabled_or_matching() {
		let list = options();
		let mut state = single();
		let _ = state.set_search("Three");
		assert!(state.create(&list).is_empty());

		state.set_creatable(true);
		let _ = state.set_search("on");
		assert!(state.create(&list).is_empty());
		assert!(state.created().is_empty());
	}

	#[test]
	fn controlled_state_only_emits() {
		let list = options();
		let mut state = single().with_control(ValueControl::Controlled);
		let events = state.press("2", &list);
		assert_eq!(
			value_changes(&events),
			vec![&SelectValue::Single(Some("2".into()))]
		);
		assert_eq!(state.value(), &SelectValue::Single(None));

		state
			.set_value(SelectValue::Single(Some("2".into())))
			.expect("same mode");
		assert!(state.selection(&list).is_checked("2"));
	}

	#[test]
	fn set_value_rejects_other_mode() {
		let mut state = single();
		assert_eq!(
			state.set_value(SelectValue::Multi(Vec::new())),
			Err(SelectError::ModeMismatch {
				expected: SelectMode::Single,
				actual: SelectMode::Multi,
			})
		);
	}

	#[test]
	fn reset_forgets_created_options() {
		let list = options();
		let mut state = single().with_creatable(true);
		let _ = state.set_search("New");
		let _ = state.create(&list);
		state.set_anchor_rect(AnchorRect::new(0, 0, 10, 3));
		state.reset();
		assert!(state.created().is_empty());
		assert!(state.anchor().is_none());
	}
}
