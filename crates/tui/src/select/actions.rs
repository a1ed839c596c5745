use std::time::Instant;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tsel_core::SelectEvent;

use super::Select;
use crate::components::point_in_rect;

impl Select {
	/// Process a key press.
	///
	/// While open every key is consumed: navigation moves the cursor, Enter
	/// presses the highlighted row and the rest goes to the search box.
	pub fn handle_key(&mut self, key: KeyEvent) -> Vec<SelectEvent> {
		if key.kind == KeyEventKind::Release || self.state.is_disabled() {
			return Vec::new();
		}
		if !self.state.is_open() {
			return self.handle_closed_key(key);
		}

		match key.code {
			KeyCode::Esc => self.dismiss(),
			KeyCode::Enter => self.press_highlighted(),
			KeyCode::Up => {
				self.list.step(false);
				Vec::new()
			}
			KeyCode::Down => {
				self.list.step(true);
				Vec::new()
			}
			KeyCode::PageUp => {
				self.list.page(false);
				Vec::new()
			}
			KeyCode::PageDown => {
				self.list.page(true);
				Vec::new()
			}
			KeyCode::Home => {
				self.list.first();
				Vec::new()
			}
			KeyCode::End => {
				self.list.last();
				Vec::new()
			}
			_ if self.props.searchable => {
				if self.search.input(key) {
					let text = self.search.text().to_string();
					self.set_search(text)
				} else {
					Vec::new()
				}
			}
			_ => Vec::new(),
		}
	}

	fn handle_closed_key(&mut self, key: KeyEvent) -> Vec<SelectEvent> {
		match key.code {
			KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => self.launch(),
			KeyCode::Backspace | KeyCode::Delete
				if self.props.clearable && !self.state.value().is_empty() =>
			{
				self.clear()
			}
			_ => Vec::new(),
		}
	}

	fn press_highlighted(&mut self) -> Vec<SelectEvent> {
		let highlighted = self.list.cursor().and_then(|index| {
			self.state
				.filtered(&self.options)
				.get(index)
				.map(|option| option.key.clone())
		});
		match highlighted {
			Some(key) => self.press(&key),
			None => self.create(),
		}
	}

	/// Process a mouse event.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<SelectEvent> {
		if self.state.is_disabled() {
			return Vec::new();
		}
		if self.state.is_open() {
			self.handle_open_mouse(mouse, Instant::now())
		} else {
			self.handle_closed_mouse(mouse)
		}
	}

	fn handle_closed_mouse(&mut self, mouse: MouseEvent) -> Vec<SelectEvent> {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return Vec::new();
		}
		let Some(hits) = &self.anchor_hits else {
			return Vec::new();
		};
		let (column, row) = (mouse.column, mouse.row);

		if hits.clear.is_some_and(|clear| point_in_rect(column, row, clear)) {
			return self.clear();
		}
		if let Some(chip) = hits
			.chips
			.iter()
			.find(|chip| point_in_rect(column, row, chip.remove))
		{
			let key = chip.key.clone();
			return self.remove(&key);
		}
		if point_in_rect(column, row, hits.trigger) {
			return self.launch();
		}
		Vec::new()
	}

	fn handle_open_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Vec<SelectEvent> {
		let (column, row) = (mouse.column, mouse.row);
		let Some(popover) = self.popover.clone() else {
			return Vec::new();
		};
		let inside = point_in_rect(column, row, popover.area);

		match mouse.kind {
			MouseEventKind::Moved => {
				let key = self.key_at(column, row);
				self.fades.hover(key.as_deref(), now);
				Vec::new()
			}
			MouseEventKind::ScrollUp if inside => {
				self.list.step(false);
				Vec::new()
			}
			MouseEventKind::ScrollDown if inside => {
				self.list.step(true);
				Vec::new()
			}
			MouseEventKind::Down(MouseButton::Left) if !inside => self.dismiss(),
			MouseEventKind::Down(MouseButton::Left) => {
				let hit = |area: Option<Rect>| {
					area.is_some_and(|area| point_in_rect(column, row, area))
				};
				if hit(popover.search.back) {
					return self.dismiss();
				}
				if hit(popover.search.clear) {
					return self.set_search(String::new());
				}
				if hit(popover.create) {
					return self.create();
				}
				if self.list.select_at(column, row).is_some()
					&& let Some(key) = self.key_at(column, row)
				{
					return self.press(&key);
				}
				Vec::new()
			}
			_ => Vec::new(),
		}
	}

	fn key_at(&self, column: u16, row: u16) -> Option<String> {
		let index = self.list.index_at(column, row)?;
		self.state
			.filtered(&self.options)
			.get(index)
			.map(|option| option.key.clone())
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyModifiers;
	use tsel_core::{OptionList, SelectValue};

	use super::*;
	use crate::select::{MultiSelect, SelectProps, SingleSelect};

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn options() -> OptionList {
		OptionList::try_new([("1", "One"), ("2", "Two"), ("3", "Three")]).expect("options")
	}

	#[test]
	fn keyboard_walks_and_presses() {
		let mut select = Select::new(options(), SingleSelect::new());
		assert_eq!(select.handle_key(key(KeyCode::Enter)), vec![SelectEvent::Opened]);
		let _ = select.handle_key(key(KeyCode::Up));
		assert_eq!(select.cursor(), Some(2));

		let events = select.handle_key(key(KeyCode::Enter));
		assert!(events.contains(&SelectEvent::ValueChanged(SelectValue::Single(Some(
			"3".into()
		)))));
		assert!(!select.is_open());
	}

	#[test]
	fn typing_filters_and_enter_creates_when_empty() {
		let mut select = Select::new(options(), MultiSelect::new()).with_props(SelectProps {
			creatable: true,
			..SelectProps::default()
		});
		let _ = select.launch();
		for ch in "Kiwi".chars() {
			let _ = select.handle_key(key(KeyCode::Char(ch)));
		}
		assert_eq!(select.search_text(), "Kiwi");
		assert_eq!(select.cursor(), None);

		let events = select.handle_key(key(KeyCode::Enter));
		assert!(events.contains(&SelectEvent::ItemCreated("Kiwi".into())));
		assert_eq!(select.value(), &SelectValue::Multi(vec!["Kiwi".into()]));
	}

	#[test]
	fn backspace_clears_closed_select() {
		let mut select = Select::new(options(), SingleSelect::new().value("1"));
		let _ = select.handle_key(key(KeyCode::Backspace));
		assert_eq!(select.value(), &SelectValue::Single(None));
	}

	#[test]
	fn escape_dismisses() {
		let mut select = Select::new(options(), SingleSelect::new());
		let _ = select.launch();
		let _ = select.handle_key(key(KeyCode::Char('o')));
		let events = select.handle_key(key(KeyCode::Esc));
		assert_eq!(
			events,
			vec![SelectEvent::InputChanged(String::new()), SelectEvent::Closed]
		);
	}

	#[test]
	fn mouse_is_ignored_before_first_render() {
		let mut select = Select::new(options(), SingleSelect::new());
		let click = MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: 1,
			row: 1,
			modifiers: KeyModifiers::NONE,
		};
		assert!(select.handle_mouse(click).is_empty());
	}
}
