//! The context every select renders and receives input through.

use std::time::Instant;

use ratatui::Frame;
use ratatui::crossterm::event::Event;
use tsel_core::{SelectEvent, Viewport};

use crate::components::{PopoverHost, Presentation};
use crate::select::Select;
use crate::style::{StyleConfig, Theme};

/// Events produced while handling one terminal event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
	/// Whether a select took the event; the host should not act on it.
	pub consumed: bool,
	/// State events, tagged with the index of the select that produced them.
	pub events: Vec<(usize, SelectEvent)>,
}

/// Shared presentation and style for a group of selects.
///
/// The popover host is fixed at construction. Anchors draw wherever the host
/// UI puts them; open lists are drawn last by [`render_portal`](Self::render_portal)
/// so they sit above everything else.
#[derive(Debug)]
pub struct SelectProvider {
	host: Box<dyn PopoverHost>,
	style: StyleConfig,
	theme: Theme,
}

impl SelectProvider {
	/// Provider using the default host for `presentation`.
	#[must_use]
	pub fn new(presentation: Presentation) -> Self {
		log::debug!("select provider presenting as {presentation:?}");
		Self::with_host(presentation.host())
	}

	/// Provider using a custom host.
	#[must_use]
	pub fn with_host(host: Box<dyn PopoverHost>) -> Self {
		let style = StyleConfig::default();
		Self {
			theme: style.resolved(),
			host,
			style,
		}
	}

	/// Replace the style.
	#[must_use]
	pub fn with_style(mut self, style: StyleConfig) -> Self {
		self.theme = style.resolved();
		self.style = style;
		self
	}

	/// Resolved theme, overrides applied.
	#[must_use]
	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	#[allow(missing_docs)]
	#[must_use]
	pub fn style(&self) -> &StyleConfig {
		&self.style
	}

	/// The popover host.
	#[must_use]
	pub fn host(&self) -> &dyn PopoverHost {
		self.host.as_ref()
	}

	/// Presentation of the host.
	#[must_use]
	pub fn presentation(&self) -> Presentation {
		self.host.kind()
	}

	/// Draw every open select's list. Call after all other drawing.
	pub fn render_portal(&self, frame: &mut Frame, selects: &mut [&mut Select]) {
		let now = Instant::now();
		for select in selects.iter_mut() {
			select.render_popover(frame, self.host.as_ref(), &self.theme, now);
		}
	}

	/// Route a terminal event.
	///
	/// An open select captures every key and mouse event. Otherwise mouse
	/// events go to every select and key events to the `focused` one. Resizes
	/// reach all selects and are never consumed.
	pub fn handle_event(
		&self,
		event: &Event,
		selects: &mut [&mut Select],
		focused: Option<usize>,
	) -> EventOutcome {
		let mut outcome = EventOutcome::default();

		if let Event::Resize(width, height) = event {
			for select in selects.iter_mut() {
				select.on_viewport_resize(Viewport::new(*width, *height));
			}
			return outcome;
		}

		if let Some(index) = selects.iter().position(|select| select.is_open()) {
			outcome.consumed = true;
			let events = match event {
				Event::Key(key) => selects[index].handle_key(*key),
				Event::Mouse(mouse) => selects[index].handle_mouse(*mouse),
				_ => Vec::new(),
			};
			outcome.events = events.into_iter().map(|event| (index, event)).collect();
			return outcome;
		}

		match event {
			Event::Key(key) => {
				if let Some(index) = focused
					&& let Some(select) = selects.get_mut(index)
				{
					let events = select.handle_key(*key);
					outcome.consumed = !events.is_empty();
					outcome
						.events
						.extend(events.into_iter().map(|event| (index, event)));
				}
			}
			Event::Mouse(mouse) => {
				for (index, select) in selects.iter_mut().enumerate() {
					let events = select.handle_mouse(*mouse);
					outcome.consumed |= !events.is_empty();
					outcome
						.events
						.extend(events.into_iter().map(|event| (index, event)));
				}
			}
			_ => {}
		}
		outcome
	}
}

impl Default for SelectProvider {
	fn default() -> Self {
		Self::new(Presentation::default())
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
	use tsel_core::OptionList;

	use super::*;
	use crate::select::SingleSelect;

	fn select() -> Select {
		Select::new(
			OptionList::try_new([("1", "One"), ("2", "Two")]).expect("options"),
			SingleSelect::new(),
		)
	}

	fn key(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	#[test]
	fn keys_go_to_focused_select_only() {
		let provider = SelectProvider::default();
		let (mut a, mut b) = (select(), select());

		let outcome = provider.handle_event(&key(KeyCode::Enter), &mut [&mut a, &mut b], Some(1));
		assert!(outcome.consumed);
		assert_eq!(outcome.events, vec![(1, SelectEvent::Opened)]);
		assert!(!a.is_open());
		assert!(b.is_open());
	}

	#[test]
	fn open_select_captures_input() {
		let provider = SelectProvider::default();
		let (mut a, mut b) = (select(), select());
		let _ = b.launch();

		let outcome = provider.handle_event(&key(KeyCode::Down), &mut [&mut a, &mut b], Some(0));
		assert!(outcome.consumed);
		assert!(outcome.events.is_empty());
		assert!(!a.is_open());
		assert_eq!(b.cursor(), Some(1));
	}

	#[test]
	fn unhandled_keys_pass_through() {
		let provider = SelectProvider::default();
		let mut a = select();
		let outcome = provider.handle_event(&key(KeyCode::Char('q')), &mut [&mut a], Some(0));
		assert!(!outcome.consumed);
	}

	#[test]
	fn provider_fixes_its_presentation() {
		assert_eq!(
			SelectProvider::new(Presentation::BottomSheet).presentation(),
			Presentation::BottomSheet
		);
	}
}
