//! The interactive picker: one select filling the terminal, plus the keys
//! that accept or cancel it.

use ratatui::Frame;
use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tsel_core::{OptionList, SelectEvent, SelectValue};
use tsel_tui::components::ANCHOR_HEIGHT;
use tsel_tui::{MultiSelect, Presentation, Select, SelectKind, SelectProvider, SingleSelect};

use crate::settings::ResolvedConfig;

const HINT: &str = "enter: choose   ctrl-s: accept   esc: close   ctrl-c: cancel";

/// How a pick ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PickOutcome {
	/// Whether the user accepted rather than cancelled.
	pub(crate) accepted: bool,
	/// The value at the time the picker ended.
	pub(crate) value: SelectValue,
	/// Options created from search text, in creation order.
	pub(crate) created: Vec<String>,
	/// The last search text typed into the list.
	pub(crate) query: String,
}

/// Picker state driven by the runtime.
pub(crate) struct Picker {
	select: Select,
	provider: SelectProvider,
	created: Vec<String>,
	query: String,
}

impl Picker {
	/// Build a picker over `options` and open its list.
	pub(crate) fn new(
		options: OptionList,
		config: &ResolvedConfig,
		presentation: Presentation,
	) -> Self {
		let kind = if config.multi {
			SelectKind::from(MultiSelect::new().values(config.initial.iter().cloned()))
		} else {
			let single = match config.initial.first() {
				Some(key) => SingleSelect::new().value(key.clone()),
				None => SingleSelect::new(),
			};
			SelectKind::from(single)
		};

		let mut select = Select::new(options, kind)
			.with_props(config.props.clone())
			.with_labels(config.labels.clone());
		let _ = select.launch();

		Self {
			select,
			provider: SelectProvider::new(presentation).with_style(config.style.clone()),
			created: Vec::new(),
			query: String::new(),
		}
	}

	/// Handle one terminal event, returning the outcome once the pick ends.
	///
	/// Ctrl-C cancels and Ctrl-S accepts at any time. With the list closed,
	/// Esc cancels and Enter accepts a non-empty value. Choosing a row in
	/// single mode accepts straight away.
	pub(crate) fn handle_event(&mut self, event: &Event) -> Option<PickOutcome> {
		if let Event::Key(key) = event
			&& key.kind != KeyEventKind::Release
		{
			let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
			let open = self.select.is_open();
			match key.code {
				KeyCode::Char('c') if ctrl => return Some(self.finish(false)),
				KeyCode::Char('s') if ctrl => return Some(self.finish(true)),
				KeyCode::Esc if !open => return Some(self.finish(false)),
				KeyCode::Enter if !open && !self.select.value().is_empty() => {
					return Some(self.finish(true));
				}
				_ => {}
			}
		}

		let outcome = self
			.provider
			.handle_event(event, &mut [&mut self.select], Some(0));
		if self.select.is_open() {
			self.query = self.select.search_text().to_string();
		}

		let mut chosen = false;
		for (_, event) in outcome.events {
			match event {
				SelectEvent::ItemCreated(text) => {
					log::debug!("created option {text:?}");
					self.created.push(text);
				}
				SelectEvent::ValueChanged(SelectValue::Single(Some(_))) => chosen = true,
				_ => {}
			}
		}
		chosen.then(|| self.finish(true))
	}

	/// Whether a frame is needed even without input.
	pub(crate) fn needs_tick(&mut self) -> bool {
		self.select.needs_tick()
	}

	/// Draw the anchor, the key hints and the open list.
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let anchor = Rect {
			height: ANCHOR_HEIGHT.min(area.height),
			..area
		};
		self.select.render(frame, anchor, &self.provider);

		let hint_y = anchor.bottom();
		if hint_y < area.bottom() && area.width > 2 {
			frame.buffer_mut().set_stringn(
				area.x + 1,
				hint_y,
				HINT,
				usize::from(area.width - 2),
				self.provider.theme().stats_text,
			);
		}

		self.provider.render_portal(frame, &mut [&mut self.select]);
	}

	fn finish(&mut self, accepted: bool) -> PickOutcome {
		log::info!("picker finished, accepted: {accepted}");
		self.select.unmount();
		PickOutcome {
			accepted,
			value: self.select.value().clone(),
			created: std::mem::take(&mut self.created),
			query: std::mem::take(&mut self.query),
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::KeyEvent;
	use tsel_tui::{SelectLabels, SelectProps, StyleConfig};

	use super::*;
	use crate::settings::PresentationChoice;

	fn config(multi: bool) -> ResolvedConfig {
		ResolvedConfig {
			multi,
			initial: Vec::new(),
			props: SelectProps {
				creatable: true,
				..SelectProps::default()
			},
			labels: SelectLabels::default(),
			theme_name: None,
			style: StyleConfig::default(),
			presentation: PresentationChoice::Fixed(Presentation::Modal),
			log_level: log::LevelFilter::Off,
		}
	}

	fn picker(multi: bool) -> Picker {
		let options =
			OptionList::try_new([("1", "One"), ("2", "Two"), ("3", "Three")]).expect("options");
		Picker::new(options, &config(multi), Presentation::Modal)
	}

	fn key(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn ctrl(ch: char) -> Event {
		Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
	}

	fn type_text(picker: &mut Picker, text: &str) {
		for ch in text.chars() {
			assert!(picker.handle_event(&key(KeyCode::Char(ch))).is_none());
		}
	}

	#[test]
	fn single_choice_accepts_immediately() {
		let mut picker = picker(false);
		type_text(&mut picker, "tw");
		let outcome = picker.handle_event(&key(KeyCode::Enter)).expect("accepted");
		assert!(outcome.accepted);
		assert_eq!(outcome.value, SelectValue::Single(Some("2".into())));
		assert_eq!(outcome.query, "tw");
		assert!(outcome.created.is_empty());
	}

	#[test]
	fn multi_toggles_until_accepted() {
		let mut picker = picker(true);
		assert!(picker.handle_event(&key(KeyCode::Enter)).is_none());
		assert!(picker.handle_event(&key(KeyCode::Down)).is_none());
		assert!(picker.handle_event(&key(KeyCode::Enter)).is_none());

		let outcome = picker.handle_event(&ctrl('s')).expect("accepted");
		assert!(outcome.accepted);
		assert_eq!(outcome.value, SelectValue::Multi(vec!["1".into(), "2".into()]));
	}

	#[test]
	fn escape_closes_then_cancels() {
		let mut picker = picker(true);
		assert!(picker.handle_event(&key(KeyCode::Esc)).is_none());
		let outcome = picker.handle_event(&key(KeyCode::Esc)).expect("cancelled");
		assert!(!outcome.accepted);
	}

	#[test]
	fn created_options_are_reported() {
		let mut picker = picker(true);
		type_text(&mut picker, "Kiwi");
		assert!(picker.handle_event(&key(KeyCode::Enter)).is_none());

		let outcome = picker.handle_event(&ctrl('c')).expect("cancelled");
		assert!(!outcome.accepted);
		assert_eq!(outcome.created, vec!["Kiwi"]);
		assert_eq!(outcome.value, SelectValue::Multi(vec!["Kiwi".into()]));
	}

	#[test]
	fn draw_shows_anchor_hint_and_list() {
		let mut picker = picker(false);
		let mut terminal = Terminal::new(TestBackend::new(70, 12)).expect("terminal");
		terminal.draw(|frame| picker.draw(frame)).expect("draw");

		let buffer = terminal.backend().buffer();
		let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
		assert!(text.contains("Search..."));
		assert!(text.contains("Three"));
	}
}
