//! Two selects in a small form. Tab moves focus, `q` quits.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;
use tsel_tui::tsel_core::OptionList;
use tsel_tui::{
	MultiSelect, Presentation, Select, SelectLabels, SelectProps, SelectProvider, SingleSelect,
};

fn main() -> anyhow::Result<()> {
	let fruit = OptionList::try_new([
		("apple", "Apple"),
		("banana", "Banana"),
		("cherry", "Cherry"),
		("durian", "Durian"),
	])?;
	let tags = OptionList::try_new([("red", "Red"), ("sweet", "Sweet"), ("sour", "Sour")])?;

	let log = Rc::new(RefCell::new(String::from("nothing chosen yet")));
	let fruit_log = Rc::clone(&log);
	let tags_log = Rc::clone(&log);

	let mut favourite = Select::new(
		fruit,
		SingleSelect::new().on_change_value(move |key| {
			*fruit_log.borrow_mut() = format!("favourite: {key:?}");
		}),
	)
	.with_labels(SelectLabels::default().placeholder("Favourite fruit"));

	let mut flavours = Select::new(
		tags,
		MultiSelect::new().on_change_value(move |keys| {
			*tags_log.borrow_mut() = format!("flavours: {keys:?}");
		}),
	)
	.with_props(SelectProps {
		creatable: true,
		..SelectProps::default()
	})
	.with_labels(SelectLabels::default().placeholder("Flavours").list_title("Flavours"));

	let provider = SelectProvider::new(Presentation::Popover);
	let mut focused = 0;
	let mut terminal = ratatui::init();
	ratatui::crossterm::execute!(std::io::stdout(), event::EnableMouseCapture)?;

	let result: anyhow::Result<()> = loop {
		let drawn = terminal.draw(|frame| {
			let [top, middle, status] = Layout::vertical([
				Constraint::Length(3),
				Constraint::Length(3),
				Constraint::Length(1),
			])
			.areas(frame.area());
			favourite.render(frame, top, &provider);
			flavours.render(frame, middle, &provider);
			frame.render_widget(Line::from(log.borrow().as_str()), status);
			provider.render_portal(frame, &mut [&mut favourite, &mut flavours]);
		});
		if let Err(err) = drawn {
			break Err(err.into());
		}

		let event = match event::read() {
			Ok(event) => event,
			Err(err) => break Err(err.into()),
		};
		let outcome =
			provider.handle_event(&event, &mut [&mut favourite, &mut flavours], Some(focused));
		if outcome.consumed {
			continue;
		}
		if let Event::Key(key) = event
			&& key.kind == KeyEventKind::Press
		{
			match key.code {
				KeyCode::Char('q') => break Ok(()),
				KeyCode::Tab => focused = (focused + 1) % 2,
				_ => {}
			}
		}
	};

	ratatui::crossterm::execute!(std::io::stdout(), event::DisableMouseCapture)?;
	ratatui::restore();
	result
}
