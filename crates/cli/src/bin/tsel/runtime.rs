//! Terminal setup and the event loop.

use std::collections::VecDeque;
use std::io::{Stderr, stderr};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use tsel_core::{OptionList, Viewport};

use crate::app::{PickOutcome, Picker};
use crate::settings::ResolvedConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

type PickerTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the picker until the user accepts or cancels.
///
/// The UI draws on stderr so stdout stays free for the result.
pub(crate) fn run(options: OptionList, config: &ResolvedConfig) -> Result<PickOutcome> {
	let mut terminal = init()?;
	let result = run_loop(&mut terminal, options, config);
	restore()?;
	result
}

fn init() -> Result<PickerTerminal> {
	let hook = panic::take_hook();
	panic::set_hook(Box::new(move |info| {
		let _ = restore();
		hook(info);
	}));

	enable_raw_mode()?;
	execute!(stderr(), EnterAlternateScreen, EnableMouseCapture)?;
	let mut terminal = Terminal::new(CrosstermBackend::new(stderr()))?;
	terminal.clear()?;
	Ok(terminal)
}

fn restore() -> Result<()> {
	disable_raw_mode()?;
	execute!(stderr(), DisableMouseCapture, LeaveAlternateScreen)?;
	Ok(())
}

fn run_loop(
	terminal: &mut PickerTerminal,
	options: OptionList,
	config: &ResolvedConfig,
) -> Result<PickOutcome> {
	let size = terminal.size()?;
	let presentation = config
		.presentation
		.resolve(Viewport::new(size.width, size.height));
	log::debug!("presenting as {presentation:?} in {}x{}", size.width, size.height);
	let mut picker = Picker::new(options, config, presentation);

	let (event_tx, event_rx) = mpsc::channel();
	let event_loop_running = Arc::new(AtomicBool::new(true));
	let event_loop_flag = Arc::clone(&event_loop_running);

	let event_thread = thread::spawn(move || -> Result<()> {
		while event_loop_flag.load(Ordering::Relaxed) {
			if event::poll(POLL_INTERVAL)? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let mut pending_events = VecDeque::new();
	let mut dirty = true;

	let result: Result<PickOutcome> = 'event_loop: loop {
		loop {
			match event_rx.try_recv() {
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'event_loop Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		while let Some(event) = pending_events.pop_front() {
			dirty |= !matches!(event, Event::FocusGained | Event::FocusLost);
			if let Some(outcome) = picker.handle_event(&event) {
				break 'event_loop Ok(outcome);
			}
		}

		if dirty || picker.needs_tick() {
			if let Err(err) = terminal.draw(|frame| picker.draw(frame)) {
				break 'event_loop Err(err.into());
			}
			dirty = false;
		}

		thread::sleep(FRAME_INTERVAL);
	};

	event_loop_running.store(false, Ordering::Relaxed);
	match event_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => panic::resume_unwind(err),
	}

	result
}
