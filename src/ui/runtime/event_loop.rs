use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use docsearch_api::SearchBackend;
use ratatui::crossterm::event::{
	self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
};
use ratatui::crossterm::execute;

use crate::outcome::SearchOutcome;
use crate::ui::{App, UiConfig};

const INITIAL_RESULTS_TIMEOUT: Duration = Duration::from_millis(250);

/// Construct an [`App`] for `config` and run it to completion.
pub fn run(config: UiConfig, backend: Arc<dyn SearchBackend>) -> Result<SearchOutcome> {
	let mut app = App::new(config, backend);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user navigates or quits.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		let setup = execute!(stdout(), EnableMouseCapture, EnableFocusChange)
			.context("failed to enable mouse and focus reporting")
			.and_then(|()| terminal.clear().context("failed to clear terminal"))
			.and_then(|()| terminal.size().context("failed to read terminal size"));
		let size = match setup {
			Ok(size) => size,
			Err(err) => {
				restore_terminal();
				return Err(err);
			}
		};
		self.handle_resize(size.height);

		self.hydrate_initial_results(INITIAL_RESULTS_TIMEOUT);

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events: VecDeque<Event> = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			self.pump_search_results();
			self.tick(Instant::now());
			if self.search.is_in_flight() || self.search.has_pending() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match self.handle_event(event, Instant::now()) {
					Ok(Some(outcome)) => {
						maybe_outcome = Some(Ok(outcome));
						break;
					}
					Ok(None) => {}
					Err(err) => {
						maybe_outcome = Some(Err(err));
						break;
					}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break outcome;
			}

			thread::sleep(Duration::from_millis(16));
		};

		restore_terminal();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}

/// Undo the terminal modes enabled by [`App::run`].
fn restore_terminal() {
	if let Err(err) = execute!(stdout(), DisableMouseCapture, DisableFocusChange) {
		log::warn!("failed to disable mouse and focus reporting: {err}");
	}
	ratatui::restore();
}
