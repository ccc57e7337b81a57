use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use pinmap_core::Action;

use super::{App, SessionOutcome};
use crate::logging;

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<SessionOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		self.submit_initial_query();

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

		let mut pending_events = VecDeque::new();

		let result: Result<SessionOutcome> = 'event_loop: loop {
			logging::pump();
			self.pump_service_results();
			if self.is_busy() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			terminal.draw(|frame| self.draw(frame))?;

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(outcome) = self.handle_key(key)
				{
					maybe_outcome = Some(outcome);
					break;
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	/// Search for a query supplied before the loop started.
	pub(crate) fn submit_initial_query(&mut self) {
		if !self.screen.has_searched() && !self.screen.query().trim().is_empty() {
			log::info!("searching for initial query {:?}", self.screen.query());
			self.perform(Action::SubmitSearch);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::state::tests::{cafe_a, cafe_b, settle, stub_app};

	#[test]
	fn initial_query_is_submitted_once() {
		let mut app = stub_app();
		app.set_query("Coffee Shop");
		app.submit_initial_query();
		settle(&mut app);
		assert_eq!(app.screen().results(), [cafe_a(), cafe_b()]);

		app.submit_initial_query();
		assert_eq!(app.dispatcher.pending(), 0);
	}

	#[test]
	fn blank_initial_query_does_not_search() {
		let mut app = stub_app();
		app.submit_initial_query();
		assert!(!app.screen().has_searched());
	}
}
