use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pinmap_core::{Action, PanDirection, PanelCommand, Zoom};

use super::{App, SessionOutcome};

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);

		match key.code {
			KeyCode::Char('c' | 'q') if ctrl => return Some(self.outcome()),
			KeyCode::Esc => return self.escape(),
			KeyCode::Enter => {
				self.sync_query();
				self.perform(Action::SubmitSearch);
			}
			KeyCode::Up if alt => self.perform(Action::Pan(PanDirection::North)),
			KeyCode::Down if alt => self.perform(Action::Pan(PanDirection::South)),
			KeyCode::Left if alt => self.perform(Action::Pan(PanDirection::West)),
			KeyCode::Right if alt => self.perform(Action::Pan(PanDirection::East)),
			KeyCode::Char('=' | '+') if alt => self.perform(Action::Zoom(Zoom::In)),
			KeyCode::Char('-') if alt => self.perform(Action::Zoom(Zoom::Out)),
			KeyCode::Up => self.perform(Action::SelectPrevious),
			KeyCode::Down => self.perform(Action::SelectNext),
			KeyCode::Char('o') if ctrl => self.panel_command(PanelCommand::OpenExternally),
			KeyCode::Char('g') if ctrl => self.panel_command(PanelCommand::GetDirections),
			KeyCode::Char('l') if ctrl => self.perform(Action::RecenterOnUser),
			KeyCode::Char('t') if ctrl => self.show_logs = !self.show_logs,
			_ => {
				if self.search_input.input(key) {
					self.sync_query();
				}
			}
		}
		None
	}

	/// Close the innermost thing that is open; quit when nothing is.
	fn escape(&mut self) -> Option<SessionOutcome> {
		if self.screen.details_visible() {
			self.panel_command(PanelCommand::Close);
		} else if self.screen.route_displaying() || self.screen.directions_requested() {
			self.perform(Action::ClearRoute);
		} else {
			return Some(self.outcome());
		}
		None
	}

	fn panel_command(&mut self, command: PanelCommand) {
		let panel = self.screen.details_panel();
		if !panel.is_visible() || !panel.available_commands().contains(&command) {
			log::debug!("ignoring {command:?}: details are not shown");
			return;
		}
		self.perform(command.into());
	}
}
