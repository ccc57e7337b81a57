use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::App;
use super::components::{MapView, StatusContext, render_details, render_logs, render_map, render_status};

const INPUT_HEIGHT: u16 = 3;
const LOG_PANE_PERCENT: u16 = 35;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let [input_area, body, status_area] = Layout::vertical([
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Min(5),
			Constraint::Length(1),
		])
		.areas(frame.area());

		frame.render_widget(&self.search_input, input_area);

		let map_area = if self.show_logs {
			let [map_area, log_area] = Layout::horizontal([
				Constraint::Percentage(100 - LOG_PANE_PERCENT),
				Constraint::Percentage(LOG_PANE_PERCENT),
			])
			.areas(body);
			render_logs(frame, log_area, &self.theme);
			map_area
		} else {
			body
		};

		render_map(
			frame,
			MapView {
				area: map_area,
				screen: &self.screen,
				theme: &self.theme,
			},
		);
		render_details(frame, map_area, self.screen.details_panel(), &self.theme);

		let busy = self.is_busy();
		render_status(
			frame,
			status_area,
			StatusContext {
				screen: &self.screen,
				busy,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use pinmap_core::Action;

	use super::super::App;
	use super::super::state::tests::{cafe_a, settle, stub_app};

	fn render(app: &mut App) -> String {
		let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		terminal.backend().to_string()
	}

	#[test]
	fn empty_map_shows_user_location_and_prompt() {
		let mut app = stub_app();
		let view = render(&mut app);
		assert!(view.contains("My Location"), "{view}");
		assert!(view.contains("Search"), "{view}");
		assert!(view.contains("Type a place and press Enter"), "{view}");
	}

	#[test]
	fn search_results_are_drawn_as_pins() {
		let mut app = stub_app();
		app.set_query("Coffee Shop");
		app.perform(Action::SubmitSearch);
		settle(&mut app);

		let view = render(&mut app);
		assert!(view.contains("Cafe A"), "{view}");
		assert!(view.contains("Cafe B"), "{view}");
		assert!(view.contains("2 places"), "{view}");
	}

	#[test]
	fn selection_opens_details_sheet() {
		let mut app = stub_app();
		app.perform(Action::SelectResult(cafe_a()));
		settle(&mut app);

		let view = render(&mut app);
		assert!(view.contains("Brickell Avenue, Miami"), "{view}");
		assert!(view.contains("Image img-node/1"), "{view}");
		assert!(view.contains("Get Directions"), "{view}");
		assert!(view.contains("Open in Maps"), "{view}");
	}

	#[test]
	fn route_hides_sheet_and_reports_summary() {
		let mut app = stub_app();
		app.set_query("Coffee Shop");
		app.perform(Action::SubmitSearch);
		settle(&mut app);
		app.perform(Action::SelectResult(cafe_a()));
		app.perform(Action::RequestDirections);
		settle(&mut app);

		let view = render(&mut app);
		assert!(!view.contains("Get Directions"), "{view}");
		assert!(view.contains("Route to Cafe A"), "{view}");
		assert!(!view.contains("Cafe B"), "{view}");
	}

	#[test]
	fn log_pane_is_toggled() {
		let mut app = stub_app();
		app.set_show_logs(true);
		let view = render(&mut app);
		assert!(view.contains("Logs"), "{view}");
	}
}
