use std::sync::mpsc::TryRecvError;

use ratatui::style::Style;
use ratatui::widgets::Block;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;
use tui_textarea::{CursorMove, TextArea};

use pinmap_core::{Action, MapScreen, PlaceResult};

use super::theme::Theme;
use crate::providers::Services;
use crate::systems::ServiceDispatcher;

pub struct App<'a> {
	pub(crate) screen: MapScreen,
	pub(crate) search_input: TextArea<'a>,
	pub(crate) dispatcher: ServiceDispatcher,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) show_logs: bool,
}

/// What the session ended with, printed after the terminal is restored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOutcome {
	pub query: String,
	pub result_count: usize,
	pub selection: Option<PlaceResult>,
	pub route: Option<RouteOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOutcome {
	pub destination: Option<String>,
	pub distance_meters: f64,
	pub travel_seconds: u64,
}

impl<'a> App<'a> {
	pub fn new(screen: MapScreen, services: Services) -> Self {
		let theme = Theme::default();
		Self {
			search_input: search_field("", &theme),
			screen,
			dispatcher: ServiceDispatcher::new(services),
			theme,
			throbber_state: ThrobberState::default(),
			show_logs: false,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		let text = self.query_text();
		self.search_input = search_field(&text, &theme);
	}

	pub fn set_query(&mut self, query: &str) {
		self.search_input = search_field(query, &self.theme);
		self.sync_query();
	}

	pub fn set_show_logs(&mut self, show: bool) {
		self.show_logs = show;
	}

	pub fn screen(&self) -> &MapScreen {
		&self.screen
	}

	/// Apply an action and start every effect it produced.
	pub(crate) fn perform(&mut self, action: Action) {
		for effect in self.screen.apply(action) {
			self.dispatcher.dispatch(effect);
		}
	}

	/// Feed completed service calls back into the screen.
	pub(crate) fn pump_service_results(&mut self) {
		loop {
			match self.dispatcher.try_recv() {
				Ok(action) => self.perform(action),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	pub(crate) fn is_busy(&self) -> bool {
		self.dispatcher.pending() > 0
	}

	/// Push the text field's contents into the screen's query.
	pub(crate) fn sync_query(&mut self) {
		let text = self.query_text();
		if text != self.screen.query() {
			self.perform(Action::EditQuery(text));
		}
	}

	fn query_text(&self) -> String {
		self.search_input.lines().join(" ")
	}

	pub fn outcome(&self) -> SessionOutcome {
		let route = self.screen.route().map(|route| RouteOutcome {
			destination: self
				.screen
				.route_destination()
				.map(|place| place.label().to_string()),
			distance_meters: route.distance_meters,
			travel_seconds: route.expected_travel_time.as_secs(),
		});
		SessionOutcome {
			query: self.screen.query().to_string(),
			result_count: self.screen.results().len(),
			selection: self.screen.selection().cloned(),
			route,
		}
	}
}

fn search_field<'a>(text: &str, theme: &Theme) -> TextArea<'a> {
	let mut input = TextArea::new(vec![text.to_string()]);
	input.set_cursor_line_style(Style::default());
	input.set_placeholder_text("Search for a place and press Enter");
	input.set_style(theme.prompt);
	input.set_block(
		Block::bordered()
			.title(" Search ")
			.border_style(theme.border),
	);
	input.move_cursor(CursorMove::End);
	input
}

#[cfg(test)]
pub(crate) mod tests {
	use std::sync::Arc;
	use std::thread;
	use std::time::{Duration, Instant};

	use pinmap_core::{
		Coordinate, Directions, ExternalMaps, LookAround, LookAroundScene, PlaceSearch, Region,
		Route, ServiceError,
	};

	use super::*;

	pub(crate) fn cafe_a() -> PlaceResult {
		PlaceResult::new("node/1", "Cafe A", Coordinate::new(25.78, -80.17))
			.with_description("Brickell Avenue, Miami")
			.with_category("amenity")
	}

	pub(crate) fn cafe_b() -> PlaceResult {
		PlaceResult::new("node/2", "Cafe B", Coordinate::new(25.74, -80.22))
	}

	pub(crate) struct StubSearch;

	impl PlaceSearch for StubSearch {
		fn search(&self, query: &str, _region: &Region) -> Result<Vec<PlaceResult>, ServiceError> {
			if query.is_empty() {
				return Err(ServiceError::Status {
					code: 400,
					message: "empty query".into(),
				});
			}
			Ok(vec![cafe_a(), cafe_b()])
		}
	}

	pub(crate) struct StubDirections;

	impl Directions for StubDirections {
		fn routes(&self, origin: Coordinate, destination: &PlaceResult) -> Result<Vec<Route>, ServiceError> {
			Ok(vec![Route::new(
				vec![origin, destination.coordinate],
				4_200.0,
				Duration::from_secs(540),
			)])
		}
	}

	pub(crate) struct StubLookAround;

	impl LookAround for StubLookAround {
		fn scene(&self, place: &PlaceResult) -> Result<Option<LookAroundScene>, ServiceError> {
			Ok(Some(LookAroundScene {
				image_id: format!("img-{}", place.id),
				captured_at: Some(1_609_459_200_000),
				compass_angle: Some(87.0),
				thumbnail_url: None,
				coordinate: Some(place.coordinate),
			}))
		}
	}

	pub(crate) struct NoopMaps;

	impl ExternalMaps for NoopMaps {
		fn open(&self, _place: &PlaceResult) -> Result<(), ServiceError> {
			Ok(())
		}
	}

	pub(crate) fn stub_services() -> Services {
		Services {
			search: Arc::new(StubSearch),
			directions: Arc::new(StubDirections),
			look_around: Arc::new(StubLookAround),
			external: Arc::new(NoopMaps),
		}
	}

	pub(crate) fn stub_app() -> App<'static> {
		App::new(MapScreen::default(), stub_services())
	}

	pub(crate) fn settle(app: &mut App) {
		let deadline = Instant::now() + Duration::from_secs(2);
		while app.is_busy() && Instant::now() < deadline {
			thread::sleep(Duration::from_millis(5));
			app.pump_service_results();
		}
		app.pump_service_results();
	}

	#[test]
	fn submitted_search_populates_results() {
		let mut app = stub_app();
		app.set_query("Coffee Shop");
		app.perform(Action::SubmitSearch);
		settle(&mut app);
		assert_eq!(app.screen().results(), [cafe_a(), cafe_b()]);
	}

	#[test]
	fn failed_search_leaves_empty_results() {
		let mut app = stub_app();
		app.set_query("Coffee Shop");
		app.perform(Action::SubmitSearch);
		settle(&mut app);

		app.set_query("");
		app.perform(Action::SubmitSearch);
		settle(&mut app);
		assert!(app.screen().results().is_empty());
	}

	#[test]
	fn selection_and_directions_flow_through_services() {
		let mut app = stub_app();
		app.set_query("Coffee Shop");
		app.perform(Action::SubmitSearch);
		settle(&mut app);

		app.perform(Action::SelectResult(cafe_b()));
		settle(&mut app);
		assert_eq!(
			app.screen().preview().map(|scene| scene.image_id.as_str()),
			Some("img-node/2")
		);

		app.perform(Action::RequestDirections);
		settle(&mut app);
		assert!(app.screen().route_displaying());
		assert_eq!(app.screen().visible_pins(), [&cafe_b()]);

		let outcome = app.outcome();
		assert_eq!(outcome.query, "Coffee Shop");
		assert_eq!(outcome.result_count, 2);
		assert_eq!(outcome.selection, Some(cafe_b()));
		assert_eq!(
			outcome.route,
			Some(RouteOutcome {
				destination: Some("Cafe B".into()),
				distance_meters: 4_200.0,
				travel_seconds: 540,
			})
		);
	}

	#[test]
	fn theme_change_keeps_typed_query() {
		let mut app = stub_app();
		app.set_query("Pizza");
		app.set_theme(crate::ui::theme::SOLARIZED);
		assert_eq!(app.screen().query(), "Pizza");
		app.sync_query();
		assert_eq!(app.screen().query(), "Pizza");
	}
}
