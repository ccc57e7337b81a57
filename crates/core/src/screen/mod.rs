//! The map screen state machine.
//!
//! [`MapScreen`] owns every piece of mutable UI state: the camera, the search
//! query and its results, the selection, the details sheet flag, the route and
//! the look-around preview. All mutation goes through [`MapScreen::apply`],
//! which returns the [`Effect`]s the caller must execute. Completions of those
//! effects come back as actions carrying the id they were issued under, so a
//! superseded request can never overwrite newer state.

mod details;
mod requests;

pub use details::{
	DetailsPanel, PLACEHOLDER_DESCRIPTION, PLACEHOLDER_NAME, PanelCommand, PreviewState,
};

use crate::geo::{CameraPosition, Coordinate, GeoAnchor, Region};
use crate::place::{LookAroundScene, PlaceResult, Route};
use requests::RequestTracker;

/// Fraction of the current span moved by one pan step.
const PAN_STEP: f64 = 0.25;
const ZOOM_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
	North,
	South,
	East,
	West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zoom {
	In,
	Out,
}

/// Everything that can happen to the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
	/// Replace the search text. Does not search.
	EditQuery(String),
	/// Search for the current text within the anchor region.
	SubmitSearch,
	SearchCompleted {
		id: u64,
		results: Vec<PlaceResult>,
	},
	SelectResult(PlaceResult),
	SelectNext,
	SelectPrevious,
	ClearSelection,
	RequestDirections,
	DirectionsCompleted {
		id: u64,
		route: Option<Route>,
	},
	LookAroundCompleted {
		id: u64,
		scene: Option<LookAroundScene>,
	},
	OpenExternally,
	/// Leave route display mode and allow directions to be requested again.
	ClearRoute,
	RecenterOnUser,
	Pan(PanDirection),
	Zoom(Zoom),
}

/// Work the caller must perform on behalf of the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
	Search {
		id: u64,
		query: String,
		region: Region,
	},
	Directions {
		id: u64,
		origin: Coordinate,
		destination: PlaceResult,
	},
	LookAround {
		id: u64,
		place: PlaceResult,
	},
	OpenExternally {
		place: PlaceResult,
	},
}

/// Conceptual phase of the screen, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Browsing,
	Detailing,
	Routing,
	RouteDisplayed,
}

pub struct MapScreen {
	anchor: GeoAnchor,
	camera: CameraPosition,
	query: String,
	results: Vec<PlaceResult>,
	selection: Option<PlaceResult>,
	details_visible: bool,
	directions_requested: bool,
	route: Option<Route>,
	route_destination: Option<PlaceResult>,
	route_displaying: bool,
	preview: Option<LookAroundScene>,
	search: RequestTracker,
	directions: RequestTracker,
	look_around: RequestTracker,
	/// Selection captured when the in-flight directions request was issued.
	pending_destination: Option<PlaceResult>,
}

impl Default for MapScreen {
	fn default() -> Self {
		Self::new(GeoAnchor::default())
	}
}

impl MapScreen {
	pub fn new(anchor: GeoAnchor) -> Self {
		Self {
			anchor,
			camera: CameraPosition::Region(anchor.region),
			query: String::new(),
			results: Vec::new(),
			selection: None,
			details_visible: false,
			directions_requested: false,
			route: None,
			route_destination: None,
			route_displaying: false,
			preview: None,
			search: RequestTracker::default(),
			directions: RequestTracker::default(),
			look_around: RequestTracker::default(),
			pending_destination: None,
		}
	}

	/// Apply one action and return the effects it produced.
	pub fn apply(&mut self, action: Action) -> Vec<Effect> {
		match action {
			Action::EditQuery(text) => {
				self.query = text;
				Vec::new()
			}
			Action::SubmitSearch => vec![self.submit_search()],
			Action::SearchCompleted { id, results } => {
				self.finish_search(id, results);
				Vec::new()
			}
			Action::SelectResult(item) => vec![self.select(item)],
			Action::SelectNext => self.select_relative(1).into_iter().collect(),
			Action::SelectPrevious => self.select_relative(-1).into_iter().collect(),
			Action::ClearSelection => {
				self.clear_selection();
				Vec::new()
			}
			Action::RequestDirections => self.request_directions().into_iter().collect(),
			Action::DirectionsCompleted { id, route } => {
				self.finish_directions(id, route);
				Vec::new()
			}
			Action::LookAroundCompleted { id, scene } => {
				if self.look_around.complete(id) {
					self.preview = scene;
				} else {
					log::debug!("dropping stale look-around response {id}");
				}
				Vec::new()
			}
			Action::OpenExternally => self
				.selection
				.clone()
				.map(|place| Effect::OpenExternally { place })
				.into_iter()
				.collect(),
			Action::ClearRoute => {
				self.clear_route();
				Vec::new()
			}
			Action::RecenterOnUser => {
				self.camera = CameraPosition::Region(self.anchor.region);
				Vec::new()
			}
			Action::Pan(direction) => {
				let (lat, lon) = match direction {
					PanDirection::North => (PAN_STEP, 0.0),
					PanDirection::South => (-PAN_STEP, 0.0),
					PanDirection::East => (0.0, PAN_STEP),
					PanDirection::West => (0.0, -PAN_STEP),
				};
				self.camera = CameraPosition::Region(self.camera.to_region().shifted(lat, lon));
				Vec::new()
			}
			Action::Zoom(zoom) => {
				let factor = match zoom {
					Zoom::In => 1.0 / ZOOM_FACTOR,
					Zoom::Out => ZOOM_FACTOR,
				};
				self.camera = CameraPosition::Region(self.camera.to_region().scaled(factor));
				Vec::new()
			}
		}
	}

	fn submit_search(&mut self) -> Effect {
		let id = self.search.issue();
		log::debug!("issuing search {id} for {:?}", self.query);
		Effect::Search {
			id,
			query: self.query.clone(),
			region: self.anchor.region,
		}
	}

	fn finish_search(&mut self, id: u64, results: Vec<PlaceResult>) {
		if !self.search.complete(id) {
			log::debug!("dropping stale search response {id}");
			return;
		}
		log::debug!("search {id} returned {} results", results.len());
		self.results = results;
	}

	fn select(&mut self, item: PlaceResult) -> Effect {
		self.selection = Some(item.clone());
		self.details_visible = true;
		self.preview = None;
		let id = self.look_around.issue();
		Effect::LookAround { id, place: item }
	}

	fn select_relative(&mut self, step: isize) -> Option<Effect> {
		let pins = self.visible_pins();
		if pins.is_empty() {
			return None;
		}
		let len = pins.len() as isize;
		let current = self
			.selection
			.as_ref()
			.and_then(|selected| pins.iter().position(|pin| *pin == selected));
		let next = match current {
			Some(index) => (index as isize + step).rem_euclid(len) as usize,
			None if step < 0 => pins.len() - 1,
			None => 0,
		};
		let item = pins[next].clone();
		Some(self.select(item))
	}

	fn clear_selection(&mut self) {
		self.selection = None;
		self.details_visible = false;
		self.preview = None;
		self.look_around.invalidate();
	}

	/// Directions fire on the rising edge of the request flag only.
	fn request_directions(&mut self) -> Option<Effect> {
		let destination = self.selection.clone()?;
		self.details_visible = false;
		if self.directions_requested {
			log::debug!("directions already requested; ignoring");
			return None;
		}
		self.directions_requested = true;
		let id = self.directions.issue();
		self.pending_destination = Some(destination.clone());
		Some(Effect::Directions {
			id,
			origin: self.anchor.user_location,
			destination,
		})
	}

	fn finish_directions(&mut self, id: u64, route: Option<Route>) {
		if !self.directions.complete(id) {
			log::debug!("dropping stale directions response {id}");
			return;
		}
		let destination = self.pending_destination.take();
		self.route_destination = route.as_ref().and(destination);
		self.route_displaying = true;
		self.details_visible = false;
		if let Some(rect) = route.as_ref().and_then(Route::bounding_rect) {
			self.camera = CameraPosition::Rect(rect);
		}
		self.route = route;
	}

	fn clear_route(&mut self) {
		self.route = None;
		self.route_destination = None;
		self.route_displaying = false;
		self.directions_requested = false;
		self.pending_destination = None;
		self.directions.invalidate();
	}

	/// Results to draw as pins.
	///
	/// While a route is displayed only the route destination is shown; when
	/// there is no destination (the request failed) nothing is shown.
	pub fn visible_pins(&self) -> Vec<&PlaceResult> {
		if self.route_displaying {
			self.results
				.iter()
				.filter(|item| self.route_destination.as_ref() == Some(*item))
				.collect()
		} else {
			self.results.iter().collect()
		}
	}

	pub fn details_panel(&self) -> DetailsPanel<'_> {
		let preview = match (&self.preview, self.look_around.is_in_flight()) {
			(Some(scene), _) => PreviewState::Ready(scene),
			(None, true) => PreviewState::Loading,
			(None, false) => PreviewState::Unavailable,
		};
		DetailsPanel {
			selection: self.selection.as_ref(),
			preview,
			visible: self.details_visible,
			directions_requested: self.directions_requested,
		}
	}

	pub fn phase(&self) -> Phase {
		if self.route_displaying {
			Phase::RouteDisplayed
		} else if self.directions.is_in_flight() {
			Phase::Routing
		} else if self.selection.is_some() {
			Phase::Detailing
		} else if !self.results.is_empty() {
			Phase::Browsing
		} else {
			Phase::Idle
		}
	}

	pub fn anchor(&self) -> &GeoAnchor {
		&self.anchor
	}

	pub fn user_location(&self) -> Coordinate {
		self.anchor.user_location
	}

	pub fn camera(&self) -> &CameraPosition {
		&self.camera
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn results(&self) -> &[PlaceResult] {
		&self.results
	}

	pub fn selection(&self) -> Option<&PlaceResult> {
		self.selection.as_ref()
	}

	pub fn details_visible(&self) -> bool {
		self.details_visible
	}

	pub fn directions_requested(&self) -> bool {
		self.directions_requested
	}

	pub fn route(&self) -> Option<&Route> {
		self.route.as_ref()
	}

	pub fn route_destination(&self) -> Option<&PlaceResult> {
		self.route_destination.as_ref()
	}

	pub fn route_displaying(&self) -> bool {
		self.route_displaying
	}

	pub fn preview(&self) -> Option<&LookAroundScene> {
		self.preview.as_ref()
	}

	pub fn is_searching(&self) -> bool {
		self.search.is_in_flight()
	}

	pub fn has_searched(&self) -> bool {
		self.search.has_issued()
	}

	pub fn is_routing(&self) -> bool {
		self.directions.is_in_flight()
	}
}
