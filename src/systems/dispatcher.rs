//! Executes screen effects against the external services.
//!
//! Each effect runs on its own short-lived thread. Its completion is turned
//! back into an [`Action`] and sent over a channel that the UI loop drains;
//! the screen decides whether the completion is still current.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use pinmap_core::{Action, Effect};

use crate::providers::Services;

pub struct ServiceDispatcher {
	services: Services,
	tx: Sender<Action>,
	rx: Receiver<Action>,
	pending: Arc<AtomicUsize>,
}

impl ServiceDispatcher {
	pub fn new(services: Services) -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			services,
			tx,
			rx,
			pending: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Start executing `effect` in the background.
	pub fn dispatch(&self, effect: Effect) {
		let services = self.services.clone();
		let tx = self.tx.clone();
		let pending = Arc::clone(&self.pending);
		let name = thread_name(&effect);

		pending.fetch_add(1, Ordering::AcqRel);
		let spawned = thread::Builder::new().name(name.into()).spawn(move || {
			if let Some(action) = run_effect(&services, effect) {
				let _ = tx.send(action);
			}
			pending.fetch_sub(1, Ordering::AcqRel);
		});

		if let Err(err) = spawned {
			self.pending.fetch_sub(1, Ordering::AcqRel);
			log::error!("failed to spawn {name} thread: {err}");
		}
	}

	pub fn try_recv(&self) -> Result<Action, TryRecvError> {
		self.rx.try_recv()
	}

	/// Number of effects still executing.
	pub fn pending(&self) -> usize {
		self.pending.load(Ordering::Acquire)
	}
}

fn thread_name(effect: &Effect) -> &'static str {
	match effect {
		Effect::Search { .. } => "pinmap-search",
		Effect::Directions { .. } => "pinmap-directions",
		Effect::LookAround { .. } => "pinmap-look-around",
		Effect::OpenExternally { .. } => "pinmap-open",
	}
}

/// Run one effect to completion.
///
/// Service failures are logged and replaced by an empty answer; the map
/// treats them the same as "nothing found".
pub(crate) fn run_effect(services: &Services, effect: Effect) -> Option<Action> {
	match effect {
		Effect::Search { id, query, region } => {
			let results = services.search.search(&query, &region).unwrap_or_else(|err| {
				log::warn!("place search for {query:?} failed: {err}");
				Vec::new()
			});
			log::info!("search {query:?} found {} places", results.len());
			Some(Action::SearchCompleted { id, results })
		}
		Effect::Directions {
			id,
			origin,
			destination,
		} => {
			let route = match services.directions.routes(origin, &destination) {
				Ok(routes) => routes.into_iter().next(),
				Err(err) => {
					log::warn!("directions to {} failed: {err}", destination.id);
					None
				}
			};
			match &route {
				Some(route) => log::info!("route to {}: {}", destination.label(), route.summary()),
				None => log::info!("no route to {}", destination.label()),
			}
			Some(Action::DirectionsCompleted { id, route })
		}
		Effect::LookAround { id, place } => {
			let scene = services.look_around.scene(&place).unwrap_or_else(|err| {
				log::warn!("look-around for {} failed: {err}", place.id);
				None
			});
			Some(Action::LookAroundCompleted { id, scene })
		}
		Effect::OpenExternally { place } => {
			if let Err(err) = services.external.open(&place) {
				log::warn!("could not open {} externally: {err}", place.id);
			}
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::{Duration, Instant};

	use pinmap_core::{
		Coordinate, Directions, ExternalMaps, LookAround, LookAroundScene, PlaceResult,
		PlaceSearch, Region, Route, ServiceError, default_coordinate, default_region,
	};

	use super::*;

	fn cafe() -> PlaceResult {
		PlaceResult::new("node/1", "Cafe A", Coordinate::new(25.765, -80.19))
	}

	struct FixedSearch(Result<Vec<PlaceResult>, ServiceError>);

	impl PlaceSearch for FixedSearch {
		fn search(&self, _query: &str, _region: &Region) -> Result<Vec<PlaceResult>, ServiceError> {
			self.0.clone()
		}
	}

	struct FixedDirections(Result<Vec<Route>, ServiceError>);

	impl Directions for FixedDirections {
		fn routes(&self, _origin: Coordinate, _destination: &PlaceResult) -> Result<Vec<Route>, ServiceError> {
			self.0.clone()
		}
	}

	struct FixedLookAround(Result<Option<LookAroundScene>, ServiceError>);

	impl LookAround for FixedLookAround {
		fn scene(&self, _place: &PlaceResult) -> Result<Option<LookAroundScene>, ServiceError> {
			self.0.clone()
		}
	}

	#[derive(Default)]
	struct RecordingMaps(Mutex<Vec<String>>);

	impl ExternalMaps for RecordingMaps {
		fn open(&self, place: &PlaceResult) -> Result<(), ServiceError> {
			self.0.lock().unwrap().push(place.id.clone());
			Ok(())
		}
	}

	fn failing() -> ServiceError {
		ServiceError::Transport("connection refused".into())
	}

	fn services(ok: bool) -> (Services, Arc<RecordingMaps>) {
		let maps = Arc::new(RecordingMaps::default());
		let route = Route::new(
			vec![default_coordinate(), cafe().coordinate],
			1_000.0,
			Duration::from_secs(120),
		);
		let services = if ok {
			Services {
				search: Arc::new(FixedSearch(Ok(vec![cafe()]))),
				directions: Arc::new(FixedDirections(Ok(vec![route.clone(), route]))),
				look_around: Arc::new(FixedLookAround(Ok(None))),
				external: maps.clone(),
			}
		} else {
			Services {
				search: Arc::new(FixedSearch(Err(failing()))),
				directions: Arc::new(FixedDirections(Err(failing()))),
				look_around: Arc::new(FixedLookAround(Err(failing()))),
				external: maps.clone(),
			}
		};
		(services, maps)
	}

	#[test]
	fn failures_become_empty_completions() {
		let (services, _) = services(false);
		let search = run_effect(
			&services,
			Effect::Search {
				id: 3,
				query: "Coffee Shop".into(),
				region: default_region(),
			},
		);
		assert_eq!(
			search,
			Some(Action::SearchCompleted {
				id: 3,
				results: Vec::new(),
			})
		);

		let directions = run_effect(
			&services,
			Effect::Directions {
				id: 4,
				origin: default_coordinate(),
				destination: cafe(),
			},
		);
		assert_eq!(directions, Some(Action::DirectionsCompleted { id: 4, route: None }));

		let scene = run_effect(&services, Effect::LookAround { id: 5, place: cafe() });
		assert_eq!(scene, Some(Action::LookAroundCompleted { id: 5, scene: None }));
	}

	#[test]
	fn only_first_route_is_kept() {
		let (services, _) = services(true);
		let action = run_effect(
			&services,
			Effect::Directions {
				id: 1,
				origin: default_coordinate(),
				destination: cafe(),
			},
		);
		match action {
			Some(Action::DirectionsCompleted { id: 1, route: Some(route) }) => {
				assert_eq!(route.distance_meters, 1_000.0);
			}
			other => panic!("unexpected completion {other:?}"),
		}
	}

	#[test]
	fn open_externally_has_no_completion() {
		let (services, maps) = services(true);
		assert!(run_effect(&services, Effect::OpenExternally { place: cafe() }).is_none());
		assert_eq!(*maps.0.lock().unwrap(), ["node/1"]);
	}

	#[test]
	fn dispatched_effects_report_back_over_the_channel() {
		let (services, _) = services(true);
		let dispatcher = ServiceDispatcher::new(services);
		dispatcher.dispatch(Effect::Search {
			id: 9,
			query: "Coffee Shop".into(),
			region: default_region(),
		});

		let deadline = Instant::now() + Duration::from_secs(2);
		let action = loop {
			match dispatcher.try_recv() {
				Ok(action) => break action,
				Err(TryRecvError::Empty) if Instant::now() < deadline => {
					thread::sleep(Duration::from_millis(5));
				}
				Err(err) => panic!("no completion received: {err}"),
			}
		};
		assert_eq!(
			action,
			Action::SearchCompleted {
				id: 9,
				results: vec![cafe()],
			}
		);
	}
}
