//! Terminal map for searching places, previewing them and routing to them.
//!
//! The state machine lives in `pinmap-core`; this crate adds the HTTP
//! providers behind its service traits, the background dispatcher that runs
//! their calls, and the ratatui front end. The root module re-exports what an
//! embedder needs to configure and launch the map.

pub mod app_dirs;
pub mod logging;
pub mod providers;
mod systems;
pub mod ui;

pub use pinmap_core::{
	Action, CameraPosition, Coordinate, GeoAnchor, LookAroundScene, MapScreen, PlaceResult, Route,
	ServiceError, default_coordinate,
};
pub use providers::{ProviderConfig, Services};
pub use ui::{App, MapUi, RouteOutcome, SessionOutcome, Theme};
