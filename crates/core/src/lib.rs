//! Domain core for the `pinmap` terminal map.
//!
//! This crate holds no UI and performs no I/O. It provides the geographic
//! defaults the map is anchored to, the values exchanged with external
//! services, the service contracts themselves, and the [`MapScreen`] state
//! machine that turns user actions into effects.

pub mod geo;
pub mod place;
pub mod screen;
pub mod services;

pub use geo::{
	CameraPosition, Coordinate, CoordinateSpan, GeoAnchor, MapRect, Region, default_coordinate,
	default_region,
};
pub use place::{LookAroundScene, PlaceResult, Route};
pub use screen::{
	Action, DetailsPanel, Effect, MapScreen, PanDirection, PanelCommand, Phase, PreviewState, Zoom,
};
pub use services::{Directions, ExternalMaps, LookAround, PlaceSearch, ServiceError};
