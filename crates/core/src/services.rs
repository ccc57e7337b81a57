//! Capability contracts for the external services the map consumes.
//!
//! Implementations are blocking; callers run them off the UI thread.

use thiserror::Error;

use crate::geo::{Coordinate, Region};
use crate::place::{LookAroundScene, PlaceResult, Route};

/// Failure reported by an external service.
///
/// The map never distinguishes these from "no results"; the variants exist so
/// the failure can be logged with a useful message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
	#[error("request failed: {0}")]
	Transport(String),

	#[error("service responded with status {code}: {message}")]
	Status { code: u16, message: String },

	#[error("failed to decode response: {0}")]
	Decode(String),

	#[error("{service} is not configured")]
	NotConfigured { service: &'static str },

	#[error("failed to launch external handler: {0}")]
	Launch(String),
}

impl ServiceError {
	pub fn transport(err: impl std::fmt::Display) -> Self {
		Self::Transport(err.to_string())
	}

	pub fn decode(err: impl std::fmt::Display) -> Self {
		Self::Decode(err.to_string())
	}
}

/// Free-text place search scoped to a region.
pub trait PlaceSearch: Send + Sync {
	fn search(&self, query: &str, region: &Region) -> Result<Vec<PlaceResult>, ServiceError>;
}

/// Driving directions between the user location and a place.
pub trait Directions: Send + Sync {
	/// Candidate routes, best first. Callers only use the first one.
	fn routes(&self, origin: Coordinate, destination: &PlaceResult) -> Result<Vec<Route>, ServiceError>;
}

/// Street-level scene lookup for a place.
pub trait LookAround: Send + Sync {
	fn scene(&self, place: &PlaceResult) -> Result<Option<LookAroundScene>, ServiceError>;
}

/// Hand a place off to the host's own map application.
pub trait ExternalMaps: Send + Sync {
	fn open(&self, place: &PlaceResult) -> Result<(), ServiceError>;
}
