//! Values returned by the external services.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geo::{Coordinate, MapRect};

/// One candidate location returned by a text search.
///
/// Results are immutable and compared by value: selection and route
/// destination matching both rely on `PartialEq`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
	/// Provider-specific identifier, e.g. `node/123456`.
	pub id: String,
	pub name: Option<String>,
	/// Address line or other free-form description of the place.
	pub description: Option<String>,
	pub coordinate: Coordinate,
	pub category: Option<String>,
}

impl PlaceResult {
	pub fn new(id: impl Into<String>, name: impl Into<String>, coordinate: Coordinate) -> Self {
		Self {
			id: id.into(),
			name: Some(name.into()),
			description: None,
			coordinate,
			category: None,
		}
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = Some(category.into());
		self
	}

	/// Name used for pins; empty when the provider returned none.
	pub fn label(&self) -> &str {
		self.name.as_deref().unwrap_or("")
	}
}

/// A computed driving path between two places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
	pub polyline: Vec<Coordinate>,
	pub distance_meters: f64,
	pub expected_travel_time: Duration,
}

impl Route {
	pub fn new(polyline: Vec<Coordinate>, distance_meters: f64, expected_travel_time: Duration) -> Self {
		Self {
			polyline,
			distance_meters,
			expected_travel_time,
		}
	}

	/// Bounding rectangle of the polyline, `None` for an empty path.
	pub fn bounding_rect(&self) -> Option<MapRect> {
		MapRect::enclosing(&self.polyline)
	}

	/// Short human readable summary such as `12.3 km · 18 min`.
	pub fn summary(&self) -> String {
		let minutes = (self.expected_travel_time.as_secs_f64() / 60.0).round() as u64;
		let travel = if minutes >= 60 {
			format!("{} h {} min", minutes / 60, minutes % 60)
		} else {
			format!("{minutes} min")
		};
		format!("{:.1} km · {travel}", self.distance_meters / 1000.0)
	}
}

/// Street-level imagery available near a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookAroundScene {
	pub image_id: String,
	/// Capture time in milliseconds since the Unix epoch.
	pub captured_at: Option<i64>,
	pub compass_angle: Option<f64>,
	pub thumbnail_url: Option<String>,
	pub coordinate: Option<Coordinate>,
}
