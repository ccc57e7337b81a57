//! Geographic primitives and the fixed defaults the map is anchored to.
//!
//! Everything here is pure: coordinates, spans and rectangles are plain
//! values expressed in degrees, and the defaults never change at runtime.

use serde::{Deserialize, Serialize};

/// Approximate length of one degree of latitude in meters.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Latitude/longitude pair for the fixed user location.
const DEFAULT_LATITUDE: f64 = 25.7602;
const DEFAULT_LONGITUDE: f64 = -80.1959;

/// Span used for the initial camera and for scoping searches.
pub const DEFAULT_SPAN_METERS: f64 = 10_000.0;

/// A point on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
	pub latitude: f64,
	pub longitude: f64,
}

impl Coordinate {
	pub const fn new(latitude: f64, longitude: f64) -> Self {
		Self {
			latitude,
			longitude,
		}
	}

	/// Whether both components lie within their valid ranges.
	pub fn is_valid(&self) -> bool {
		(-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
	}
}

/// Latitudinal and longitudinal extent of a region, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
	pub latitude_delta: f64,
	pub longitude_delta: f64,
}

/// A center coordinate plus spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
	pub center: Coordinate,
	pub span: CoordinateSpan,
}

impl Region {
	/// Build a region from spans expressed in meters.
	///
	/// Longitude degrees shrink with the cosine of the latitude; near the
	/// poles the cosine is clamped so the span stays finite.
	pub fn from_meters(center: Coordinate, latitudinal_meters: f64, longitudinal_meters: f64) -> Self {
		let cos_lat = center.latitude.to_radians().cos().abs().max(1e-6);
		Self {
			center,
			span: CoordinateSpan {
				latitude_delta: latitudinal_meters / METERS_PER_DEGREE,
				longitude_delta: longitudinal_meters / (METERS_PER_DEGREE * cos_lat),
			},
		}
	}

	/// Bounding rectangle covered by this region.
	pub fn bounds(&self) -> MapRect {
		let half_lat = self.span.latitude_delta / 2.0;
		let half_lon = self.span.longitude_delta / 2.0;
		MapRect {
			south_west: Coordinate::new(
				self.center.latitude - half_lat,
				self.center.longitude - half_lon,
			),
			north_east: Coordinate::new(
				self.center.latitude + half_lat,
				self.center.longitude + half_lon,
			),
		}
	}

	/// Scale both spans by `factor` around the same center.
	pub fn scaled(&self, factor: f64) -> Self {
		Self {
			center: self.center,
			span: CoordinateSpan {
				latitude_delta: (self.span.latitude_delta * factor).min(180.0),
				longitude_delta: (self.span.longitude_delta * factor).min(360.0),
			},
		}
	}

	/// Move the center by fractions of the current spans.
	pub fn shifted(&self, latitude_fraction: f64, longitude_fraction: f64) -> Self {
		let latitude = (self.center.latitude + self.span.latitude_delta * latitude_fraction)
			.clamp(-90.0, 90.0);
		let mut longitude = self.center.longitude + self.span.longitude_delta * longitude_fraction;
		if longitude > 180.0 {
			longitude -= 360.0;
		} else if longitude < -180.0 {
			longitude += 360.0;
		}
		Self {
			center: Coordinate::new(latitude, longitude),
			span: self.span,
		}
	}
}

/// Axis-aligned bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRect {
	pub south_west: Coordinate,
	pub north_east: Coordinate,
}

impl MapRect {
	/// Smallest rectangle containing every coordinate, or `None` when empty.
	pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
		let mut points = points.into_iter();
		let first = points.next()?;
		let mut rect = Self {
			south_west: *first,
			north_east: *first,
		};
		for point in points {
			rect.south_west.latitude = rect.south_west.latitude.min(point.latitude);
			rect.south_west.longitude = rect.south_west.longitude.min(point.longitude);
			rect.north_east.latitude = rect.north_east.latitude.max(point.latitude);
			rect.north_east.longitude = rect.north_east.longitude.max(point.longitude);
		}
		Some(rect)
	}

	pub fn center(&self) -> Coordinate {
		Coordinate::new(
			(self.south_west.latitude + self.north_east.latitude) / 2.0,
			(self.south_west.longitude + self.north_east.longitude) / 2.0,
		)
	}

	pub fn contains(&self, point: &Coordinate) -> bool {
		(self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
			&& (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
	}

	/// Equivalent region view with the same center and extent.
	pub fn to_region(&self) -> Region {
		Region {
			center: self.center(),
			span: CoordinateSpan {
				latitude_delta: self.north_east.latitude - self.south_west.latitude,
				longitude_delta: self.north_east.longitude - self.south_west.longitude,
			},
		}
	}

	/// Grow the rectangle by `fraction` of its extent on every side.
	///
	/// Degenerate rectangles (a single point) get a minimum margin so a
	/// camera fitted to them still shows something.
	pub fn padded(&self, fraction: f64) -> Self {
		const MIN_MARGIN_DEGREES: f64 = 0.001;
		let lat_margin = ((self.north_east.latitude - self.south_west.latitude) * fraction)
			.max(MIN_MARGIN_DEGREES);
		let lon_margin = ((self.north_east.longitude - self.south_west.longitude) * fraction)
			.max(MIN_MARGIN_DEGREES);
		Self {
			south_west: Coordinate::new(
				self.south_west.latitude - lat_margin,
				self.south_west.longitude - lon_margin,
			),
			north_east: Coordinate::new(
				self.north_east.latitude + lat_margin,
				self.north_east.longitude + lon_margin,
			),
		}
	}
}

/// What the camera is framing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraPosition {
	Region(Region),
	Rect(MapRect),
}

impl CameraPosition {
	/// Rectangle visible through the camera.
	pub fn bounds(&self) -> MapRect {
		match self {
			Self::Region(region) => region.bounds(),
			Self::Rect(rect) => *rect,
		}
	}

	pub fn to_region(&self) -> Region {
		match self {
			Self::Region(region) => *region,
			Self::Rect(rect) => rect.to_region(),
		}
	}
}

/// The fixed user location.
pub fn default_coordinate() -> Coordinate {
	Coordinate::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
}

/// Region around [`default_coordinate`] spanning 10 km in each direction.
pub fn default_region() -> Region {
	Region::from_meters(default_coordinate(), DEFAULT_SPAN_METERS, DEFAULT_SPAN_METERS)
}

/// Where the map is anchored: the user location plus the region used for the
/// initial camera and for scoping searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoAnchor {
	pub user_location: Coordinate,
	pub region: Region,
}

impl GeoAnchor {
	pub fn new(user_location: Coordinate, span_meters: f64) -> Self {
		Self {
			user_location,
			region: Region::from_meters(user_location, span_meters, span_meters),
		}
	}
}

impl Default for GeoAnchor {
	fn default() -> Self {
		Self {
			user_location: default_coordinate(),
			region: default_region(),
		}
	}
}
