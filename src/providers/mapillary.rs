use reqwest::blocking::Client;
use serde::Deserialize;

use pinmap_core::{Coordinate, LookAround, LookAroundScene, PlaceResult, Region, ServiceError};

use super::{read_body, trim_base};

pub const DEFAULT_MAPILLARY_URL: &str = "https://graph.mapillary.com";

/// Side of the square searched for imagery around a place.
const SEARCH_BOX_METERS: f64 = 100.0;
const IMAGE_FIELDS: &str = "id,captured_at,compass_angle,thumb_1024_url,computed_geometry";

/// Street-level imagery from the Mapillary graph API.
pub struct MapillaryLookAround {
	client: Client,
	base_url: String,
	token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
	#[serde(default)]
	data: Vec<MapillaryImage>,
}

#[derive(Debug, Deserialize)]
struct MapillaryImage {
	id: String,
	captured_at: Option<i64>,
	compass_angle: Option<f64>,
	thumb_1024_url: Option<String>,
	computed_geometry: Option<PointGeometry>,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
	coordinates: [f64; 2],
}

impl MapillaryLookAround {
	pub fn new(client: Client, base_url: &str, token: Option<String>) -> Self {
		Self {
			client,
			base_url: trim_base(base_url),
			token: token.filter(|token| !token.is_empty()),
		}
	}
}

impl LookAround for MapillaryLookAround {
	fn scene(&self, place: &PlaceResult) -> Result<Option<LookAroundScene>, ServiceError> {
		let token = self
			.token
			.as_deref()
			.ok_or(ServiceError::NotConfigured {
				service: "look-around imagery",
			})?;

		let bounds =
			Region::from_meters(place.coordinate, SEARCH_BOX_METERS, SEARCH_BOX_METERS).bounds();
		let bbox = format!(
			"{},{},{},{}",
			bounds.south_west.longitude,
			bounds.south_west.latitude,
			bounds.north_east.longitude,
			bounds.north_east.latitude
		);
		log::debug!("mapillary image lookup for {} in {bbox}", place.id);

		let response = self
			.client
			.get(format!("{}/images", self.base_url))
			.query(&[
				("access_token", token),
				("fields", IMAGE_FIELDS),
				("bbox", bbox.as_str()),
				("limit", "1"),
			])
			.send()
			.map_err(ServiceError::transport)?;

		parse_scene(&read_body(response)?)
	}
}

fn parse_scene(body: &str) -> Result<Option<LookAroundScene>, ServiceError> {
	let response: ImagesResponse = serde_json::from_str(body).map_err(ServiceError::decode)?;
	Ok(response.data.into_iter().next().map(|image| LookAroundScene {
		image_id: image.id,
		captured_at: image.captured_at,
		compass_angle: image.compass_angle,
		thumbnail_url: image.thumb_1024_url,
		coordinate: image
			.computed_geometry
			.map(|geometry| Coordinate::new(geometry.coordinates[1], geometry.coordinates[0])),
	}))
}
