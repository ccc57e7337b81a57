use reqwest::blocking::Client;
use serde::Deserialize;

use pinmap_core::{Coordinate, PlaceResult, PlaceSearch, Region, ServiceError};

use super::{read_body, trim_base};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Free-text search against a Nominatim instance, bounded to the region.
pub struct NominatimSearch {
	client: Client,
	base_url: String,
	limit: usize,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
	place_id: u64,
	osm_type: Option<String>,
	osm_id: Option<u64>,
	lat: String,
	lon: String,
	name: Option<String>,
	display_name: Option<String>,
	category: Option<String>,
}

impl NominatimSearch {
	pub fn new(client: Client, base_url: &str, limit: usize) -> Self {
		Self {
			client,
			base_url: trim_base(base_url),
			limit,
		}
	}
}

impl PlaceSearch for NominatimSearch {
	fn search(&self, query: &str, region: &Region) -> Result<Vec<PlaceResult>, ServiceError> {
		let bounds = region.bounds();
		let viewbox = format!(
			"{},{},{},{}",
			bounds.south_west.longitude,
			bounds.north_east.latitude,
			bounds.north_east.longitude,
			bounds.south_west.latitude
		);
		let limit = self.limit.to_string();
		log::debug!("nominatim search for {query:?} within {viewbox}");

		let response = self
			.client
			.get(format!("{}/search", self.base_url))
			.query(&[
				("q", query),
				("format", "jsonv2"),
				("viewbox", viewbox.as_str()),
				("bounded", "1"),
				("limit", limit.as_str()),
			])
			.send()
			.map_err(ServiceError::transport)?;

		parse_places(&read_body(response)?)
	}
}

fn parse_places(body: &str) -> Result<Vec<PlaceResult>, ServiceError> {
	let places: Vec<NominatimPlace> = serde_json::from_str(body).map_err(ServiceError::decode)?;
	places.into_iter().map(into_result).collect()
}

fn into_result(place: NominatimPlace) -> Result<PlaceResult, ServiceError> {
	let latitude = place
		.lat
		.parse::<f64>()
		.map_err(|err| ServiceError::decode(format!("bad latitude {:?}: {err}", place.lat)))?;
	let longitude = place
		.lon
		.parse::<f64>()
		.map_err(|err| ServiceError::decode(format!("bad longitude {:?}: {err}", place.lon)))?;

	let id = match (place.osm_type, place.osm_id) {
		(Some(kind), Some(osm_id)) => format!("{kind}/{osm_id}"),
		_ => format!("place/{}", place.place_id),
	};

	Ok(PlaceResult {
		id,
		name: place.name.filter(|name| !name.is_empty()),
		description: place.display_name.filter(|text| !text.is_empty()),
		coordinate: Coordinate::new(latitude, longitude),
		category: place.category,
	})
}
