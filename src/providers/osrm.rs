use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use pinmap_core::{Coordinate, Directions, PlaceResult, Route, ServiceError};

use super::{trim_base, truncate};

pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// Driving directions from an OSRM server.
pub struct OsrmDirections {
	client: Client,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
	code: String,
	message: Option<String>,
	#[serde(default)]
	routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
	distance: f64,
	duration: f64,
	geometry: OsrmGeometry,
}

/// GeoJSON line string; positions are `[longitude, latitude]`.
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
	coordinates: Vec<[f64; 2]>,
}

impl OsrmDirections {
	pub fn new(client: Client, base_url: &str) -> Self {
		Self {
			client,
			base_url: trim_base(base_url),
		}
	}
}

impl Directions for OsrmDirections {
	fn routes(&self, origin: Coordinate, destination: &PlaceResult) -> Result<Vec<Route>, ServiceError> {
		let target = destination.coordinate;
		let url = format!(
			"{}/route/v1/driving/{},{};{},{}",
			self.base_url, origin.longitude, origin.latitude, target.longitude, target.latitude
		);
		log::debug!("osrm route request {url}");

		let response = self
			.client
			.get(&url)
			.query(&[
				("overview", "full"),
				("geometries", "geojson"),
				("alternatives", "true"),
			])
			.send()
			.map_err(ServiceError::transport)?;

		// OSRM reports "no route" as a 400 with a JSON body, so the body is
		// inspected before the status.
		let status = response.status();
		let body = response.text().map_err(ServiceError::transport)?;
		parse_routes(status.as_u16(), &body)
	}
}

fn parse_routes(status: u16, body: &str) -> Result<Vec<Route>, ServiceError> {
	let parsed: OsrmResponse = match serde_json::from_str(body) {
		Ok(parsed) => parsed,
		Err(_) if status >= 400 => {
			return Err(ServiceError::Status {
				code: status,
				message: truncate(body),
			});
		}
		Err(err) => return Err(ServiceError::decode(err)),
	};

	match parsed.code.as_str() {
		"Ok" => Ok(parsed.routes.into_iter().map(into_route).collect()),
		"NoRoute" | "NoSegment" => Ok(Vec::new()),
		other => Err(ServiceError::Status {
			code: status,
			message: parsed.message.unwrap_or_else(|| other.to_string()),
		}),
	}
}

fn into_route(route: OsrmRoute) -> Route {
	let polyline = route
		.geometry
		.coordinates
		.into_iter()
		.map(|[longitude, latitude]| Coordinate::new(latitude, longitude))
		.collect();
	Route::new(
		polyline,
		route.distance,
		Duration::from_secs_f64(route.duration.max(0.0)),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_routes_in_order_with_swapped_axes() {
		let body = r#"{
			"code": "Ok",
			"routes": [
				{
					"distance": 4200.5,
					"duration": 600.0,
					"geometry": {"type": "LineString", "coordinates": [[-80.1959, 25.7602], [-80.21, 25.78]]}
				},
				{
					"distance": 5000.0,
					"duration": 720.0,
					"geometry": {"type": "LineString", "coordinates": [[-80.1959, 25.7602], [-80.20, 25.77], [-80.21, 25.78]]}
				}
			]
		}"#;
		let routes = parse_routes(200, body).unwrap();
		assert_eq!(routes.len(), 2);
		assert_eq!(routes[0].polyline[0], Coordinate::new(25.7602, -80.1959));
		assert_eq!(routes[0].expected_travel_time, Duration::from_secs(600));
		assert_eq!(routes[1].polyline.len(), 3);
	}

	#[test]
	fn no_route_is_an_empty_list() {
		let body = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
		assert!(parse_routes(400, body).unwrap().is_empty());
	}

	#[test]
	fn other_codes_are_status_errors() {
		let body = r#"{"code": "InvalidQuery", "message": "Query string malformed"}"#;
		assert_eq!(
			parse_routes(400, body),
			Err(ServiceError::Status {
				code: 400,
				message: "Query string malformed".into(),
			})
		);
	}

	#[test]
	fn non_json_error_pages_keep_status() {
		let result = parse_routes(502, "<html>Bad Gateway</html>");
		assert!(matches!(result, Err(ServiceError::Status { code: 502, .. })));
	}
}
