//! HTTP-backed implementations of the map's service contracts.

mod browser;
mod mapillary;
mod nominatim;
mod osrm;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};

use pinmap_core::{Directions, ExternalMaps, LookAround, PlaceSearch, ServiceError};

pub use browser::{DEFAULT_EXTERNAL_URL, SystemBrowser};
pub use mapillary::{DEFAULT_MAPILLARY_URL, MapillaryLookAround};
pub use nominatim::{DEFAULT_NOMINATIM_URL, NominatimSearch};
pub use osrm::{DEFAULT_OSRM_URL, OsrmDirections};

/// Longest error body kept in a [`ServiceError::Status`] message.
const MAX_ERROR_BODY: usize = 200;

/// Endpoints and credentials for the external services.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
	pub user_agent: String,
	pub timeout: Duration,
	pub search_url: String,
	pub search_limit: usize,
	pub directions_url: String,
	pub look_around_url: String,
	pub look_around_token: Option<String>,
	pub external_url: String,
}

impl Default for ProviderConfig {
	fn default() -> Self {
		Self {
			user_agent: concat!("pinmap/", env!("CARGO_PKG_VERSION")).to_string(),
			timeout: Duration::from_secs(15),
			search_url: DEFAULT_NOMINATIM_URL.to_string(),
			search_limit: 20,
			directions_url: DEFAULT_OSRM_URL.to_string(),
			look_around_url: DEFAULT_MAPILLARY_URL.to_string(),
			look_around_token: None,
			external_url: DEFAULT_EXTERNAL_URL.to_string(),
		}
	}
}

/// The set of services the map talks to.
#[derive(Clone)]
pub struct Services {
	pub search: Arc<dyn PlaceSearch>,
	pub directions: Arc<dyn Directions>,
	pub look_around: Arc<dyn LookAround>,
	pub external: Arc<dyn ExternalMaps>,
}

impl Services {
	/// Build the HTTP providers described by `config`.
	pub fn from_config(config: &ProviderConfig) -> Result<Self> {
		let client = Client::builder()
			.user_agent(config.user_agent.clone())
			.timeout(config.timeout)
			.build()
			.context("failed to build HTTP client")?;

		Ok(Self {
			search: Arc::new(NominatimSearch::new(
				client.clone(),
				&config.search_url,
				config.search_limit,
			)),
			directions: Arc::new(OsrmDirections::new(client.clone(), &config.directions_url)),
			look_around: Arc::new(MapillaryLookAround::new(
				client,
				&config.look_around_url,
				config.look_around_token.clone(),
			)),
			external: Arc::new(SystemBrowser::new(&config.external_url)),
		})
	}
}

/// Read the body of a response, turning non-success statuses into errors.
fn read_body(response: Response) -> Result<String, ServiceError> {
	let status = response.status();
	let body = response.text().map_err(ServiceError::transport)?;
	if !status.is_success() {
		return Err(ServiceError::Status {
			code: status.as_u16(),
			message: truncate(&body),
		});
	}
	Ok(body)
}

fn truncate(body: &str) -> String {
	match body.char_indices().nth(MAX_ERROR_BODY) {
		Some((index, _)) => format!("{}…", &body[..index]),
		None => body.to_string(),
	}
}

fn trim_base(url: &str) -> String {
	url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn long_bodies_are_truncated() {
		let body = "x".repeat(MAX_ERROR_BODY + 50);
		let truncated = truncate(&body);
		assert_eq!(truncated.chars().count(), MAX_ERROR_BODY + 1);
		assert!(truncated.ends_with('…'));
		assert_eq!(truncate("short"), "short");
	}

	#[test]
	fn base_urls_lose_trailing_slashes() {
		assert_eq!(trim_base("https://example.org//"), "https://example.org");
	}

	#[test]
	fn services_build_from_default_config() {
		assert!(Services::from_config(&ProviderConfig::default()).is_ok());
	}
}
