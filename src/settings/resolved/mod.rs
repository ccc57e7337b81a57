use log::LevelFilter;

use pinmap::providers::ProviderConfig;
use pinmap_core::{Coordinate, GeoAnchor};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub user_location: Coordinate,
	pub span_meters: f64,
	pub providers: ProviderConfig,
	pub theme_name: String,
	pub initial_query: Option<String>,
	pub show_logs: bool,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// The user location and the region around it.
	pub fn anchor(&self) -> GeoAnchor {
		GeoAnchor::new(self.user_location, self.span_meters)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
