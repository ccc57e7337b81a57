use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;

use pinmap::logging;
use pinmap::providers::ProviderConfig;
use pinmap::ui::theme;
use pinmap_core::geo::DEFAULT_SPAN_METERS;
use pinmap_core::{Coordinate, default_coordinate};

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

const DEFAULT_THEME: &str = "slate";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	location: LocationSection,
	services: ServicesSection,
	ui: UiSection,
}

/// Where the map is anchored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LocationSection {
	latitude: Option<f64>,
	longitude: Option<f64>,
	span_meters: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ServicesSection {
	user_agent: Option<String>,
	timeout_secs: Option<u64>,
	search_url: Option<String>,
	search_limit: Option<usize>,
	directions_url: Option<String>,
	look_around_url: Option<String>,
	look_around_token: Option<String>,
	external_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	show_logs: Option<bool>,
	log_level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.latitude {
			self.location.latitude = Some(value);
		}
		if let Some(value) = cli.longitude {
			self.location.longitude = Some(value);
		}
		if let Some(value) = cli.span_meters {
			self.location.span_meters = Some(value);
		}
		if let Some(value) = cli.search_url.clone() {
			self.services.search_url = Some(value);
		}
		if let Some(value) = cli.directions_url.clone() {
			self.services.directions_url = Some(value);
		}
		if let Some(value) = cli.look_around_token.clone() {
			self.services.look_around_token = Some(value);
		}
		if let Some(value) = cli.theme.clone() {
			self.ui.theme = Some(value);
		}
		if let Some(value) = cli.query.clone() {
			self.ui.initial_query = Some(value);
		}
		if let Some(value) = cli.show_logs {
			self.ui.show_logs = Some(value);
		}
		if let Some(value) = cli.log_level.clone() {
			self.ui.log_level = Some(value);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let location = &self.location;
		let services = &self.services;
		let ui = &self.ui;
		let tracked = [
			("location.latitude", cli.latitude.is_some(), location.latitude.is_some(), "--latitude"),
			("location.longitude", cli.longitude.is_some(), location.longitude.is_some(), "--longitude"),
			("location.span_meters", cli.span_meters.is_some(), location.span_meters.is_some(), "--span-meters"),
			("services.timeout_secs", false, services.timeout_secs.is_some(), ""),
			("services.search_limit", false, services.search_limit.is_some(), ""),
			("services.search_url", cli.search_url.is_some(), services.search_url.is_some(), "--search-url"),
			("services.directions_url", cli.directions_url.is_some(), services.directions_url.is_some(), "--directions-url"),
			("ui.theme", cli.theme.is_some(), ui.theme.is_some(), "--theme"),
			("ui.log_level", cli.log_level.is_some(), ui.log_level.is_some(), "--log-level"),
		];
		let mut sources = ConfigSources::default();
		for (key, cli_present, value_present, flag) in tracked {
			sources.record(key, detect_source(cli_present, value_present, key, flag));
		}

		let defaults = ProviderConfig::default();
		let fallback = default_coordinate();
		let services = self.services;
		let providers = ProviderConfig {
			user_agent: services.user_agent.unwrap_or(defaults.user_agent),
			timeout: services
				.timeout_secs
				.map(Duration::from_secs)
				.unwrap_or(defaults.timeout),
			search_url: services.search_url.unwrap_or(defaults.search_url),
			search_limit: services.search_limit.unwrap_or(defaults.search_limit),
			directions_url: services.directions_url.unwrap_or(defaults.directions_url),
			look_around_url: services.look_around_url.unwrap_or(defaults.look_around_url),
			look_around_token: services
				.look_around_token
				.filter(|token| !token.trim().is_empty()),
			external_url: services.external_url.unwrap_or(defaults.external_url),
		};

		let theme_name = self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		if theme::by_name(&theme_name).is_none() {
			let known = theme::names().collect::<Vec<_>>().join(", ");
			return Err(Error::new(ConfigError::invalid(
				"ui.theme",
				theme_name,
				sources.source_for("ui.theme"),
				format!("unknown theme (known: {known})"),
			)));
		}

		let level_name = self
			.ui
			.log_level
			.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
		let log_level = logging::parse_level(&level_name).map_err(|err| {
			Error::new(ConfigError::invalid(
				"ui.log_level",
				level_name.clone(),
				sources.source_for("ui.log_level"),
				err.to_string(),
			))
		})?;

		let config = ResolvedConfig {
			user_location: Coordinate::new(
				self.location.latitude.unwrap_or(fallback.latitude),
				self.location.longitude.unwrap_or(fallback.longitude),
			),
			span_meters: self.location.span_meters.unwrap_or(DEFAULT_SPAN_METERS),
			providers,
			theme_name,
			initial_query: self
				.ui
				.initial_query
				.filter(|query| !query.trim().is_empty()),
			show_logs: self.ui.show_logs.unwrap_or(false),
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	key: &'static str,
	cli_flag: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	let env_var = env_var_for(key);
	if env::var_os(&env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	None
}

/// `location.span_meters` is read from `PINMAP__LOCATION__SPAN_METERS`.
fn env_var_for(key: &str) -> String {
	format!("PINMAP__{}", key.replace('.', "__").to_ascii_uppercase())
}
