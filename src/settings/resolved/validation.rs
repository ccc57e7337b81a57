use super::{ConfigError, ConfigSources, ResolvedConfig};

const MAX_SEARCH_LIMIT: usize = 50;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let location = config.user_location;
	if !(-90.0..=90.0).contains(&location.latitude) {
		return Err(ConfigError::invalid(
			"location.latitude",
			location.latitude.to_string(),
			sources.source_for("location.latitude"),
			"must be between -90 and 90",
		));
	}

	if !(-180.0..=180.0).contains(&location.longitude) {
		return Err(ConfigError::invalid(
			"location.longitude",
			location.longitude.to_string(),
			sources.source_for("location.longitude"),
			"must be between -180 and 180",
		));
	}

	if !config.span_meters.is_finite() || config.span_meters <= 0.0 {
		return Err(ConfigError::invalid(
			"location.span_meters",
			config.span_meters.to_string(),
			sources.source_for("location.span_meters"),
			"must be greater than zero",
		));
	}

	let providers = &config.providers;
	if providers.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"services.timeout_secs",
			"0",
			sources.source_for("services.timeout_secs"),
			"must be greater than zero",
		));
	}

	if !(1..=MAX_SEARCH_LIMIT).contains(&providers.search_limit) {
		return Err(ConfigError::invalid(
			"services.search_limit",
			providers.search_limit.to_string(),
			sources.source_for("services.search_limit"),
			format!("must be between 1 and {MAX_SEARCH_LIMIT}"),
		));
	}

	for (key, url) in [
		("services.search_url", &providers.search_url),
		("services.directions_url", &providers.directions_url),
	] {
		if !url.starts_with("http://") && !url.starts_with("https://") {
			return Err(ConfigError::invalid(
				key,
				url.clone(),
				sources.source_for(key),
				"must be an http or https URL",
			));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use log::LevelFilter;

	use pinmap::providers::ProviderConfig;
	use pinmap_core::default_coordinate;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			user_location: default_coordinate(),
			span_meters: 10_000.0,
			providers: ProviderConfig::default(),
			theme_name: "slate".into(),
			initial_query: None,
			show_logs: false,
			log_level: LevelFilter::Info,
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_out_of_range_latitude() {
		let mut config = config();
		config.user_location.latitude = 91.0;
		let mut sources = ConfigSources::default();
		sources.record("location.latitude", Some(SettingSource::CliFlag("--latitude")));

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "location.latitude");
		let message = err.to_string();
		assert!(message.contains("value: 91"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_span() {
		let mut config = config();
		config.span_meters = 0.0;
		let sources = ConfigSources::default();

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "location.span_meters");
		assert!(err.to_string().contains("configuration key"));
	}

	#[test]
	fn validation_rejects_search_limit_and_bad_urls() {
		let mut config = config();
		config.providers.search_limit = 0;
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "services.search_limit");

		let mut config = self::config();
		config.providers.directions_url = "router.local".into();
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "services.directions_url");
	}
}
