use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn file_values_are_layered_under_cli_flags() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("pinmap.toml");
		fs::write(
			&path,
			r#"
[location]
latitude = 40.7128
longitude = -74.006
span_meters = 5000

[services]
search_limit = 5
look_around_token = "abc"

[ui]
theme = "light"
initial_query = "Bagels"
"#,
		)
		.unwrap();

		let cli = CliArgs::parse_from([
			"pinmap",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
			"--query",
			"Pizza",
		]);
		let config = load(&cli).unwrap();

		assert_eq!(config.user_location.latitude, 40.7128);
		assert_eq!(config.span_meters, 5000.0);
		assert_eq!(config.providers.search_limit, 5);
		assert_eq!(config.theme_name, "light");
		assert_eq!(config.initial_query.as_deref(), Some("Pizza"));
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from(["pinmap", "--no-config", "--config", path.to_str().unwrap()]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn invalid_file_value_names_the_key() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("pinmap.toml");
		fs::write(&path, "[location]\nlatitude = 123.0\n").unwrap();

		let cli = CliArgs::parse_from(["pinmap", "--no-config", "--config", path.to_str().unwrap()]);
		let message = load(&cli).unwrap_err().to_string();
		assert!(message.contains("location.latitude"), "{message}");
		assert!(message.contains("configuration key"), "{message}");
	}
}
