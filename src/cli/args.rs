use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		BoolishValueParser, Styles,
		styling::{AnsiColor, Effects},
	},
};
use pinmap::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("pinmap {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "pinmap",
	version,
	long_version = long_version(),
	about = "Search places on a terminal map, preview them and route to them",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `pinmap` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PINMAP_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Search for a place as soon as the map opens (default: none)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "DEGREES",
		allow_negative_numbers = true,
		help = "Latitude of the user location (default: 25.7602)"
	)]
	pub(crate) latitude: Option<f64>,
	#[arg(
		long,
		value_name = "DEGREES",
		allow_negative_numbers = true,
		help = "Longitude of the user location (default: -80.1959)"
	)]
	pub(crate) longitude: Option<f64>,
	#[arg(
		long = "span-meters",
		value_name = "METERS",
		help = "Size of the initial view and search region (default: 10000)"
	)]
	pub(crate) span_meters: Option<f64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "search-url",
		value_name = "URL",
		help = "Base URL of the Nominatim place search service"
	)]
	pub(crate) search_url: Option<String>,
	#[arg(
		long = "directions-url",
		value_name = "URL",
		help = "Base URL of the OSRM routing service"
	)]
	pub(crate) directions_url: Option<String>,
	#[arg(
		long = "look-around-token",
		value_name = "TOKEN",
		env = "PINMAP_MAPILLARY_TOKEN",
		hide_env_values = true,
		help = "Mapillary access token for street-level previews (default: none)"
	)]
	pub(crate) look_around_token: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Level of records shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "show-logs",
		value_parser = BoolishValueParser::new(),
		help = "Open the log pane at startup (default: disabled)"
	)]
	pub(crate) show_logs: Option<bool>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration and exit (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the session result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> CliArgs {
		let mut matches = cli_command().get_matches_from(args);
		CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
	}

	#[test]
	fn command_supports_custom_styles() {
		let command = cli_command();
		assert!(command.get_about().is_some());
	}

	#[test]
	fn parse_cli_accepts_default_arguments() {
		let parsed = parse(&["pinmap"]);
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.query.is_none());
	}

	#[test]
	fn negative_coordinates_are_values() {
		let parsed = parse(&[
			"pinmap",
			"--latitude",
			"-33.8688",
			"--longitude",
			"151.2093",
			"--show-logs",
			"yes",
			"-o",
			"json",
		]);
		assert_eq!(parsed.latitude, Some(-33.8688));
		assert_eq!(parsed.longitude, Some(151.2093));
		assert_eq!(parsed.show_logs, Some(true));
		assert_eq!(parsed.output, OutputFormat::Json);
	}
}
