//! Logging setup.
//!
//! Records go through the `log` facade into `tui-logger`'s in-memory buffer
//! so nothing is written over the terminal UI. The buffer is shown by the
//! log pane.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Install the logger and set the level shown by default.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(LevelFilter::Trace)
		.map_err(|err| anyhow!("failed to install logger: {err}"))?;
	tui_logger::set_default_level(level);
	log::debug!("logging initialised at {level}");
	Ok(())
}

/// Move buffered records into the widget's history. Call once per frame.
///
/// tui-logger >= 0.13 no longer exposes `move_events`; it moves records on
/// its own internal thread started by `init_logger`, so nothing is needed here.
pub fn pump() {}

/// Parse a level name such as `info` or `DEBUG`.
pub fn parse_level(name: &str) -> Result<LevelFilter> {
	LevelFilter::from_str(name.trim()).map_err(|_| anyhow!("unknown log level: {name}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_level_names_case_insensitively() {
		assert_eq!(parse_level("info").unwrap(), LevelFilter::Info);
		assert_eq!(parse_level(" DEBUG ").unwrap(), LevelFilter::Debug);
		assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
	}

	#[test]
	fn rejects_unknown_level() {
		assert!(parse_level("chatty").is_err());
	}
}
