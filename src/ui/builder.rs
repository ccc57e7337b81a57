use anyhow::{Result, anyhow};

use pinmap_core::{GeoAnchor, MapScreen};

use super::theme::{self, Theme};
use super::{App, SessionOutcome};
use crate::providers::Services;

/// A small builder for configuring the interactive map before running it.
pub struct MapUi {
	services: Services,
	anchor: GeoAnchor,
	theme: Option<Theme>,
	initial_query: Option<String>,
	show_logs: bool,
}

impl MapUi {
	pub fn new(services: Services) -> Self {
		Self {
			services,
			anchor: GeoAnchor::default(),
			theme: None,
			initial_query: None,
			show_logs: false,
		}
	}

	/// Center the map and the search region on `anchor`.
	pub fn with_anchor(mut self, anchor: GeoAnchor) -> Self {
		self.anchor = anchor;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a built-in theme by name or alias.
	pub fn with_theme_name(self, name: &str) -> Result<Self> {
		let theme = theme::by_name(name).ok_or_else(|| anyhow!("unknown theme: {name}"))?;
		Ok(self.with_theme(theme))
	}

	/// Query searched for as soon as the UI starts.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.initial_query = (!query.trim().is_empty()).then_some(query);
		self
	}

	pub fn with_log_pane(mut self, show: bool) -> Self {
		self.show_logs = show;
		self
	}

	/// Assemble the application without starting the terminal.
	pub fn build(self) -> App<'static> {
		let mut app = App::new(MapScreen::new(self.anchor), self.services);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = &self.initial_query {
			app.set_query(query);
		}
		app.set_show_logs(self.show_logs);
		app
	}

	/// Run the interactive map until the user quits.
	pub fn run(self) -> Result<SessionOutcome> {
		self.build().run()
	}
}

#[cfg(test)]
mod tests {
	use pinmap_core::Coordinate;

	use super::super::state::tests::stub_services;
	use super::*;

	#[test]
	fn build_applies_every_option() {
		let anchor = GeoAnchor::new(Coordinate::new(48.8566, 2.3522), 2_000.0);
		let app = MapUi::new(stub_services())
			.with_anchor(anchor)
			.with_theme_name("light")
			.unwrap()
			.with_initial_query("Boulangerie")
			.with_log_pane(true)
			.build();

		assert_eq!(app.screen().anchor(), &anchor);
		assert_eq!(app.screen().query(), "Boulangerie");
		assert_eq!(app.theme, theme::LIGHT);
		assert!(app.show_logs);
		assert!(!app.screen().has_searched());
	}

	#[test]
	fn unknown_theme_is_rejected() {
		assert!(MapUi::new(stub_services()).with_theme_name("neon").is_err());
	}

	#[test]
	fn blank_initial_query_is_ignored() {
		let app = MapUi::new(stub_services()).with_initial_query("   ").build();
		assert_eq!(app.screen().query(), "");
	}
}
