use anyhow::Result;
use pinmap::{MapUi, SessionOutcome, Services};

use crate::settings::ResolvedConfig;

/// Builds the map UI from resolved settings and runs it.
pub(crate) struct MapWorkflow {
	map_ui: MapUi,
}

impl MapWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let services = Services::from_config(&config.providers)?;
		let mut map_ui = MapUi::new(services)
			.with_anchor(config.anchor())
			.with_theme_name(&config.theme_name)?
			.with_log_pane(config.show_logs);
		if let Some(query) = config.initial_query {
			map_ui = map_ui.with_initial_query(query);
		}
		Ok(Self { map_ui })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.map_ui.run()
	}
}
