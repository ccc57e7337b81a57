use std::process::{Command, Stdio};

use pinmap_core::{ExternalMaps, PlaceResult, ServiceError};

/// Page opened for a place; `{lat}` and `{lon}` are substituted.
pub const DEFAULT_EXTERNAL_URL: &str =
	"https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=17/{lat}/{lon}";

/// Opens places in the system browser through the platform opener.
pub struct SystemBrowser {
	url_template: String,
}

impl SystemBrowser {
	pub fn new(url_template: &str) -> Self {
		Self {
			url_template: url_template.to_string(),
		}
	}

	pub fn url_for(&self, place: &PlaceResult) -> String {
		self.url_template
			.replace("{lat}", &format!("{:.6}", place.coordinate.latitude))
			.replace("{lon}", &format!("{:.6}", place.coordinate.longitude))
	}
}

impl ExternalMaps for SystemBrowser {
	fn open(&self, place: &PlaceResult) -> Result<(), ServiceError> {
		let url = self.url_for(place);
		log::info!("opening {url}");
		opener(&url)
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn()
			.map(drop)
			.map_err(|err| ServiceError::Launch(err.to_string()))
	}
}

fn opener(url: &str) -> Command {
	if cfg!(target_os = "macos") {
		let mut command = Command::new("open");
		command.arg(url);
		command
	} else if cfg!(target_os = "windows") {
		let mut command = Command::new("cmd");
		command.args(["/C", "start", "", url]);
		command
	} else {
		let mut command = Command::new("xdg-open");
		command.arg(url);
		command
	}
}
