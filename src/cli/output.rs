use anyhow::Result;
use pinmap::{RouteOutcome, SessionOutcome};

/// Render the session outcome as plain text lines.
pub(crate) fn format_plain(outcome: &SessionOutcome) -> String {
	let mut lines = Vec::new();
	match &outcome.selection {
		Some(place) => lines.push(format!(
			"{} ({:.5}, {:.5})",
			place.label(),
			place.coordinate.latitude,
			place.coordinate.longitude
		)),
		None => lines.push("No selection".to_string()),
	}
	if let Some(route) = &outcome.route {
		lines.push(format_route(route));
	}
	lines.join("\n")
}

fn format_route(route: &RouteOutcome) -> String {
	let target = route.destination.as_deref().unwrap_or("destination");
	format!(
		"Route to {target}: {:.1} km, {} min",
		route.distance_meters / 1000.0,
		(route.travel_seconds + 30) / 60
	)
}

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use pinmap::{Coordinate, PlaceResult};
	use serde_json::Value;

	use super::*;

	fn outcome() -> SessionOutcome {
		SessionOutcome {
			query: "Coffee Shop".into(),
			result_count: 2,
			selection: Some(PlaceResult::new(
				"node/1",
				"Cafe A",
				Coordinate::new(25.765, -80.19),
			)),
			route: Some(RouteOutcome {
				destination: Some("Cafe A".into()),
				distance_meters: 4_300.0,
				travel_seconds: 545,
			}),
		}
	}

	#[test]
	fn plain_format_lists_selection_and_route() {
		assert_eq!(
			format_plain(&outcome()),
			"Cafe A (25.76500, -80.19000)\nRoute to Cafe A: 4.3 km, 9 min"
		);
	}

	#[test]
	fn plain_format_without_selection() {
		let outcome = SessionOutcome {
			selection: None,
			route: None,
			..outcome()
		};
		assert_eq!(format_plain(&outcome), "No selection");
	}

	#[test]
	fn json_format_includes_selection() {
		let json = format_outcome_json(&outcome()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "Coffee Shop");
		assert_eq!(value["result_count"], 2);
		assert_eq!(value["selection"]["id"], "node/1");
		assert_eq!(value["route"]["travel_seconds"], 545);
	}
}
