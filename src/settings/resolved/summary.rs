use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!(
		"  User location: {:.5}, {:.5}",
		config.user_location.latitude, config.user_location.longitude
	);
	println!("  Region span: {} m", config.span_meters);
	println!("  Place search: {}", config.providers.search_url);
	println!("  Search limit: {}", config.providers.search_limit);
	println!("  Directions: {}", config.providers.directions_url);
	println!(
		"  Look-around imagery: {} ({})",
		config.providers.look_around_url,
		if config.providers.look_around_token.is_some() {
			"token set"
		} else {
			"no token, previews disabled"
		}
	);
	println!("  External map page: {}", config.providers.external_url);
	println!("  Request timeout: {} s", config.providers.timeout.as_secs());
	println!("  User agent: {}", config.providers.user_agent);
	println!("  UI theme: {}", config.theme_name);
	println!(
		"  Initial query: {}",
		config.initial_query.as_deref().unwrap_or("(none)")
	);
	println!("  Log pane: {}", bool_to_word(config.show_logs));
	println!("  Log level: {}", config.log_level);
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "enabled" } else { "disabled" }
}
