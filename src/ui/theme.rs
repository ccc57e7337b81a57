//! Colour themes for the map UI.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub prompt: Style,
	pub border: Style,
	pub coastline: Color,
	pub route: Color,
	pub pin: Style,
	pub selected_pin: Style,
	pub user_location: Style,
	pub title: Style,
	pub muted: Style,
	pub key_hint: Style,
}

/// A built-in theme with the names it answers to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn answers_to(&self, name: &str) -> bool {
		let name = normalize_name(name);
		normalize_name(self.name) == name
			|| self.aliases.iter().any(|alias| normalize_name(alias) == name)
	}
}

pub const SLATE: Theme = Theme {
	prompt: Style::new().fg(Color::Cyan),
	border: Style::new().fg(Color::DarkGray),
	coastline: Color::Gray,
	route: Color::Blue,
	pin: Style::new().fg(Color::Red),
	selected_pin: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	user_location: Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
	title: Style::new().add_modifier(Modifier::BOLD),
	muted: Style::new().fg(Color::DarkGray),
	key_hint: Style::new().fg(Color::Green),
};

pub const LIGHT: Theme = Theme {
	prompt: Style::new().fg(Color::Blue),
	border: Style::new().fg(Color::Gray),
	coastline: Color::DarkGray,
	route: Color::Blue,
	pin: Style::new().fg(Color::Red),
	selected_pin: Style::new()
		.fg(Color::Magenta)
		.add_modifier(Modifier::BOLD),
	user_location: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
	muted: Style::new().fg(Color::Gray),
	key_hint: Style::new().fg(Color::Green),
};

pub const SOLARIZED: Theme = Theme {
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
	coastline: Color::Rgb(147, 161, 161),
	route: Color::Rgb(38, 139, 210),
	pin: Style::new().fg(Color::Rgb(220, 50, 47)),
	selected_pin: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	user_location: Style::new()
		.fg(Color::Rgb(42, 161, 152))
		.add_modifier(Modifier::BOLD),
	title: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	muted: Style::new().fg(Color::Rgb(88, 110, 117)),
	key_hint: Style::new().fg(Color::Rgb(133, 153, 0)),
};

const BUILT_IN: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["default", "dark"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace('_', "-")
}

/// Look a theme up by name or alias, ignoring case.
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_IN
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILT_IN.iter().map(|definition| definition.name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("Default"), Some(SLATE));
		assert_eq!(by_name("SOLARIZED_DARK"), Some(SOLARIZED));
		assert_eq!(by_name("light"), Some(LIGHT));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn names_are_canonical() {
		assert_eq!(names().collect::<Vec<_>>(), ["slate", "light", "solarized"]);
	}
}
