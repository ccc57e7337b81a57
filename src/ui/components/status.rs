use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use pinmap_core::MapScreen;

use crate::ui::theme::Theme;

const KEY_HINTS: &[(&str, &str)] = &[
	("Enter", "search"),
	("↑↓", "select"),
	("Alt+←↑↓→", "pan"),
	("Ctrl-L", "recenter"),
	("Ctrl-T", "logs"),
	("Ctrl-Q", "quit"),
];

/// Argument bundle for the bottom status line.
pub struct StatusContext<'a> {
	pub screen: &'a MapScreen,
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

pub fn status_text(screen: &MapScreen) -> String {
	if screen.is_searching() {
		return format!("Searching for \"{}\"", screen.query());
	}
	if screen.is_routing() {
		let target = screen.selection().map(|place| place.label()).unwrap_or("destination");
		return format!("Finding a route to {target}");
	}
	if screen.route_displaying() {
		return match (screen.route(), screen.route_destination()) {
			(Some(route), Some(place)) => format!("Route to {}: {}", place.label(), route.summary()),
			(Some(route), None) => format!("Route: {}", route.summary()),
			(None, _) => "No route found".to_string(),
		};
	}
	match screen.results().len() {
		0 if screen.has_searched() => "No results".to_string(),
		0 => "Type a place and press Enter".to_string(),
		1 => "1 place".to_string(),
		count => format!("{count} places"),
	}
}

pub fn render_status(frame: &mut Frame, area: Rect, ctx: StatusContext<'_>) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let [left, right] =
		Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

	let mut line = Line::default();
	if ctx.busy {
		let spinner = Throbber::default()
			.style(ctx.theme.muted)
			.throbber_style(ctx.theme.muted);
		line.spans.push(spinner.to_symbol_span(ctx.throbber_state));
	}
	line.spans
		.push(Span::styled(status_text(ctx.screen), ctx.theme.muted));
	frame.render_widget(Paragraph::new(line), left);

	let mut hints = Line::default();
	for (key, label) in KEY_HINTS {
		hints.spans.push(Span::styled(*key, ctx.theme.key_hint));
		hints.spans.push(Span::styled(format!(" {label}  "), ctx.theme.muted));
	}
	frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), right);
}
