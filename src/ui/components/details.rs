use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use pinmap_core::{DetailsPanel, LookAroundScene, PanelCommand, PreviewState};

use crate::ui::theme::Theme;

/// Rows the sheet wants, borders included.
pub const SHEET_HEIGHT: u16 = 11;

fn command_hint(command: PanelCommand) -> (&'static str, &'static str) {
	match command {
		PanelCommand::OpenExternally => ("Ctrl-O", "Open in Maps"),
		PanelCommand::GetDirections => ("Ctrl-G", "Get Directions"),
		PanelCommand::Close => ("Esc", "Close"),
	}
}

/// Draw the sheet for the selected place over the bottom of `area`.
pub fn render_details(frame: &mut Frame, area: Rect, panel: DetailsPanel<'_>, theme: &Theme) {
	if !panel.is_visible() || area.height < 3 {
		return;
	}
	let height = SHEET_HEIGHT.min(area.height);
	let sheet = Rect {
		y: area.bottom() - height,
		height,
		..area
	};

	let mut hints = Line::default();
	for command in panel.available_commands() {
		let (key, label) = command_hint(command);
		hints.spans.push(Span::styled(format!(" {key} "), theme.key_hint));
		hints.spans.push(Span::styled(format!("{label} "), theme.muted));
	}

	let block = Block::bordered()
		.title(Line::styled(format!(" {} ", panel.name()), theme.title))
		.title_bottom(hints)
		.border_style(theme.border);

	let mut lines = vec![Line::raw(panel.description())];
	if let Some(place) = panel.selection() {
		let mut facts = Vec::new();
		if let Some(category) = &place.category {
			facts.push(category.clone());
		}
		facts.push(format!(
			"{:.5}, {:.5}",
			place.coordinate.latitude, place.coordinate.longitude
		));
		lines.push(Line::styled(facts.join(" · "), theme.muted));
	}
	lines.push(Line::default());
	lines.push(Line::styled("Look Around", theme.title));
	lines.extend(preview_lines(panel.preview(), theme));

	frame.render_widget(Clear, sheet);
	frame.render_widget(
		Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
		sheet,
	);
}

fn preview_lines(preview: PreviewState<'_>, theme: &Theme) -> Vec<Line<'static>> {
	match preview {
		PreviewState::Loading => vec![Line::styled("Loading street-level imagery…", theme.muted)],
		PreviewState::Unavailable => vec![Line::styled("No preview available", theme.muted)],
		PreviewState::Ready(scene) => scene_lines(scene),
	}
}

fn scene_lines(scene: &LookAroundScene) -> Vec<Line<'static>> {
	let mut summary = format!("Image {}", scene.image_id);
	if let Some(heading) = scene.compass_angle {
		summary.push_str(&format!(" · facing {heading:.0}°"));
	}
	if let Some(date) = scene
		.captured_at
		.and_then(DateTime::<Utc>::from_timestamp_millis)
	{
		summary.push_str(&format!(" · captured {}", date.format("%Y-%m-%d")));
	}
	let mut lines = vec![Line::raw(summary)];
	if let Some(url) = &scene.thumbnail_url {
		lines.push(Line::raw(url.clone()));
	}
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scene_summary_includes_heading_and_date() {
		let scene = LookAroundScene {
			image_id: "42".into(),
			captured_at: Some(1_609_459_200_000),
			compass_angle: Some(87.4),
			thumbnail_url: Some("https://images.example/42.jpg".into()),
			coordinate: None,
		};
		let lines = scene_lines(&scene);
		assert_eq!(
			lines[0].to_string(),
			"Image 42 · facing 87° · captured 2021-01-01"
		);
		assert_eq!(lines[1].to_string(), "https://images.example/42.jpg");
	}

	#[test]
	fn bare_scene_shows_only_the_id() {
		let scene = LookAroundScene {
			image_id: "7".into(),
			captured_at: None,
			compass_angle: None,
			thumbnail_url: None,
			coordinate: None,
		};
		let lines = scene_lines(&scene);
		assert_eq!(lines.len(), 1);
		assert_eq!(lines[0].to_string(), "Image 7");
	}
}
