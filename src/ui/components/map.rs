use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Line as Segment, Map as WorldMap, MapResolution};
use unicode_width::UnicodeWidthChar;

use pinmap_core::{CameraPosition, Coordinate, MapRect, MapScreen};

use crate::ui::theme::Theme;

/// Padding added around a framed route so its ends are not drawn on the border.
const ROUTE_PADDING: f64 = 0.1;
const MAX_LABEL_WIDTH: usize = 24;
const PIN_SYMBOL: &str = "●";
const USER_SYMBOL: &str = "◉";
pub const USER_LABEL: &str = "My Location";

/// Argument bundle for drawing the map canvas.
pub struct MapView<'a> {
	pub area: Rect,
	pub screen: &'a MapScreen,
	pub theme: &'a Theme,
}

struct Pin {
	at: Coordinate,
	label: String,
	style: Style,
}

/// Rectangle the canvas shows for the current camera.
pub fn visible_bounds(camera: &CameraPosition) -> MapRect {
	match camera {
		CameraPosition::Region(region) => region.bounds(),
		CameraPosition::Rect(rect) => rect.padded(ROUTE_PADDING),
	}
}

pub fn render_map(frame: &mut Frame, view: MapView<'_>) {
	let MapView {
		area,
		screen,
		theme,
	} = view;
	let bounds = visible_bounds(screen.camera());
	let selected = screen.selection();

	let pins: Vec<Pin> = screen
		.visible_pins()
		.into_iter()
		.map(|place| {
			let style = if Some(place) == selected {
				theme.selected_pin
			} else {
				theme.pin
			};
			Pin {
				at: place.coordinate,
				label: format!("{PIN_SYMBOL} {}", truncate_label(place.label(), MAX_LABEL_WIDTH)),
				style,
			}
		})
		.collect();
	let route: Vec<Coordinate> = screen
		.route()
		.map(|route| route.polyline.clone())
		.unwrap_or_default();
	let user = screen.user_location();
	let coastline = theme.coastline;
	let route_color = theme.route;
	let user_style = theme.user_location;

	let title = match screen.camera() {
		CameraPosition::Rect(_) => " Map · route ",
		CameraPosition::Region(_) => " Map ",
	};

	let canvas = Canvas::default()
		.block(Block::bordered().title(title).border_style(theme.border))
		.marker(Marker::Braille)
		.x_bounds([bounds.south_west.longitude, bounds.north_east.longitude])
		.y_bounds([bounds.south_west.latitude, bounds.north_east.latitude])
		.paint(move |ctx| {
			ctx.draw(&WorldMap {
				resolution: MapResolution::High,
				color: coastline,
			});
			ctx.layer();
			for pair in route.windows(2) {
				ctx.draw(&Segment {
					x1: pair[0].longitude,
					y1: pair[0].latitude,
					x2: pair[1].longitude,
					y2: pair[1].latitude,
					color: route_color,
				});
			}
			ctx.layer();
			ctx.print(
				user.longitude,
				user.latitude,
				Line::styled(format!("{USER_SYMBOL} {USER_LABEL}"), user_style),
			);
			for pin in &pins {
				ctx.print(
					pin.at.longitude,
					pin.at.latitude,
					Line::styled(pin.label.clone(), pin.style),
				);
			}
		});
	frame.render_widget(canvas, area);
}

/// Cut `label` to at most `max_width` terminal columns, marking the cut.
pub fn truncate_label(label: &str, max_width: usize) -> String {
	let mut width = 0;
	let mut out = String::new();
	for ch in label.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if width + ch_width > max_width {
			out.pop();
			out.push('…');
			return out;
		}
		width += ch_width;
		out.push(ch);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use pinmap_core::{Route, default_region};
	use std::time::Duration;

	#[test]
	fn short_labels_are_untouched() {
		assert_eq!(truncate_label("Cafe A", 24), "Cafe A");
	}

	#[test]
	fn long_labels_end_with_ellipsis() {
		assert_eq!(truncate_label("Bayfront Park Amphitheater", 10), "Bayfront …");
		assert_eq!(truncate_label("東京駅前", 5), "東…");
	}

	#[test]
	fn route_frame_is_padded() {
		let route = Route::new(
			vec![Coordinate::new(25.0, -80.0), Coordinate::new(26.0, -81.0)],
			1.0,
			Duration::from_secs(1),
		);
		let rect = route.bounding_rect().unwrap();
		let bounds = visible_bounds(&CameraPosition::Rect(rect));
		assert!(bounds.south_west.latitude < 25.0);
		assert!(bounds.north_east.longitude > -80.0);

		let region = default_region();
		assert_eq!(visible_bounds(&CameraPosition::Region(region)), region.bounds());
	}
}
