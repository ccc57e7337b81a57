use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::ui::theme::Theme;

/// Draw the captured log records.
pub fn render_logs(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let widget = TuiLoggerWidget::default()
		.block(
			Block::bordered()
				.title(" Logs ")
				.border_style(theme.border),
		)
		.style(theme.muted)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false);
	frame.render_widget(Clear, area);
	frame.render_widget(widget, area);
}
