//! Status bar rendering.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders the one-line status bar at the bottom of the screen.
///
/// Shows the current screen context plus an optional transient message
/// (cleared by the `App` on the next action).
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    pub fn render(frame: &mut Frame, area: Rect, context: &str, message: Option<&str>) {
        let status = match message {
            Some(msg) => format!("{context} | {msg}"),
            None => context.to_string(),
        };

        let status_line =
            Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::White));
        frame.render_widget(status_line, area);
    }
}
