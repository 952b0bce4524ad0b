//! Help overlay rendering and visibility state.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::centered_rect;

/// Manages help overlay state and rendering.
pub struct HelpRenderer {
    visible: bool,
}

impl HelpRenderer {
    pub fn new() -> Self {
        Self { visible: false }
    }

    /// Toggle help visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Render the overlay with the current screen's keybindings.
    pub fn render(&self, frame: &mut Frame, area: Rect, bindings: &[(&str, &str)]) {
        let height = bindings.len() as u16 + 4;
        let popup = centered_rect(area, 44, height);
        frame.render_widget(Clear, popup);

        let max_key_width = bindings.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        let mut lines = vec![Line::from("")];
        for (key, action) in bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {key:<max_key_width$}  "),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(*action),
            ]));
        }

        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(help, popup);
    }
}

impl Default for HelpRenderer {
    fn default() -> Self {
        Self::new()
    }
}
