//! Flip-to-reveal study screen.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::session::StudySession;
use crate::ui::theme::theme_style;

/// Renders the single-card study view.
pub struct StudyRenderer;

impl StudyRenderer {
    pub fn render(frame: &mut Frame, area: Rect, session: &StudySession) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Study Flashcards ")
            .title_style(Style::default().add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if session.is_empty() {
            let empty = Paragraph::new("No cards to study.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let [header, card_area, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(inner);

        let mode = if session.is_random() {
            "Mode: Random"
        } else {
            "Mode: Sequential"
        };
        let (k, n) = session.position();
        let header_text = vec![
            Line::from(Span::styled(mode, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                format!("Card {k} of {n}"),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(header_text).alignment(Alignment::Center),
            header,
        );

        // Guarded by the is_empty branch above.
        let Some(card) = session.current_card() else {
            return;
        };
        let style = theme_style(card.theme);

        let side = if session.is_flipped() {
            card.answer.as_str()
        } else {
            card.question.as_str()
        };
        let caption = if session.is_flipped() {
            "Space to see the question"
        } else {
            "Space to see the answer"
        };

        let card_block = Block::default()
            .borders(Borders::ALL)
            .border_style(style.accent())
            .style(style.panel());
        let card_inner = card_block.inner(card_area);
        frame.render_widget(card_block, card_area);

        // Vertically center the card text above its caption.
        let text_height = 2u16;
        let top_pad = card_inner.height.saturating_sub(text_height + 2) / 2;
        let [_, text_area, _, caption_area] = Layout::vertical([
            Constraint::Length(top_pad),
            Constraint::Min(text_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(card_inner);

        frame.render_widget(
            Paragraph::new(side)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            text_area,
        );
        frame.render_widget(
            Paragraph::new(caption)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            caption_area,
        );

        let order_hint = if session.is_random() {
            "r sequential order"
        } else {
            "r random order"
        };
        frame.render_widget(
            Paragraph::new(format!(
                "\u{2190} previous \u{2502} \u{2192} next \u{2502} {order_hint}"
            ))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
            footer,
        );
    }
}
