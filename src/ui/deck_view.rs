//! One deck's cards, with the study-mode entry point.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::model::Deck;
use crate::ui::theme::theme_style;

/// Renders a deck's card list with question previews.
pub struct DeckViewRenderer;

impl DeckViewRenderer {
    pub fn render(frame: &mut Frame, area: Rect, deck: &Deck, selected: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", deck.name))
            .title_style(Style::default().add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [entry, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);

        // Study entry is hidden while the deck has no cards.
        let entry_line = if deck.cards.is_empty() {
            Line::from(Span::styled(
                "Cards do not exist.",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled(
                    "Study Flashcards",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  press s", Style::default().fg(Color::DarkGray)),
            ])
        };
        frame.render_widget(Paragraph::new(entry_line), entry);

        let items: Vec<ListItem> = deck
            .cards
            .iter()
            .map(|card| {
                let style = theme_style(card.theme);
                ListItem::new(Line::from(vec![
                    Span::styled("\u{258c} ", style.accent()),
                    Span::raw(card.question.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::Rgb(45, 45, 55)))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, list_area, &mut state);
    }
}
