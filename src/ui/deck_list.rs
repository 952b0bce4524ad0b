//! Root screen: the deck list.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::collection::DeckCollection;

/// Renders the deck list with per-deck name and card-count label.
pub struct DeckListRenderer;

impl DeckListRenderer {
    pub fn render(frame: &mut Frame, area: Rect, decks: &DeckCollection, selected: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Flashcard Decks ")
            .title_style(Style::default().add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if decks.is_empty() {
            let empty = Paragraph::new("No decks yet. Add one to get started!")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        }

        let width = inner.width as usize;
        let items: Vec<ListItem> = decks
            .decks()
            .iter()
            .map(|deck| {
                let label = deck.card_count_label();
                // Name on the left, count label right-aligned.
                let pad = width
                    .saturating_sub(deck.name.width() + label.width() + 3)
                    .max(1);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        deck.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(label, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::Rgb(45, 45, 55)))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, inner, &mut state);
    }
}
