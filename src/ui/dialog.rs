//! Modal form dialogs: new deck and new card.
//!
//! A form owns its transient input until it resolves. `Esc` cancels and
//! discards everything typed; `Enter` asks the `App` to submit, and the
//! `App` keeps the form open if the collection rejects the input. The form
//! itself never touches the deck collection.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::model::CardTheme;
use crate::ui::centered_rect;
use crate::ui::theme::theme_style;

/// What a key press did to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Form is still open.
    Pending,
    /// User dismissed the form; discard its input.
    Cancelled,
    /// User asked to submit; the owner validates and applies.
    Submit,
}

/// Single-line text input with a cursor, prompt-style.
#[derive(Debug, Default)]
pub struct TextField {
    text: String,
    /// Cursor position in chars, 0..=len.
    cursor: usize,
}

impl TextField {
    pub fn text(&self) -> &str {
        &self.text
    }

    fn byte_at(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_at(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_at(self.cursor);
                    self.text.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.text.chars().count() {
                    let at = self.byte_at(self.cursor);
                    self.text.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.chars().count(),
            _ => {}
        }
    }

    fn cursor_x(&self) -> u16 {
        self.cursor as u16
    }
}

/// State for the new-deck form: a single name field.
#[derive(Debug, Default)]
pub struct DeckForm {
    pub name: TextField,
}

impl DeckForm {
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => FormOutcome::Cancelled,
            KeyCode::Enter => FormOutcome::Submit,
            _ => {
                self.name.handle_key(key);
                FormOutcome::Pending
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(area, 44, 7);
        frame.render_widget(Clear, popup);

        let block = dialog_block(" New Deck ");
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        frame.render_widget(Paragraph::new("Deck name:"), rows[0]);
        frame.render_widget(
            Paragraph::new(self.name.text()).style(field_style(true)),
            rows[1],
        );
        frame.render_widget(hint_line(), rows[3]);

        frame.set_cursor_position((rows[1].x + self.name.cursor_x(), rows[1].y));
    }
}

/// Fields of the new-card form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Question,
    Answer,
    Theme,
}

/// State for the new-card form: question, answer, and a theme picker
/// cycling the fixed palette.
#[derive(Debug)]
pub struct CardForm {
    pub question: TextField,
    pub answer: TextField,
    theme_index: usize,
    focus: CardField,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            question: TextField::default(),
            answer: TextField::default(),
            theme_index: 0,
            focus: CardField::Question,
        }
    }
}

impl CardForm {
    pub fn theme(&self) -> CardTheme {
        CardTheme::ALL[self.theme_index]
    }

    pub fn focus(&self) -> CardField {
        self.focus
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            CardField::Question => CardField::Answer,
            CardField::Answer => CardField::Theme,
            CardField::Theme => CardField::Question,
        };
    }

    fn focus_prev(&mut self) {
        self.focus = match self.focus {
            CardField::Question => CardField::Theme,
            CardField::Answer => CardField::Question,
            CardField::Theme => CardField::Answer,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => return FormOutcome::Cancelled,
            KeyCode::Enter => return FormOutcome::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            _ => match self.focus {
                CardField::Question => self.question.handle_key(key),
                CardField::Answer => self.answer.handle_key(key),
                CardField::Theme => match key.code {
                    KeyCode::Right => {
                        self.theme_index = (self.theme_index + 1) % CardTheme::ALL.len();
                    }
                    KeyCode::Left => {
                        self.theme_index = (self.theme_index + CardTheme::ALL.len() - 1)
                            % CardTheme::ALL.len();
                    }
                    _ => {}
                },
            },
        }
        FormOutcome::Pending
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(area, 54, 12);
        frame.render_widget(Clear, popup);

        let block = dialog_block(" New Card ");
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::vertical([
            Constraint::Length(1), // question label
            Constraint::Length(1), // question field
            Constraint::Length(1), // answer label
            Constraint::Length(1), // answer field
            Constraint::Length(1), // theme label
            Constraint::Length(1), // theme picker
            Constraint::Length(1),
            Constraint::Length(1), // hint
        ])
        .split(inner);

        frame.render_widget(Paragraph::new("Question:"), rows[0]);
        frame.render_widget(
            Paragraph::new(self.question.text())
                .style(field_style(self.focus == CardField::Question)),
            rows[1],
        );
        frame.render_widget(Paragraph::new("Answer:"), rows[2]);
        frame.render_widget(
            Paragraph::new(self.answer.text())
                .style(field_style(self.focus == CardField::Answer)),
            rows[3],
        );
        frame.render_widget(Paragraph::new("Theme (Left/Right):"), rows[4]);

        let theme = self.theme();
        let style = theme_style(theme);
        let picker = Line::from(vec![
            Span::styled("  ", style.panel()),
            Span::raw(" "),
            Span::styled(theme.label(), style.accent()),
        ]);
        let picker_style = if self.focus == CardField::Theme {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(picker).style(picker_style), rows[5]);

        frame.render_widget(hint_line(), rows[7]);

        // Cursor only while a text field has focus.
        match self.focus {
            CardField::Question => frame
                .set_cursor_position((rows[1].x + self.question.cursor_x(), rows[1].y)),
            CardField::Answer => {
                frame.set_cursor_position((rows[3].x + self.answer.cursor_x(), rows[3].y))
            }
            CardField::Theme => {}
        }
    }
}

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}

fn hint_line() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "Enter save \u{2502} Esc cancel",
        Style::default().fg(Color::DarkGray),
    )))
}
