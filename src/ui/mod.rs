//! View and UI layer
//!
//! All rendering lives here. Renderers take `&`-references into app state
//! and never mutate it; every mutation goes through the input pipeline.

pub mod deck_list;
pub mod deck_view;
pub mod dialog;
pub mod help;
pub mod status_bar;
pub mod study;
pub mod theme;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, Screen};
use crate::input::keymap;

use deck_list::DeckListRenderer;
use deck_view::DeckViewRenderer;
use status_bar::StatusBarRenderer;
use study::StudyRenderer;

/// Draw one frame of the whole application.
pub fn draw(frame: &mut Frame, app: &App) {
    let [main, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    match app.screen {
        Screen::DeckList => {
            DeckListRenderer::render(frame, main, &app.decks, app.deck_cursor);
        }
        Screen::DeckView => {
            if let Some(deck) = app.open_deck() {
                DeckViewRenderer::render(frame, main, deck, app.card_cursor);
            }
        }
        Screen::Study => {
            if let Some(session) = &app.session {
                StudyRenderer::render(frame, main, session);
            }
        }
    }

    StatusBarRenderer::render(frame, status, &app.context_line(), app.status.as_deref());

    // Modal overlays draw last, on top of the screen behind them.
    if let Some(form) = &app.deck_form {
        form.render(frame, main);
    }
    if let Some(form) = &app.card_form {
        form.render(frame, main);
    }
    if app.help.is_visible() {
        app.help
            .render(frame, main, keymap::bindings(app.key_context()));
    }
}

/// Center a fixed-size popup inside `area`, clamped to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
