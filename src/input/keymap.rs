//! Key-to-action translation, per screen context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Action, KeyContext};

/// Translate a key event into an action for the given context.
///
/// Returns `None` for keys that mean nothing on that screen.
pub fn translate(context: KeyContext, key: KeyEvent) -> Option<Action> {
    // Ctrl-C quits from anywhere.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match context {
        KeyContext::DeckList => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Enter => Some(Action::OpenSelected),
            KeyCode::Char('a') => Some(Action::NewDeck),
            KeyCode::Char('d') => Some(Action::DeleteSelected),
            _ => None,
        },
        KeyContext::DeckView => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Back),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Char('a') => Some(Action::NewCard),
            KeyCode::Char('d') => Some(Action::DeleteSelected),
            KeyCode::Char('s') => Some(Action::StartStudy),
            _ => None,
        },
        KeyContext::Study => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Back),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Flip),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCard),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevCard),
            KeyCode::Char('r') => Some(Action::ToggleRandom),
            _ => None,
        },
    }
}

/// Keybinding reference for the help overlay, per context.
pub fn bindings(context: KeyContext) -> &'static [(&'static str, &'static str)] {
    match context {
        KeyContext::DeckList => &[
            ("Up/Down", "Select deck"),
            ("Enter", "Open deck"),
            ("a", "New deck"),
            ("d", "Delete selected deck"),
            ("?", "Toggle help"),
            ("q", "Quit"),
        ],
        KeyContext::DeckView => &[
            ("Up/Down", "Select card"),
            ("a", "New card"),
            ("d", "Delete selected card"),
            ("s", "Study this deck"),
            ("?", "Toggle help"),
            ("Esc", "Back to decks"),
        ],
        KeyContext::Study => &[
            ("Space/Enter", "Flip card"),
            ("Left/Right", "Previous / next card"),
            ("r", "Toggle random order"),
            ("?", "Toggle help"),
            ("Esc", "End session"),
        ],
    }
}
