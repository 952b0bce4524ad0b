//! Application state and the event loop.
//!
//! `App` is the single owner of the deck collection, the active study
//! session, and all transient UI state. Key events resolve to
//! [`Action`] intents (or are routed to an open modal form), and `apply`
//! is the one place mutations happen.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::collection::DeckCollection;
use crate::input::{keymap, Action, KeyContext};
use crate::model::Deck;
use crate::session::StudySession;
use crate::ui;
use crate::ui::dialog::{CardForm, DeckForm, FormOutcome};
use crate::ui::help::HelpRenderer;

/// Which screen is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    DeckList,
    DeckView,
    Study,
}

/// Top-level application state.
pub struct App {
    pub decks: DeckCollection,
    pub screen: Screen,
    /// Selection in the deck list.
    pub deck_cursor: usize,
    /// Selection in the open deck's card list.
    pub card_cursor: usize,
    /// Index of the deck open in `DeckView`/`Study`.
    pub open_deck_index: Option<usize>,
    /// Study navigation state; `Some` only on the study screen.
    pub session: Option<StudySession>,
    pub deck_form: Option<DeckForm>,
    pub card_form: Option<CardForm>,
    pub help: HelpRenderer,
    /// Transient status message, cleared on the next key press.
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(decks: Vec<Deck>) -> Self {
        Self {
            decks: DeckCollection::new(decks),
            screen: Screen::DeckList,
            deck_cursor: 0,
            card_cursor: 0,
            open_deck_index: None,
            session: None,
            deck_form: None,
            card_form: None,
            help: HelpRenderer::new(),
            status: None,
            should_quit: false,
        }
    }

    /// Blocking draw/read loop until the user quits.
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn key_context(&self) -> KeyContext {
        match self.screen {
            Screen::DeckList => KeyContext::DeckList,
            Screen::DeckView => KeyContext::DeckView,
            Screen::Study => KeyContext::Study,
        }
    }

    /// The deck open in `DeckView`/`Study`, if any.
    pub fn open_deck(&self) -> Option<&Deck> {
        self.open_deck_index.and_then(|i| self.decks.deck(i))
    }

    /// Context text for the status bar, per screen.
    pub fn context_line(&self) -> String {
        match self.screen {
            Screen::DeckList => {
                format!(
                    "{} | a add  d delete  Enter open  ? help  q quit",
                    match self.decks.len() {
                        1 => "1 deck".to_string(),
                        n => format!("{n} decks"),
                    }
                )
            }
            Screen::DeckView => match self.open_deck() {
                Some(deck) => format!(
                    "{}: {} | a add  d delete  s study  Esc back",
                    deck.name,
                    deck.card_count_label()
                ),
                None => String::new(),
            },
            Screen::Study => "Space flip  \u{2190}/\u{2192} navigate  r random  Esc end".to_string(),
        }
    }

    /// Route one key press: to the open form, the help overlay, or the
    /// keymap.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.status = None;

        if self.deck_form.is_some() {
            self.handle_deck_form_key(key);
            return;
        }
        if self.card_form.is_some() {
            self.handle_card_form_key(key);
            return;
        }
        if self.help.is_visible() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.help.hide();
            }
            return;
        }

        if let Some(action) = keymap::translate(self.key_context(), key) {
            self.apply(action);
        }
    }

    fn handle_deck_form_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.deck_form else {
            return;
        };
        match form.handle_key(key) {
            FormOutcome::Pending => {}
            FormOutcome::Cancelled => self.deck_form = None,
            FormOutcome::Submit => {
                let name = form.name.text().to_string();
                if self.decks.add_deck(&name) {
                    self.deck_form = None;
                    self.status = Some(format!("Added deck \"{}\"", name.trim()));
                }
                // Rejected input keeps the form open, silently.
            }
        }
    }

    fn handle_card_form_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.card_form else {
            return;
        };
        match form.handle_key(key) {
            FormOutcome::Pending => {}
            FormOutcome::Cancelled => self.card_form = None,
            FormOutcome::Submit => {
                let Some(deck_index) = self.open_deck_index else {
                    return;
                };
                let question = form.question.text().to_string();
                let answer = form.answer.text().to_string();
                let theme = form.theme();
                if self.decks.add_card(deck_index, &question, &answer, theme) {
                    self.card_form = None;
                    self.status = Some("Added card".to_string());
                }
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.help.toggle(),

            Action::Back => match self.screen {
                Screen::DeckList => {}
                Screen::DeckView => {
                    self.screen = Screen::DeckList;
                    self.open_deck_index = None;
                    self.card_cursor = 0;
                }
                Screen::Study => {
                    // Session state is discarded, never written back.
                    self.session = None;
                    self.screen = Screen::DeckView;
                }
            },

            Action::SelectPrev => match self.screen {
                Screen::DeckList => self.deck_cursor = self.deck_cursor.saturating_sub(1),
                Screen::DeckView => self.card_cursor = self.card_cursor.saturating_sub(1),
                Screen::Study => {}
            },
            Action::SelectNext => match self.screen {
                Screen::DeckList => {
                    if self.deck_cursor + 1 < self.decks.len() {
                        self.deck_cursor += 1;
                    }
                }
                Screen::DeckView => {
                    let cards = self.open_deck().map(|d| d.cards.len()).unwrap_or(0);
                    if self.card_cursor + 1 < cards {
                        self.card_cursor += 1;
                    }
                }
                Screen::Study => {}
            },

            Action::OpenSelected => {
                if self.decks.deck(self.deck_cursor).is_some() {
                    self.open_deck_index = Some(self.deck_cursor);
                    self.card_cursor = 0;
                    self.screen = Screen::DeckView;
                }
            }

            Action::NewDeck => self.deck_form = Some(DeckForm::default()),
            Action::NewCard => self.card_form = Some(CardForm::default()),

            Action::DeleteSelected => match self.screen {
                Screen::DeckList => {
                    let name = self.decks.deck(self.deck_cursor).map(|d| d.name.clone());
                    if let Some(name) = name {
                        self.decks.remove_decks(&[self.deck_cursor]);
                        self.deck_cursor =
                            self.deck_cursor.min(self.decks.len().saturating_sub(1));
                        self.status = Some(format!("Removed deck \"{name}\""));
                    }
                }
                Screen::DeckView => {
                    if let Some(deck_index) = self.open_deck_index {
                        let cards = self.open_deck().map(|d| d.cards.len()).unwrap_or(0);
                        if self.card_cursor < cards {
                            self.decks.remove_cards(deck_index, &[self.card_cursor]);
                            self.card_cursor =
                                self.card_cursor.min((cards - 1).saturating_sub(1));
                        }
                    }
                }
                Screen::Study => {}
            },

            Action::StartStudy => {
                // Study entry is gated on a non-empty deck.
                let cards = self
                    .open_deck()
                    .filter(|deck| !deck.cards.is_empty())
                    .map(|deck| deck.cards.clone());
                if let Some(cards) = cards {
                    tracing::debug!(count = cards.len(), "entering study session");
                    self.session = Some(StudySession::new(cards));
                    self.screen = Screen::Study;
                }
            }

            Action::Flip => {
                if let Some(session) = &mut self.session {
                    session.toggle_flip();
                }
            }
            Action::NextCard => {
                if let Some(session) = &mut self.session {
                    session.next();
                }
            }
            Action::PrevCard => {
                if let Some(session) = &mut self.session {
                    session.previous();
                }
            }
            Action::ToggleRandom => {
                if let Some(session) = &mut self.session {
                    session.toggle_random();
                }
            }
        }
    }
}
