// End-to-end flows driven through key events, rendered into a test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use cram::app::{App, Screen};
use cram::model::seed::demo_decks;
use cram::model::{Card, CardTheme, Deck};
use cram::ui;

/// Drives the app the way the event loop does, against an off-screen
/// terminal.
struct AppHarness {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl AppHarness {
    fn new() -> Self {
        Self::with_decks(demo_decks())
    }

    fn with_decks(decks: Vec<Deck>) -> Self {
        let backend = TestBackend::new(80, 30);
        let terminal = Terminal::new(backend).unwrap();
        Self {
            app: App::new(decks),
            terminal,
        }
    }

    fn send_key(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c));
        }
    }

    /// Render one frame and return the screen contents as plain text.
    fn render(&mut self) -> String {
        self.terminal.draw(|frame| ui::draw(frame, &self.app)).unwrap();
        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }
}

#[test]
fn deck_list_shows_names_and_card_counts() {
    let mut harness = AppHarness::new();
    let screen = harness.render();

    assert!(screen.contains("Flashcard Decks"));
    assert!(screen.contains("Calculus"));
    assert!(screen.contains("Deep Learning"));
    assert!(screen.contains("5 cards"));
    assert!(screen.contains("4 decks"), "status bar shows the deck count");
}

#[test]
fn empty_collection_shows_placeholder() {
    let mut harness = AppHarness::with_decks(Vec::new());
    let screen = harness.render();
    assert!(screen.contains("No decks yet. Add one to get started!"));
}

#[test]
fn add_deck_end_to_end() {
    let mut harness = AppHarness::new();

    harness.send_key(KeyCode::Char('a'));
    let screen = harness.render();
    assert!(screen.contains("New Deck"));
    assert!(screen.contains("Deck name:"));

    harness.type_text("  Physics  ");
    harness.send_key(KeyCode::Enter);

    let screen = harness.render();
    assert!(screen.contains("Physics"));
    assert!(screen.contains("0 cards"));
    assert!(screen.contains("Added deck \"Physics\""));
}

#[test]
fn deck_view_shows_cards_and_study_entry() {
    let mut harness = AppHarness::new();
    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.app.screen, Screen::DeckView);
    let screen = harness.render();
    assert!(screen.contains("Calculus"));
    assert!(screen.contains("Study Flashcards"));
    assert!(screen.contains("What is the derivative of x^n?"));
}

#[test]
fn empty_deck_hides_the_study_entry() {
    let mut harness = AppHarness::with_decks(vec![Deck::new("Empty")]);
    harness.send_key(KeyCode::Enter);

    let screen = harness.render();
    assert!(screen.contains("Cards do not exist."));
    assert!(!screen.contains("Study Flashcards"));
}

#[test]
fn new_card_form_shows_theme_picker() {
    let mut harness = AppHarness::new();
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Char('a'));

    let screen = harness.render();
    assert!(screen.contains("New Card"));
    assert!(screen.contains("Question:"));
    assert!(screen.contains("Answer:"));
    assert!(screen.contains("Blue"), "default theme is shown");
}

#[test]
fn study_flow_flip_navigate_and_wrap() {
    let decks = vec![Deck {
        name: "Capitals".to_string(),
        cards: vec![
            Card::new("Capital of France?", "Paris", CardTheme::Blue),
            Card::new("Capital of Japan?", "Tokyo", CardTheme::Green),
            Card::new("Capital of Peru?", "Lima", CardTheme::Purple),
        ],
    }];
    let mut harness = AppHarness::with_decks(decks);
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Char('s'));

    assert_eq!(harness.app.screen, Screen::Study);
    let screen = harness.render();
    assert!(screen.contains("Mode: Sequential"));
    assert!(screen.contains("Card 1 of 3"));
    assert!(screen.contains("Capital of France?"));
    assert!(screen.contains("Space to see the answer"));
    assert!(!screen.contains("Paris"));

    harness.send_key(KeyCode::Char(' '));
    let screen = harness.render();
    assert!(screen.contains("Paris"));
    assert!(screen.contains("Space to see the question"));

    // Navigation resets the flip and wraps past the end.
    harness.send_key(KeyCode::Right);
    let screen = harness.render();
    assert!(screen.contains("Card 2 of 3"));
    assert!(screen.contains("Capital of Japan?"));
    assert!(!screen.contains("Tokyo"));

    harness.send_key(KeyCode::Right);
    harness.send_key(KeyCode::Right);
    let screen = harness.render();
    assert!(screen.contains("Card 1 of 3"));

    harness.send_key(KeyCode::Left);
    let screen = harness.render();
    assert!(screen.contains("Card 3 of 3"));
}

#[test]
fn random_mode_is_labelled_and_resets_position() {
    let mut harness = AppHarness::new();
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Char('s'));
    harness.send_key(KeyCode::Right);
    harness.send_key(KeyCode::Right);

    harness.send_key(KeyCode::Char('r'));
    let screen = harness.render();
    assert!(screen.contains("Mode: Random"));
    assert!(screen.contains("Card 1 of 5"));

    harness.send_key(KeyCode::Char('r'));
    let screen = harness.render();
    assert!(screen.contains("Mode: Sequential"));
}

#[test]
fn help_overlay_lists_screen_bindings() {
    let mut harness = AppHarness::new();
    harness.send_key(KeyCode::Char('?'));

    let screen = harness.render();
    assert!(screen.contains("Help"));
    assert!(screen.contains("New deck"));

    harness.send_key(KeyCode::Esc);
    let screen = harness.render();
    assert!(!screen.contains("New deck"));
}

#[test]
fn quit_from_the_deck_list() {
    let mut harness = AppHarness::new();
    harness.send_key(KeyCode::Char('q'));
    assert!(harness.app.should_quit);
}
