//! Core data records: cards, decks, and the fixed card theme palette.
//!
//! These are plain value types with no behavior beyond display derivations.
//! Ownership is strictly top-down: a `Card` is owned by its `Deck`'s card
//! vector, and decks are owned by the [`DeckCollection`](crate::collection::DeckCollection).

pub mod loader;
pub mod seed;

use serde::{Deserialize, Serialize};

/// Visual theme for a card, from a fixed closed palette.
///
/// Purely presentational; the mapping to concrete colors lives in
/// [`crate::ui::theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTheme {
    Blue,
    Green,
    Purple,
    Orange,
    GradientBlue,
    GradientPink,
}

impl CardTheme {
    /// All variants, in picker order.
    pub const ALL: [CardTheme; 6] = [
        CardTheme::Blue,
        CardTheme::Green,
        CardTheme::Purple,
        CardTheme::Orange,
        CardTheme::GradientBlue,
        CardTheme::GradientPink,
    ];

    /// Human-readable name for the theme picker.
    pub fn label(&self) -> &'static str {
        match self {
            CardTheme::Blue => "Blue",
            CardTheme::Green => "Green",
            CardTheme::Purple => "Purple",
            CardTheme::Orange => "Orange",
            CardTheme::GradientBlue => "Gradient Blue",
            CardTheme::GradientPink => "Gradient Pink",
        }
    }
}

impl Default for CardTheme {
    fn default() -> Self {
        CardTheme::Blue
    }
}

/// A single flashcard: a question/answer pair tagged with a visual theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub theme: CardTheme,
}

impl Card {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        theme: CardTheme,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            theme,
        }
    }
}

/// A named, ordered collection of cards.
///
/// Card order is insertion order and is meaningful: it drives display order
/// and sequential study navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Display label for the deck's card count: "1 card", "{n} cards".
    pub fn card_count_label(&self) -> String {
        match self.cards.len() {
            1 => "1 card".to_string(),
            n => format!("{n} cards"),
        }
    }
}
