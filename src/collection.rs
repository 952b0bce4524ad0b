//! Deck collection ownership and mutation.
//!
//! The collection is the single writer for all deck and card state. UI code
//! never mutates decks directly: key handling produces an
//! [`Action`](crate::input::Action) and [`App`](crate::app::App) applies it
//! through the methods here.
//!
//! Removal is batch-positional: indices always refer to positions before the
//! removal, so removing `{1, 3}` from `[A, B, C, D, E]` yields `[A, C, E]`
//! no matter how the input set is ordered.

use crate::model::{Card, CardTheme, Deck};

/// Ordered, in-memory deck collection.
#[derive(Debug, Default)]
pub struct DeckCollection {
    decks: Vec<Deck>,
}

impl DeckCollection {
    pub fn new(decks: Vec<Deck>) -> Self {
        Self { decks }
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn deck(&self, index: usize) -> Option<&Deck> {
        self.decks.get(index)
    }

    /// Append a new empty deck.
    ///
    /// The name is trimmed of surrounding whitespace first; an empty result
    /// is rejected and the collection is left unchanged. Returns whether a
    /// deck was added.
    pub fn add_deck(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        tracing::debug!(name, "adding deck");
        self.decks.push(Deck::new(name));
        true
    }

    /// Remove the decks at the given pre-removal positions.
    ///
    /// Out-of-range and duplicate indices are ignored.
    pub fn remove_decks(&mut self, indices: &[usize]) {
        remove_at(&mut self.decks, indices);
    }

    /// Append a card to the deck at `deck_index`.
    ///
    /// Question and answer are trimmed; the card is rejected when either
    /// trims to empty, mirroring deck-name validation. Returns whether a
    /// card was added.
    pub fn add_card(
        &mut self,
        deck_index: usize,
        question: &str,
        answer: &str,
        theme: CardTheme,
    ) -> bool {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return false;
        }
        let Some(deck) = self.decks.get_mut(deck_index) else {
            return false;
        };
        tracing::debug!(deck = %deck.name, question, "adding card");
        deck.cards.push(Card::new(question, answer, theme));
        true
    }

    /// Remove the cards at the given pre-removal positions within one deck.
    pub fn remove_cards(&mut self, deck_index: usize, indices: &[usize]) {
        if let Some(deck) = self.decks.get_mut(deck_index) {
            remove_at(&mut deck.cards, indices);
        }
    }
}

/// Remove elements at the given pre-removal positions.
///
/// Removing back to front keeps earlier indices stable while later ones are
/// consumed, which is what gives the batch its pre-removal semantics.
fn remove_at<T>(items: &mut Vec<T>, indices: &[usize]) {
    let mut sorted: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|&i| i < items.len())
        .collect();
    sorted.sort_unstable();
    sorted.dedup();
    for index in sorted.into_iter().rev() {
        items.remove(index);
    }
}
