//! Study session navigation.
//!
//! A session is a transient view over one deck's cards: it owns a snapshot
//! of the card list plus an order permutation, a current position, and the
//! flip state. It is created when study mode is entered and dropped when the
//! study screen closes; nothing here ever flows back into the deck.
//!
//! The permutation is either the identity (sequential mode) or a uniform
//! shuffle (random mode). Toggling the mode re-derives the permutation and
//! resets position and flip, so the card multiset is preserved by
//! construction.

use rand::seq::SliceRandom;

use crate::model::Card;

/// Navigation state over one deck's cards.
#[derive(Debug)]
pub struct StudySession {
    cards: Vec<Card>,
    order: Vec<usize>,
    current: usize,
    flipped: bool,
    random: bool,
}

impl StudySession {
    /// Start a session in sequential order at the first card.
    pub fn new(cards: Vec<Card>) -> Self {
        let order = (0..cards.len()).collect();
        Self {
            cards,
            order,
            current: 0,
            flipped: false,
            random: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_random(&self) -> bool {
        self.random
    }

    /// The card under the cursor, or `None` for an empty session.
    ///
    /// Callers gate display on emptiness; no navigation operation is
    /// required to succeed on an empty session.
    pub fn current_card(&self) -> Option<&Card> {
        self.order.get(self.current).map(|&i| &self.cards[i])
    }

    /// 1-based position and total, for the "Card k of n" indicator.
    pub fn position(&self) -> (usize, usize) {
        if self.order.is_empty() {
            (0, 0)
        } else {
            (self.current + 1, self.order.len())
        }
    }

    /// Switch between sequential and random order.
    ///
    /// Random order is a fresh uniform shuffle each time it is switched on;
    /// sequential restores the deck's original order. Both reset the
    /// position to the first card, question side up.
    pub fn set_random(&mut self, random: bool) {
        self.random = random;
        self.order = (0..self.cards.len()).collect();
        if random {
            self.order.shuffle(&mut rand::rng());
        }
        self.current = 0;
        self.flipped = false;
        tracing::debug!(random, "study order changed");
    }

    pub fn toggle_random(&mut self) {
        self.set_random(!self.random);
    }

    /// Advance to the next card, wrapping last to first. Resets the flip.
    pub fn next(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.order.len();
        self.flipped = false;
    }

    /// Step back to the previous card, wrapping first to last. Resets the
    /// flip.
    pub fn previous(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.current = (self.current + self.order.len() - 1) % self.order.len();
        self.flipped = false;
    }

    /// Flip between question and answer; the position never moves.
    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardTheme;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("q{i}"), format!("a{i}"), CardTheme::Blue))
            .collect()
    }

    fn questions(session: &StudySession) -> Vec<String> {
        session
            .order
            .iter()
            .map(|&i| session.cards[i].question.clone())
            .collect()
    }

    #[test]
    fn starts_at_first_card_question_side() {
        let session = StudySession::new(cards(3));
        assert_eq!(session.current_card().unwrap().question, "q0");
        assert!(!session.is_flipped());
        assert!(!session.is_random());
        assert_eq!(session.position(), (1, 3));
    }

    #[test]
    fn next_n_times_returns_to_start() {
        let mut session = StudySession::new(cards(5));
        for _ in 0..5 {
            session.next();
        }
        assert_eq!(session.position(), (1, 5));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut session = StudySession::new(cards(4));
        session.previous();
        assert_eq!(session.position(), (4, 4));
        assert_eq!(session.current_card().unwrap().question, "q3");
    }

    #[test]
    fn navigation_resets_flip() {
        let mut session = StudySession::new(cards(2));
        session.toggle_flip();
        assert!(session.is_flipped());
        session.next();
        assert!(!session.is_flipped());

        session.toggle_flip();
        session.previous();
        assert!(!session.is_flipped());
    }

    #[test]
    fn toggle_flip_twice_is_identity_and_never_moves() {
        let mut session = StudySession::new(cards(3));
        session.next();
        let before = session.position();
        session.toggle_flip();
        session.toggle_flip();
        assert!(!session.is_flipped());
        assert_eq!(session.position(), before);
    }

    #[test]
    fn shuffle_preserves_the_card_multiset() {
        let mut session = StudySession::new(cards(10));
        session.set_random(true);

        let mut shuffled = questions(&session);
        let mut original: Vec<String> = (0..10).map(|i| format!("q{i}")).collect();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn random_round_trip_restores_original_order() {
        let mut session = StudySession::new(cards(8));
        session.set_random(true);
        session.set_random(false);

        let expected: Vec<String> = (0..8).map(|i| format!("q{i}")).collect();
        assert_eq!(questions(&session), expected);
    }

    #[test]
    fn toggling_order_resets_position_and_flip() {
        let mut session = StudySession::new(cards(6));
        session.next();
        session.next();
        session.toggle_flip();

        session.toggle_random();
        assert!(session.is_random());
        assert_eq!(session.position(), (1, 6));
        assert!(!session.is_flipped());

        session.next();
        session.toggle_random();
        assert!(!session.is_random());
        assert_eq!(session.position(), (1, 6));
    }

    #[test]
    fn empty_session_is_all_no_ops() {
        let mut session = StudySession::new(Vec::new());
        assert!(session.is_empty());
        assert!(session.current_card().is_none());
        assert_eq!(session.position(), (0, 0));

        session.next();
        session.previous();
        session.toggle_random();
        assert!(session.current_card().is_none());
        assert_eq!(session.position(), (0, 0));
    }
}
