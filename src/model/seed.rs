//! Built-in demo decks shown on first launch.
//!
//! Purely default content: `--no-seed` or `--decks` replaces it entirely.

use super::{Card, CardTheme, Deck};

/// The four demo decks, five cards each.
pub fn demo_decks() -> Vec<Deck> {
    vec![
        Deck {
            name: "Calculus".to_string(),
            cards: vec![
                Card::new(
                    "What is the derivative of x^n?",
                    "nx^(n-1)",
                    CardTheme::Blue,
                ),
                Card::new(
                    "What is the integral of x^n dx?",
                    "x^(n+1)/(n+1) + C, n \u{2260} -1",
                    CardTheme::Green,
                ),
                Card::new(
                    "What is the derivative of sin(x)?",
                    "cos(x)",
                    CardTheme::Purple,
                ),
                Card::new(
                    "What is the integral of cos(x) dx?",
                    "sin(x) + C",
                    CardTheme::Orange,
                ),
                Card::new(
                    "What is the derivative of e^x?",
                    "e^x",
                    CardTheme::GradientBlue,
                ),
            ],
        },
        Deck {
            name: "Deep Learning".to_string(),
            cards: vec![
                Card::new(
                    "What is a neural network?",
                    "A network of interconnected nodes organized in layers to process data and learn patterns",
                    CardTheme::Blue,
                ),
                Card::new(
                    "What is backpropagation?",
                    "An algorithm to update neural network weights by propagating errors backward",
                    CardTheme::Green,
                ),
                Card::new(
                    "What does a loss function measure?",
                    "The difference between predicted and actual outputs",
                    CardTheme::Purple,
                ),
                Card::new(
                    "What is an activation function?",
                    "A function that introduces non-linearity to neural network layers, e.g., ReLU, sigmoid",
                    CardTheme::Orange,
                ),
                Card::new(
                    "What is overfitting in deep learning?",
                    "When a model learns training data too well, including noise, and performs poorly on new data",
                    CardTheme::GradientBlue,
                ),
            ],
        },
        Deck {
            name: "Data Structures".to_string(),
            cards: vec![
                Card::new(
                    "What is a stack?",
                    "A LIFO (Last In, First Out) data structure where elements are added and removed from the top",
                    CardTheme::Blue,
                ),
                Card::new(
                    "What is the time complexity of inserting into a binary search tree?",
                    "O(log n) average case, O(n) worst case",
                    CardTheme::Green,
                ),
                Card::new(
                    "What is a queue?",
                    "A FIFO (First In, First Out) data structure where elements are added at the rear and removed from the front",
                    CardTheme::Purple,
                ),
                Card::new(
                    "What is a linked list?",
                    "A linear collection of nodes where each node contains data and a reference to the next node",
                    CardTheme::Orange,
                ),
                Card::new(
                    "What is the space complexity of a hash table?",
                    "O(n) where n is the number of entries",
                    CardTheme::GradientBlue,
                ),
            ],
        },
        Deck {
            name: "Algorithms".to_string(),
            cards: vec![
                Card::new(
                    "What is the time complexity of binary search?",
                    "O(log n)",
                    CardTheme::Blue,
                ),
                Card::new(
                    "What does bubble sort do?",
                    "Repeatedly swaps adjacent elements if they are in the wrong order",
                    CardTheme::Green,
                ),
                Card::new(
                    "What is Dijkstra\u{2019}s algorithm used for?",
                    "Finding the shortest path in a weighted graph with non-negative weights",
                    CardTheme::Purple,
                ),
                Card::new(
                    "What is the time complexity of quicksort (average case)?",
                    "O(n log n)",
                    CardTheme::Orange,
                ),
                Card::new(
                    "What is a greedy algorithm?",
                    "An algorithm that makes the locally optimal choice at each step to find a global optimum",
                    CardTheme::GradientPink,
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_collection_shape() {
        let decks = demo_decks();
        assert_eq!(decks.len(), 4);
        for deck in &decks {
            assert_eq!(deck.cards.len(), 5, "deck {:?}", deck.name);
        }
    }

    #[test]
    fn demo_deck_names() {
        let names: Vec<_> = demo_decks().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            ["Calculus", "Deep Learning", "Data Structures", "Algorithms"]
        );
    }
}
