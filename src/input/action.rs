//! High-level intents produced from key events.

/// Which screen the key was pressed on.
///
/// Modal forms and the help overlay bypass the keymap entirely: while one is
/// open, the `App` routes keys to it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Root screen: the deck list.
    DeckList,
    /// One deck's cards.
    DeckView,
    /// Flip-to-reveal study screen.
    Study,
}

/// An intent emitted by the keymap and applied by the `App`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application (deck list only).
    Quit,
    /// Leave the current screen for its parent.
    Back,
    /// Toggle the help overlay.
    ToggleHelp,

    /// Move the list selection up.
    SelectPrev,
    /// Move the list selection down.
    SelectNext,
    /// Open the selected deck.
    OpenSelected,
    /// Open the new-deck form.
    NewDeck,
    /// Open the new-card form.
    NewCard,
    /// Remove the selected deck or card.
    DeleteSelected,
    /// Enter study mode for the open deck.
    StartStudy,

    /// Flip the current card between question and answer.
    Flip,
    /// Advance to the next card.
    NextCard,
    /// Step back to the previous card.
    PrevCard,
    /// Toggle random study order.
    ToggleRandom,
}
