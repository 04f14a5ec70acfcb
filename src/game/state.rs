//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards remain in the deck.
    Dealing,
    /// The deck is exhausted.
    Finished,
}
