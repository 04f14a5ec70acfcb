//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when querying the players registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No players are registered.
    #[error("no players are registered")]
    NoPlayers,
    /// The match caller picked a player that is not registered.
    #[error("match caller picked player {index} of {len}")]
    InvalidCaller {
        /// Index returned by the caller.
        index: usize,
        /// Number of registered players.
        len: usize,
    },
}

/// Errors that can occur while playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// No players are registered.
    #[error("no players are registered")]
    NoPlayers,
    /// The match caller picked a player that is not registered.
    #[error("match caller picked player {index} of {len}")]
    InvalidCaller {
        /// Index returned by the caller.
        index: usize,
        /// Number of registered players.
        len: usize,
    },
}

impl From<DrawError> for PlayError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

impl From<RosterError> for PlayError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::NoPlayers => Self::NoPlayers,
            RosterError::InvalidCaller { index, len } => Self::InvalidCaller { index, len },
        }
    }
}
