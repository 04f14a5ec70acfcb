//! Game result types.

use alloc::string::String;
use core::fmt;

/// Final outcome of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single player has the highest score.
    Winner(String),
    /// The highest score is shared.
    Draw,
}

impl Outcome {
    /// Returns the winner's name, or `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Winner(name) => Some(name.as_str()),
            Self::Draw => None,
        }
    }

    /// Returns whether the game ended in a draw.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        matches!(self, Self::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(name) => f.write_str(name),
            Self::Draw => f.write_str("draw"),
        }
    }
}

/// A single scored match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// The turn (1-based) on which the match happened.
    pub turn: usize,
    /// The player credited with the match.
    pub caller: String,
    /// Points awarded, equal to the pile size at the time of the match.
    pub points: usize,
}
