//! Game configuration options.

use core::fmt;

use crate::card::Card;

/// The rule deciding whether the top two pile cards match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchCondition {
    /// Both cards share a suit.
    #[default]
    Suits,
    /// Both cards share a value.
    Values,
    /// Both cards share suit and value (only possible across packs).
    SuitAndValue,
}

impl MatchCondition {
    /// Returns whether `top` and `below` match under this condition.
    #[must_use]
    pub fn matches(self, top: &Card, below: &Card) -> bool {
        match self {
            Self::Suits => top.suit == below.suit,
            Self::Values => top.value == below.value,
            Self::SuitAndValue => top.suit == below.suit && top.value == below.value,
        }
    }

    /// Returns the name of the condition.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Suits => "Suits",
            Self::Values => "Values",
            Self::SuitAndValue => "SuitAndValue",
        }
    }
}

impl fmt::Display for MatchCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration options for a match game.
///
/// ```
/// use snap::{GameOptions, MatchCondition};
///
/// let options = GameOptions::default()
///     .with_packs(1)
///     .with_condition(MatchCondition::Values);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of packs in the deck.
    pub packs: u8,
    /// Match condition for the whole game.
    pub condition: MatchCondition,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: 3,
            condition: MatchCondition::Suits,
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use snap::GameOptions;
    ///
    /// let options = GameOptions::default().with_packs(6);
    /// assert_eq!(options.packs, 6);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the match condition.
    ///
    /// # Example
    ///
    /// ```
    /// use snap::{GameOptions, MatchCondition};
    ///
    /// let options = GameOptions::default().with_condition(MatchCondition::SuitAndValue);
    /// assert_eq!(options.condition, MatchCondition::SuitAndValue);
    /// ```
    #[must_use]
    pub const fn with_condition(mut self, condition: MatchCondition) -> Self {
        self.condition = condition;
        self
    }
}
