//! Players registry and match arbitration.

use alloc::string::String;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::RosterError;
use crate::result::Outcome;

/// A player and their running score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique player name.
    pub name: String,
    /// Accumulated score.
    pub score: usize,
}

impl Player {
    /// Creates a new player with a starting score.
    #[must_use]
    pub fn new(name: impl Into<String>, score: usize) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Decides which player called a match first.
pub trait MatchCaller {
    /// Returns the index into `players` of the player who called first.
    ///
    /// `players` is never empty when called by [`Players`]. An index past the
    /// end is reported as [`RosterError::InvalidCaller`].
    fn first_to_call(&mut self, players: &[Player]) -> usize;
}

/// Picks the caller uniformly at random.
///
/// Stands in for real arbitration between players racing to call a match.
#[derive(Debug, Clone)]
pub struct RandomCaller {
    rng: ChaCha8Rng,
}

impl RandomCaller {
    /// Creates a caller seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a caller drawing from `rng`.
    #[must_use]
    pub const fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl MatchCaller for RandomCaller {
    fn first_to_call(&mut self, players: &[Player]) -> usize {
        self.rng.random_range(0..players.len())
    }
}

/// The set of players in a game.
///
/// Names are expected to be unique; the registry does not enforce it.
#[derive(Debug, Clone)]
pub struct Players<C = RandomCaller> {
    players: Vec<Player>,
    caller: C,
}

impl Players<RandomCaller> {
    /// Creates an empty registry whose match caller is seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use snap::{Player, Players};
    ///
    /// let mut players = Players::new(42);
    /// players.add_player(Player::new("Bob", 0));
    /// players.add_player(Player::new("Alice", 0));
    /// assert_eq!(players.len(), 2);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_caller(RandomCaller::new(seed))
    }
}

impl<C: MatchCaller> Players<C> {
    /// Creates an empty registry with a custom match caller.
    #[must_use]
    pub const fn with_caller(caller: C) -> Self {
        Self {
            players: Vec::new(),
            caller,
        }
    }

    /// Registers a player.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Adds `amount` to the score of every player named `name`.
    ///
    /// Does nothing if no player has that name.
    pub fn add_score(&mut self, name: &str, amount: usize) {
        for player in self.players.iter_mut().filter(|p| p.name == name) {
            player.score += amount;
        }
    }

    /// Returns the name of the player who called the match first.
    ///
    /// # Errors
    ///
    /// Returns an error if no players are registered or the match caller
    /// picks an index outside the registry.
    pub fn who_said_match_first(&mut self) -> Result<&str, RosterError> {
        if self.players.is_empty() {
            return Err(RosterError::NoPlayers);
        }

        let index = self.caller.first_to_call(&self.players);
        self.players
            .get(index)
            .map(|p| p.name.as_str())
            .ok_or(RosterError::InvalidCaller {
                index,
                len: self.players.len(),
            })
    }

    /// Determines the winner.
    ///
    /// A lone player always wins. Otherwise the two highest scores are
    /// compared and equal scores yield [`Outcome::Draw`].
    ///
    /// # Errors
    ///
    /// Returns an error if no players are registered.
    pub fn who_won(&self) -> Result<Outcome, RosterError> {
        let standings = self.standings();
        match standings.as_slice() {
            [] => Err(RosterError::NoPlayers),
            [only] => Ok(Outcome::Winner(only.name.clone())),
            [first, second, ..] if first.score == second.score => Ok(Outcome::Draw),
            [first, ..] => Ok(Outcome::Winner(first.name.clone())),
        }
    }

    /// Returns the players sorted by score, highest first.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Returns the player named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Returns an iterator over the players in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Returns the number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns whether no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the sum of all scores.
    #[must_use]
    pub fn total_score(&self) -> usize {
        self.players.iter().map(|p| p.score).sum()
    }
}
