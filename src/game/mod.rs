//! Game engine and state management.

use alloc::collections::VecDeque;
use alloc::string::ToString;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::PlayError;
use crate::options::{GameOptions, MatchCondition};
use crate::players::{MatchCaller, Players, RandomCaller};
use crate::result::{MatchRecord, Outcome};

pub mod state;

pub use state::GameState;

/// A card-matching game over a single deck.
///
/// Cards are dealt one at a time onto a pile. When the two most recent pile
/// cards satisfy the [`MatchCondition`], the player who called the match is
/// credited with the pile size and the pile is discarded.
#[derive(Debug, Clone)]
pub struct MatchGame<C = RandomCaller> {
    condition: MatchCondition,
    players: Players<C>,
    deck: Deck,
    /// Dealt cards, most recent first.
    pile: VecDeque<Card>,
    turn: usize,
    matches: Vec<MatchRecord>,
}

impl<C: MatchCaller> MatchGame<C> {
    /// Creates a game with a freshly shuffled deck built from `options`.
    ///
    /// # Example
    ///
    /// ```
    /// use snap::{GameOptions, MatchGame, Player, Players};
    ///
    /// let mut players = Players::new(1);
    /// players.add_player(Player::new("Bob", 0));
    /// players.add_player(Player::new("Alice", 0));
    ///
    /// let mut game = MatchGame::with_options(GameOptions::default(), players, 42);
    /// let outcome = game.play().unwrap();
    /// assert!(game.is_finished());
    /// assert!(outcome.is_draw() || outcome.winner().is_some());
    /// ```
    #[must_use]
    pub fn with_options(options: GameOptions, players: Players<C>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(options.packs, &mut rng);
        Self::new(options.condition, players, deck)
    }

    /// Creates a game from its parts. The deck is used as given.
    #[must_use]
    pub const fn new(condition: MatchCondition, players: Players<C>, deck: Deck) -> Self {
        Self {
            condition,
            players,
            deck,
            pile: VecDeque::new(),
            turn: 0,
            matches: Vec::new(),
        }
    }

    /// Deals the next card onto the top of the pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn next_turn(&mut self) -> Result<Card, PlayError> {
        let card = self.deck.draw()?;
        self.turn += 1;
        log::trace!("turn {}: dealt {card}", self.turn);
        self.pile.push_front(card);
        Ok(card)
    }

    /// Returns whether the top two pile cards match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        match (self.pile.front(), self.pile.get(1)) {
            (Some(top), Some(below)) => self.condition.matches(top, below),
            _ => false,
        }
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.deck.is_empty()
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_finished() {
            GameState::Finished
        } else {
            GameState::Dealing
        }
    }

    /// Plays the game until the deck is exhausted and returns the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if no players are registered. The deck is left
    /// untouched in that case.
    pub fn play(&mut self) -> Result<Outcome, PlayError> {
        if self.players.is_empty() {
            return Err(PlayError::NoPlayers);
        }

        log::info!(
            "starting game: {} cards, match condition {}, {} players",
            self.deck.len(),
            self.condition,
            self.players.len()
        );

        while !self.is_finished() {
            self.next_turn()?;

            if self.is_match() {
                let points = self.pile.len();
                let caller = self.players.who_said_match_first()?.to_string();
                self.players.add_score(&caller, points);
                log::debug!("turn {}: {caller} called the match for {points}", self.turn);
                self.matches.push(MatchRecord {
                    turn: self.turn,
                    caller,
                    points,
                });
                self.pile.clear();
            }
        }

        let outcome = self.players.who_won()?;
        log::info!(
            "game over after {} turns and {} matches, winner: {outcome}",
            self.turn,
            self.matches.len()
        );
        Ok(outcome)
    }

    /// Returns the match condition.
    #[must_use]
    pub const fn condition(&self) -> MatchCondition {
        self.condition
    }

    /// Returns the players registry.
    #[must_use]
    pub const fn players(&self) -> &Players<C> {
        &self.players
    }

    /// Returns the pile, most recently dealt card first.
    pub fn pile(&self) -> impl Iterator<Item = &Card> {
        self.pile.iter()
    }

    /// Returns the number of cards on the pile.
    #[must_use]
    pub fn pile_len(&self) -> usize {
        self.pile.len()
    }

    /// Returns the undealt deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards dealt so far.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turn
    }

    /// Returns every match scored so far, in order.
    #[must_use]
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }
}
