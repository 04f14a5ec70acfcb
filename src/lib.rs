//! A card-matching (snap) game simulation with optional `no_std` support.
//!
//! A shared [`Deck`] is dealt one card at a time onto a pile. When the top
//! two pile cards satisfy the configured [`MatchCondition`], a player is
//! credited with the pile size and the pile is discarded. [`MatchGame`]
//! drives the whole game and reports the [`Outcome`].
//!
//! # Example
//!
//! ```
//! use snap::{GameOptions, MatchCondition, MatchGame, Player, Players};
//!
//! let mut players = Players::new(7);
//! players.add_player(Player::new("Bob", 0));
//! players.add_player(Player::new("Alice", 0));
//!
//! let options = GameOptions::default().with_condition(MatchCondition::Values);
//! let mut game = MatchGame::with_options(options, players, 42);
//! let outcome = game.play().unwrap();
//! println!("Winner is {outcome}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod players;
pub mod result;

// Re-export main types
pub use card::{Card, PACK, PACK_SIZE, Suit, Value};
pub use deck::Deck;
pub use error::{DrawError, PlayError, RosterError};
pub use game::{GameState, MatchGame};
pub use options::{GameOptions, MatchCondition};
pub use players::{MatchCaller, Player, Players, RandomCaller};
pub use result::{MatchRecord, Outcome};
