//! The dealing deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, PACK, PACK_SIZE};
use crate::error::DrawError;

/// An ordered sequence of cards built from one or more packs.
///
/// Cards are dealt from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a deck of `packs` packs and shuffles it with `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use snap::Deck;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new(2, &mut rng);
    /// assert_eq!(deck.len(), 104);
    /// ```
    #[must_use]
    pub fn new<R: Rng>(packs: u8, rng: &mut R) -> Self {
        let mut deck = Self::generate(packs);
        deck.shuffle(rng);
        deck
    }

    /// Creates an unshuffled deck of `packs` consecutive copies of [`PACK`].
    ///
    /// Zero packs yields an empty deck.
    #[must_use]
    pub fn generate(packs: u8) -> Self {
        let mut cards = VecDeque::with_capacity(packs as usize * PACK_SIZE);
        for _ in 0..packs {
            cards.extend(PACK);
        }
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`, front first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Shuffles the deck in place (Fisher-Yates).
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop_front().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the remaining cards, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
