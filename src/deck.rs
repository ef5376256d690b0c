//! Deck construction, shuffling, and dealing.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// A shuffle-in-place capability over a sequence of cards.
///
/// The production implementation is [`RngShuffle`]; tests substitute a
/// deterministic shuffler to stack the deck.
pub trait Shuffle {
    /// Permutes `cards` in place.
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// Uniformly random shuffling backed by a seeded RNG.
pub struct RngShuffle<R> {
    rng: R,
}

impl RngShuffle<ChaCha8Rng> {
    /// Creates a shuffler seeded from a `u64`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngShuffle<R> {
    /// Creates a shuffler from an existing RNG.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shuffle for RngShuffle<R> {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// A shuffled deck of 52 distinct cards.
///
/// A deck lives for exactly one game: built fresh, drawn down, then
/// dropped. Dealt cards are never returned to it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full 52-card set and shuffles it once.
    pub fn new<S: Shuffle + ?Sized>(shuffler: &mut S) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        shuffler.shuffle(&mut cards);
        Self { cards }
    }

    /// Builds a deck with an exact card order.
    ///
    /// The last card is the top of the deck (dealt first). Intended for
    /// tests and tools that need a known layout.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Deals the top card face up.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the deck is empty. The
    /// engine never draws more than 52 cards in one game, so hitting
    /// this indicates a caller bug rather than a playable situation.
    pub fn deal_face_up(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::DeckExhausted)
    }

    /// Deals the top card face down.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the deck is empty.
    pub fn deal_face_down(&mut self) -> Result<Card, DealError> {
        let mut card = self.deal_face_up()?;
        card.hide();
        Ok(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
