//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    ///
    /// A single game cannot legitimately draw through all 52 cards, so
    /// this signals a caller bug, not a recoverable table situation.
    #[error("no cards left in the deck")]
    DeckExhausted,
}
