//! A terminal Twenty-One card game engine with purse-based match play.
//!
//! The crate provides a [`TwentyOneGame`] engine that runs a match of
//! independent games over one purse: dealing, the player's hit-or-stay
//! turn, the dealer's deterministic draw-to-17 turn, and settlement.
//! Console I/O and shuffling are injected capabilities, so the whole
//! match is scriptable in tests.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{StdInput, StdOutput, TwentyOneGame};
//!
//! let mut game = TwentyOneGame::with_seed(StdInput, StdOutput, 42);
//! let _ = game.start();
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod participant;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, RngShuffle, Shuffle};
pub use error::DealError;
pub use game::{DEALER_MUST_STAY_SCORE, GameOutcome, MatchOutcome, PlayerChoice, TwentyOneGame};
pub use hand::{Hand, TARGET_SCORE, score_of, visible_score_of};
pub use io::{Input, Output, StdInput, StdOutput};
pub use participant::{Dealer, HandHolder, Player};
