//! Player and dealer participants.

use crate::hand::Hand;

/// Access to a participant's hand of cards.
///
/// Both participants hold a [`Hand`]; this trait is the seam the engine
/// uses when it does not care which side of the table it is dealing to.
pub trait HandHolder {
    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;
}

/// The human player: a hand plus a purse.
#[derive(Debug, Clone)]
pub struct Player {
    hand: Hand,
    purse: u32,
}

impl Player {
    /// Purse the player starts a match with.
    pub const INITIAL_PURSE: u32 = 5;

    /// Purse at which the player walks away rich.
    pub const WINNING_PURSE: u32 = 2 * Self::INITIAL_PURSE;

    /// Creates a player with an empty hand and the initial purse.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            purse: Self::INITIAL_PURSE,
        }
    }

    /// Returns the current purse.
    #[must_use]
    pub const fn purse(&self) -> u32 {
        self.purse
    }

    /// Adds one unit to the purse.
    pub const fn win_bet(&mut self) {
        self.purse += 1;
    }

    /// Removes one unit from the purse.
    pub const fn lose_bet(&mut self) {
        self.purse = self.purse.saturating_sub(1);
    }

    /// Returns whether the purse is empty. Terminal for the match.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.purse == 0
    }

    /// Returns whether the purse reached [`Self::WINNING_PURSE`].
    /// Terminal for the match.
    #[must_use]
    pub const fn is_rich(&self) -> bool {
        self.purse >= Self::WINNING_PURSE
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl HandHolder for Player {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// The dealer: a hand and nothing else.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }
}

impl HandHolder for Dealer {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
