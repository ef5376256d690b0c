//! Hands and scoring.

use crate::card::Card;

/// Score above which a hand is busted.
pub const TARGET_SCORE: u8 = 21;

/// Scores cards by true rank value, applying the soft-ace adjustment.
///
/// Every ace starts at 11; while the total exceeds [`TARGET_SCORE`] and
/// unadjusted aces remain, 10 is subtracted per ace. The hidden flag is
/// ignored here (it is display-only), so this is the score the engine
/// uses for all of its own decisions.
#[must_use]
pub fn score_of(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.rank().value());
    }

    while total > TARGET_SCORE && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Scores only the face-up cards.
///
/// Face-down cards contribute 0 and their aces are excluded from the
/// soft-ace adjustment, so a rendered score line never discloses a hole
/// card.
#[must_use]
pub fn visible_score_of(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() && !card.is_hidden() {
            aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    while total > TARGET_SCORE && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// An ordered, append-only collection of cards held by a participant.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Clears the hand for a new game. The discarded cards are simply
    /// dropped; each game deals from a brand-new deck.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Turns every held card face up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.reveal();
        }
    }

    /// Returns the true score of the hand. See [`score_of`].
    #[must_use]
    pub fn score(&self) -> u8 {
        score_of(&self.cards)
    }

    /// Returns the score of the face-up cards. See [`visible_score_of`].
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        visible_score_of(&self.cards)
    }

    /// Returns whether the hand's true score exceeds [`TARGET_SCORE`].
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score() > TARGET_SCORE
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
