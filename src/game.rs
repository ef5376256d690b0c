//! The Twenty-One match engine.
//!
//! A match is a sequence of independent games sharing one purse. Each
//! game runs deal, player turn, dealer turn (skipped on a player bust),
//! and settlement; the match ends when the player goes broke, gets
//! rich, or declines to continue.

use core::cmp::Ordering;

use rand_chacha::ChaCha8Rng;

use crate::deck::{Deck, RngShuffle, Shuffle};
use crate::error::DealError;
use crate::hand::Hand;
use crate::io::{Input, Output};
use crate::participant::{Dealer, HandHolder, Player};

/// Score at or above which the dealer must stay.
pub const DEALER_MUST_STAY_SCORE: u8 = 17;

/// Accepted token for hitting.
const HIT: &str = "h";
/// Accepted token for staying.
const STAY: &str = "s";

/// The player's decision at a hit-or-stay prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerChoice {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

/// Result of one game, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Player wins; the purse gains one unit.
    Win,
    /// Player loses; the purse drops one unit.
    Lose,
    /// Tie; the purse is unchanged.
    Push,
}

/// How a whole match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The purse hit zero.
    Broke,
    /// The purse reached [`Player::WINNING_PURSE`].
    Rich,
    /// The player declined another game.
    Quit,
}

/// A Twenty-One match engine.
///
/// The engine owns both participants and drives the whole match through
/// the injected [`Input`], [`Output`], and [`Shuffle`] capabilities.
///
/// # Example
///
/// ```no_run
/// use twentyone::{StdInput, StdOutput, TwentyOneGame};
///
/// let mut game = TwentyOneGame::with_seed(StdInput, StdOutput, 42);
/// let _ = game.start();
/// ```
pub struct TwentyOneGame<I, O, S> {
    player: Player,
    dealer: Dealer,
    input: I,
    output: O,
    shuffler: S,
}

impl<I: Input, O: Output> TwentyOneGame<I, O, RngShuffle<ChaCha8Rng>> {
    /// Creates an engine whose decks are shuffled by a ChaCha8 RNG
    /// seeded from `seed`.
    #[must_use]
    pub fn with_seed(input: I, output: O, seed: u64) -> Self {
        Self::new(input, output, RngShuffle::seeded(seed))
    }
}

impl<I: Input, O: Output, S: Shuffle> TwentyOneGame<I, O, S> {
    /// Creates an engine with explicit capabilities.
    #[must_use]
    pub fn new(input: I, output: O, shuffler: S) -> Self {
        Self {
            player: Player::new(),
            dealer: Dealer::new(),
            input,
            output,
            shuffler,
        }
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Plays a full match and reports how it ended.
    ///
    /// Games repeat until the player is broke, rich, or answers no at
    /// the play-again prompt; the broke and rich checks come strictly
    /// after settlement and suppress the prompt.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if a game draws through the
    /// whole deck, which no legitimate game does.
    pub fn start(&mut self) -> Result<MatchOutcome, DealError> {
        self.display_welcome();

        let outcome = loop {
            self.play_one_game()?;
            if self.player.is_broke() {
                break MatchOutcome::Broke;
            }
            if self.player.is_rich() {
                break MatchOutcome::Rich;
            }
            if !self.play_again() {
                break MatchOutcome::Quit;
            }
        };

        match outcome {
            MatchOutcome::Broke => self.output.line("You're broke!"),
            MatchOutcome::Rich => self.output.line("You're rich!"),
            MatchOutcome::Quit => {}
        }

        self.display_goodbye();
        Ok(outcome)
    }

    /// Plays one game from a fresh deck and settles the purse.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the deck runs out.
    pub fn play_one_game(&mut self) -> Result<GameOutcome, DealError> {
        let mut deck = self.deal_cards()?;
        self.show_cards();
        self.show_purse();

        self.player_turn(&mut deck)?;
        if !self.player.hand().is_busted() {
            self.dealer_turn(&mut deck)?;
        }

        self.show_cards();
        let outcome = self.outcome();
        self.display_result(outcome);

        self.update_purse(outcome);
        self.show_purse();
        Ok(outcome)
    }

    /// Resets both hands and deals the opening cards from a new deck.
    ///
    /// Order: player up, dealer up, player up, dealer down (the hole
    /// card).
    fn deal_cards(&mut self) -> Result<Deck, DealError> {
        let mut deck = Deck::new(&mut self.shuffler);
        self.player.hand_mut().reset();
        self.dealer.hand_mut().reset();

        self.player.hand_mut().add_card(deck.deal_face_up()?);
        self.dealer.hand_mut().add_card(deck.deal_face_up()?);
        self.player.hand_mut().add_card(deck.deal_face_up()?);
        self.dealer.hand_mut().add_card(deck.deal_face_down()?);

        Ok(deck)
    }

    /// Prompts hit-or-stay until the player stays or busts.
    fn player_turn(&mut self, deck: &mut Deck) -> Result<(), DealError> {
        while self.hit_or_stay() == PlayerChoice::Hit {
            self.hit_player(deck)?;
            if self.player.hand().is_busted() {
                break;
            }
        }
        Ok(())
    }

    /// Reveals the hole card, then draws until reaching
    /// [`DEALER_MUST_STAY_SCORE`]. Input-free: the dealer never
    /// chooses, and its decisions read true card values.
    fn dealer_turn(&mut self, deck: &mut Deck) -> Result<(), DealError> {
        self.dealer.hand_mut().reveal_all();
        self.show_cards();

        while self.dealer.hand().score() < DEALER_MUST_STAY_SCORE {
            self.dealer_continue();
            self.hit_dealer(deck)?;
        }
        Ok(())
    }

    fn hit_player(&mut self, deck: &mut Deck) -> Result<(), DealError> {
        self.player.hand_mut().add_card(deck.deal_face_up()?);
        if !self.player.hand().is_busted() {
            self.show_cards();
        }
        Ok(())
    }

    fn hit_dealer(&mut self, deck: &mut Deck) -> Result<(), DealError> {
        self.dealer.hand_mut().add_card(deck.deal_face_up()?);
        if !self.dealer.hand().is_busted() {
            self.show_cards();
        }
        Ok(())
    }

    /// Validated hit-or-stay prompt; re-asks until `h` or `s`.
    fn hit_or_stay(&mut self) -> PlayerChoice {
        loop {
            let answer = self.input.ask("Hit or stay? (h/s): ").to_lowercase();
            match answer.as_str() {
                HIT => return PlayerChoice::Hit,
                STAY => return PlayerChoice::Stay,
                _ => self.display_invalid_choice(),
            }
        }
    }

    /// Validated play-again prompt; re-asks until `y` or `n`.
    fn play_again(&mut self) -> bool {
        loop {
            let answer = self.input.ask("Play again? (y/n): ").to_lowercase();
            match answer.as_str() {
                "y" => return true,
                "n" => return false,
                _ => self.display_invalid_choice(),
            }
        }
    }

    /// Paces the dealer's draws; any answer continues.
    fn dealer_continue(&mut self) {
        let _ = self.input.ask("Press Return to continue... ");
    }

    /// Decides the game: busts first, then strict score comparison.
    fn outcome(&self) -> GameOutcome {
        if self.player.hand().is_busted() {
            return GameOutcome::Lose;
        }
        if self.dealer.hand().is_busted() {
            return GameOutcome::Win;
        }

        match self.player.hand().score().cmp(&self.dealer.hand().score()) {
            Ordering::Greater => GameOutcome::Win,
            Ordering::Less => GameOutcome::Lose,
            Ordering::Equal => GameOutcome::Push,
        }
    }

    /// Moves the purse by exactly one unit, or not at all on a push.
    fn update_purse(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.player.win_bet(),
            GameOutcome::Lose => self.player.lose_bet(),
            GameOutcome::Push => {}
        }
    }

    fn show_cards(&mut self) {
        Self::show_hand(&mut self.output, "Dealer's Cards", self.dealer.hand());
        Self::show_hand(&mut self.output, "Your Cards", self.player.hand());
    }

    /// Renders one hand with its visible score, the hole card masked.
    fn show_hand(output: &mut O, caption: &str, hand: &Hand) {
        output.line(caption);
        output.line("");
        for card in hand.cards() {
            output.line(&format!("  {card}"));
        }
        output.line("");
        output.line(&format!("  Points: {}", hand.visible_score()));
        output.line("");
    }

    fn show_purse(&mut self) {
        self.output
            .line(&format!("You have ${}", self.player.purse()));
        self.output.line("");
    }

    fn display_result(&mut self, outcome: GameOutcome) {
        let text = if self.player.hand().is_busted() {
            "You busted! Dealer wins."
        } else if self.dealer.hand().is_busted() {
            "Dealer busted! You win."
        } else {
            match outcome {
                GameOutcome::Win => "You win!",
                GameOutcome::Lose => "Dealer wins!",
                GameOutcome::Push => "Tie game.",
            }
        };
        self.output.line(text);
        self.output.line("");
    }

    fn display_invalid_choice(&mut self) {
        self.output.line("Sorry, that's not a valid choice.");
        self.output.line("");
    }

    fn display_welcome(&mut self) {
        self.output.line("Welcome to 21!");
        self.output.line("");
    }

    fn display_goodbye(&mut self) {
        self.output.line("Thanks for playing 21! Goodbye!");
    }
}
