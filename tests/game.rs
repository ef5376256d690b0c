//! Engine integration tests.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use twentyone::{
    Card, DECK_SIZE, DealError, Deck, GameOutcome, Hand, HandHolder, MatchOutcome, Player, Rank,
    RngShuffle, Shuffle, Suit, TwentyOneGame, score_of, visible_score_of,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Scripted input that records every prompt it was shown.
#[derive(Clone)]
struct ScriptedInput {
    answers: Rc<RefCell<VecDeque<String>>>,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedInput {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: Rc::new(RefCell::new(
                answers.iter().map(ToString::to_string).collect(),
            )),
            prompts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn prompt_count(&self, prompt: &str) -> usize {
        self.prompts.borrow().iter().filter(|p| p == &prompt).count()
    }

    fn answers_remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl twentyone::Input for ScriptedInput {
    fn ask(&mut self, prompt: &str) -> String {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or_default()
    }
}

/// Output sink that keeps every emitted line.
#[derive(Clone, Default)]
struct RecordedOutput {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordedOutput {
    fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line == needle)
    }
}

impl twentyone::Output for RecordedOutput {
    fn line(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

/// Shuffler that stacks the deck so `draws` come off the top in order.
struct StackedShuffle {
    draws: Vec<Card>,
}

impl StackedShuffle {
    fn new(draws: &[Card]) -> Self {
        Self {
            draws: draws.to_vec(),
        }
    }
}

impl Shuffle for StackedShuffle {
    fn shuffle(&mut self, cards: &mut [Card]) {
        let mut arranged: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|c| !self.draws.contains(c))
            .collect();
        // The top of the deck is the end of the sequence.
        arranged.extend(self.draws.iter().rev().copied());
        cards.copy_from_slice(&arranged);
    }
}

fn stacked_game(
    draws: &[Card],
    answers: &[&str],
) -> (
    TwentyOneGame<ScriptedInput, RecordedOutput, StackedShuffle>,
    ScriptedInput,
    RecordedOutput,
) {
    let input = ScriptedInput::new(answers);
    let output = RecordedOutput::default();
    let game = TwentyOneGame::new(input.clone(), output.clone(), StackedShuffle::new(draws));
    (game, input, output)
}

#[test]
fn scoring_without_aces_sums_face_values() {
    let cards = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::King),
    ];
    assert_eq!(score_of(&cards), 21);

    let faces = [
        card(Suit::Hearts, Rank::Jack),
        card(Suit::Diamonds, Rank::Queen),
    ];
    assert_eq!(score_of(&faces), 20);
}

#[test]
fn soft_ace_adjusts_as_needed() {
    let blackjack = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::King),
    ];
    assert_eq!(score_of(&blackjack), 21);

    // 11 + 11 + 9 = 31, one ace drops to 1.
    let one_drop = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::Nine),
    ];
    assert_eq!(score_of(&one_drop), 21);

    // 11 + 11 + 10 + 9 = 41, both aces drop.
    let two_drops = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::King),
        card(Suit::Diamonds, Rank::Nine),
    ];
    assert_eq!(score_of(&two_drops), 21);
}

#[test]
fn bust_is_score_over_twenty_one() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ten));
    hand.add_card(card(Suit::Clubs, Rank::Eight));
    assert!(!hand.is_busted());

    hand.add_card(card(Suit::Spades, Rank::Four));
    assert_eq!(hand.score(), 22);
    assert!(hand.is_busted());
}

#[test]
fn fresh_deck_has_fifty_two_distinct_cards() {
    let mut deck = Deck::new(&mut RngShuffle::seeded(1));
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        let dealt = deck.deal_face_up().unwrap();
        assert!(seen.insert((dealt.suit(), dealt.rank())));
    }

    assert!(deck.is_empty());
    assert_eq!(deck.deal_face_up().unwrap_err(), DealError::DeckExhausted);
}

#[test]
fn face_down_deal_hides_and_reveal_all_restores() {
    let mut deck = Deck::new(&mut RngShuffle::seeded(7));
    let hole = deck.deal_face_down().unwrap();
    assert!(hole.is_hidden());
    assert_eq!(hole.value(), 0);
    assert_eq!(format!("{hole}"), "[ --- ]");

    let mut hand = Hand::new();
    hand.add_card(hole);
    hand.add_card(deck.deal_face_up().unwrap());
    hand.reveal_all();
    assert!(hand.cards().iter().all(|c| !c.is_hidden()));
}

#[test]
fn visible_score_masks_the_hole_card() {
    let mut hole = card(Suit::Spades, Rank::Nine);
    hole.hide();
    let cards = [card(Suit::Hearts, Rank::Six), hole];

    assert_eq!(visible_score_of(&cards), 6);
    assert_eq!(score_of(&cards), 15);

    // A hidden ace is excluded from the soft-ace adjustment too.
    let mut hidden_ace = card(Suit::Clubs, Rank::Ace);
    hidden_ace.hide();
    let with_ace = [card(Suit::Hearts, Rank::King), hidden_ace];
    assert_eq!(visible_score_of(&with_ace), 10);
    assert_eq!(score_of(&with_ace), 21);
}

#[test]
fn dealer_hits_under_seventeen_and_wins() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Clubs, Rank::Six),   // dealer up
        card(Suit::Spades, Rank::Seven), // player
        card(Suit::Diamonds, Rank::Nine), // dealer hole
        card(Suit::Hearts, Rank::Five), // dealer draw to 20
    ];
    let (mut game, _, output) = stacked_game(&draws, &["s", ""]);

    let outcome = game.play_one_game().unwrap();
    assert_eq!(outcome, GameOutcome::Lose);
    assert_eq!(game.player().hand().score(), 17);
    assert_eq!(game.dealer().hand().score(), 20);
    assert_eq!(game.player().purse(), Player::INITIAL_PURSE - 1);
    assert!(output.contains("Dealer wins!"));
}

#[test]
fn player_bust_skips_dealer_turn() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Seven),  // dealer up
        card(Suit::Spades, Rank::Eight), // player
        card(Suit::Diamonds, Rank::Five), // dealer hole
        card(Suit::Hearts, Rank::King),  // player hit, busting at 28
    ];
    let (mut game, input, output) = stacked_game(&draws, &["h"]);

    let outcome = game.play_one_game().unwrap();
    assert_eq!(outcome, GameOutcome::Lose);
    assert_eq!(game.player().hand().score(), 28);
    assert_eq!(game.player().purse(), Player::INITIAL_PURSE - 1);
    assert!(output.contains("You busted! Dealer wins."));

    // No dealer turn: two dealer cards, hole never revealed.
    assert_eq!(game.dealer().hand().len(), 2);
    assert!(game.dealer().hand().cards()[1].is_hidden());
    assert_eq!(input.prompt_count("Press Return to continue... "), 0);
}

#[test]
fn tie_leaves_purse_unchanged() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Clubs, Rank::King),  // dealer up
        card(Suit::Spades, Rank::Queen), // player
        card(Suit::Diamonds, Rank::Jack), // dealer hole, dealer stays at 20
    ];
    let (mut game, _, output) = stacked_game(&draws, &["s"]);

    let outcome = game.play_one_game().unwrap();
    assert_eq!(outcome, GameOutcome::Push);
    assert_eq!(game.player().purse(), Player::INITIAL_PURSE);
    assert!(output.contains("Tie game."));
}

#[test]
fn invalid_choice_reprompts_without_failing() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::King),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Diamonds, Rank::Jack),
    ];
    let (mut game, input, output) = stacked_game(&draws, &["x", "s"]);

    let outcome = game.play_one_game().unwrap();
    assert_eq!(outcome, GameOutcome::Push);
    assert!(output.contains("Sorry, that's not a valid choice."));
    assert_eq!(input.prompt_count("Hit or stay? (h/s): "), 2);
}

#[test]
fn five_straight_losses_end_the_match_broke() {
    // Same stacked deck every game: player 17, dealer draws to 20.
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Hearts, Rank::Five),
    ];
    // Four games answered with a replay, the fifth leaves the player broke.
    let answers = [
        "s", "", "y", "s", "", "y", "s", "", "y", "s", "", "y", "s", "",
    ];
    let (mut game, input, output) = stacked_game(&draws, &answers);

    let outcome = game.start().unwrap();
    assert_eq!(outcome, MatchOutcome::Broke);
    assert_eq!(game.player().purse(), 0);
    assert!(output.contains("You're broke!"));
    assert!(output.contains("Thanks for playing 21! Goodbye!"));

    // The fifth loss is terminal: no trailing play-again prompt.
    assert_eq!(input.prompt_count("Play again? (y/n): "), 4);
    assert_eq!(input.answers_remaining(), 0);
}

#[test]
fn five_straight_wins_end_the_match_rich() {
    // Player stays on 20, dealer stays on 17.
    let draws = [
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Clubs, Rank::Nine),  // dealer up
        card(Suit::Spades, Rank::King), // player
        card(Suit::Diamonds, Rank::Eight), // dealer hole
    ];
    let answers = ["s", "y", "s", "y", "s", "y", "s", "y", "s"];
    let (mut game, input, output) = stacked_game(&draws, &answers);

    let outcome = game.start().unwrap();
    assert_eq!(outcome, MatchOutcome::Rich);
    assert_eq!(game.player().purse(), Player::WINNING_PURSE);
    assert!(output.contains("You're rich!"));
    assert_eq!(input.prompt_count("Play again? (y/n): "), 4);
}

#[test]
fn declining_a_rematch_quits_the_match() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::King),
        card(Suit::Diamonds, Rank::Eight),
    ];
    let (mut game, _, output) = stacked_game(&draws, &["s", "n"]);

    let outcome = game.start().unwrap();
    assert_eq!(outcome, MatchOutcome::Quit);
    assert_eq!(game.player().purse(), Player::INITIAL_PURSE + 1);
    assert!(output.contains("Thanks for playing 21! Goodbye!"));
    assert!(!output.contains("You're broke!"));
    assert!(!output.contains("You're rich!"));
}
