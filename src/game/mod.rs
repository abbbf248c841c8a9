//! Game engine and state management.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{HAND_SIZE, standard_deck};
use crate::hand::Hand;
use crate::math::MathProblem;
use crate::options::GameOptions;
use crate::result::{Battle, GameResult, NextRound};

mod math;
mod round;
pub mod state;

pub use state::GamePhase;

/// A War game engine for exactly two players.
///
/// The game owns both hands, the deal counter, the math-game state, and the
/// random source. Player 1 and player 2 are mechanical: each round both play
/// their front card, so the only external inputs are round requests and
/// math-game answers.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Player 1's hand.
    pub player1_hand: Mutex<Hand>,
    /// Player 2's hand.
    pub player2_hand: Mutex<Hand>,
    /// Top-level rounds played since the last deal.
    deal_count: Mutex<u32>,
    /// Terminal result, once the game ends. Absorbing.
    finished: Mutex<Option<GameResult>>,
    /// One-shot advantage armed by the math game.
    advantage: Mutex<bool>,
    /// Most recent face-up pair, for display.
    last_battle: Mutex<Option<Battle>>,
    /// Current math problem, if one has been generated.
    problem: Mutex<Option<MathProblem>>,
    /// Correct answers since the game was created.
    math_score: Mutex<u32>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed. No cards are dealt yet;
    /// call [`Game::deal`] or [`Game::next_round`].
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), GamePhase::NeedsDeal);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            player1_hand: Mutex::new(Hand::new()),
            player2_hand: Mutex::new(Hand::new()),
            deal_count: Mutex::new(0),
            finished: Mutex::new(None),
            advantage: Mutex::new(false),
            last_battle: Mutex::new(None),
            problem: Mutex::new(None),
            math_score: Mutex::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Deals a new game: builds and shuffles a fresh 52-card deck and splits
    /// it evenly, first half to player 1.
    ///
    /// Resets the deal counter, the terminal result, the advantage flag, and
    /// the last-drawn display state. The math score carries over.
    pub fn deal(&self) {
        let mut deck = standard_deck();
        deck.shuffle(&mut *self.rng.lock());

        let player2_cards = deck.split_off(HAND_SIZE);
        self.player1_hand.lock().refill(deck);
        self.player2_hand.lock().refill(player2_cards);

        *self.deal_count.lock() = 0;
        *self.finished.lock() = None;
        *self.advantage.lock() = false;
        *self.last_battle.lock() = None;
    }

    /// Advances the game by one external request.
    ///
    /// When either hand is empty (nothing dealt yet, or a previous game
    /// drained a hand) this deals a new game; otherwise it plays one
    /// top-level round. There is no wrong moment to call this.
    pub fn next_round(&self) -> NextRound {
        let needs_deal =
            self.player1_hand.lock().is_empty() || self.player2_hand.lock().is_empty();

        if needs_deal {
            self.deal();
            NextRound::Dealt
        } else {
            NextRound::Played(self.play_round())
        }
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        if self.finished.lock().is_some() {
            return GamePhase::GameOver;
        }
        if self.player1_hand.lock().is_empty() || self.player2_hand.lock().is_empty() {
            return GamePhase::NeedsDeal;
        }
        GamePhase::InProgress
    }

    /// Returns both hand sizes as `(player 1, player 2)`.
    pub fn counts(&self) -> (usize, usize) {
        (self.player1_hand.lock().len(), self.player2_hand.lock().len())
    }

    /// Returns the most recently drawn face-up pair, for display.
    ///
    /// `None` before the first round of a game and after a game ends without
    /// drawing.
    pub fn last_battle(&self) -> Option<Battle> {
        *self.last_battle.lock()
    }

    /// Returns the number of top-level rounds played since the last deal.
    pub fn deal_count(&self) -> u32 {
        *self.deal_count.lock()
    }

    /// Returns the terminal result, if the game has ended.
    pub fn finished(&self) -> Option<GameResult> {
        *self.finished.lock()
    }

    /// Returns whether the one-shot advantage is currently armed.
    pub fn advantage_armed(&self) -> bool {
        *self.advantage.lock()
    }
}
