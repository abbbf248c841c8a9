//! Round and game outcome types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 1 (receives the first half of the deal and the math-game
    /// advantage).
    One,
    /// Player 2.
    Two,
}

/// A pair of face-up cards drawn in one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battle {
    /// Player 1's face-up card.
    pub player1_card: Card,
    /// Player 2's face-up card.
    pub player2_card: Card,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// A hand ran out of cards, either between rounds or during a war.
    Exhausted,
    /// The deal ceiling was reached.
    DealLimit,
}

/// Terminal result of a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The winner, or `None` for a tie.
    pub winner: Option<Player>,
    /// Why the game ended.
    pub reason: EndReason,
    /// Player 1's hand size at termination.
    pub player1_count: usize,
    /// Player 2's hand size at termination.
    pub player2_count: usize,
}

/// Outcome of one top-level round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// One player's face-up card won the pile.
    ///
    /// `battles` lists every face-up pair drawn this round in order; more
    /// than one entry means wars were fought before the round resolved.
    RoundWon {
        /// The player who took the pile.
        winner: Player,
        /// Every face-up pair drawn this round, in order.
        battles: Vec<Battle>,
    },
    /// Player 1 took the pile through an armed math-game advantage,
    /// without any comparison. The advantage is consumed.
    AdvantageWin {
        /// The face-up pair drawn before the pile was awarded.
        battle: Battle,
    },
    /// The game ended, either before drawing or during a war.
    GameOver(GameResult),
}

/// What happened in response to a round request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextRound {
    /// A new game was dealt instead of playing a round.
    Dealt,
    /// A round was played.
    Played(RoundOutcome),
}
