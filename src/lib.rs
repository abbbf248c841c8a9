//! A War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full game flow:
//! dealing, round resolution (including nested wars), the deal ceiling, and
//! an arithmetic side-game whose correct answers arm a one-shot advantage
//! for player 1's next round.
//!
//! All outcomes are returned as enumerated types ([`RoundOutcome`],
//! [`GameResult`], [`Grade`]); rendering them is left to the caller.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, NextRound};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! assert_eq!(game.next_round(), NextRound::Dealt);
//! assert_eq!(game.counts(), (26, 26));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod math;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit, standard_deck};
pub use error::AnswerError;
pub use game::{Game, GamePhase};
pub use hand::Hand;
pub use math::{Grade, MathOp, MathProblem};
pub use options::{GameOptions, MAX_DEALS, WAR_FACE_DOWN};
pub use result::{Battle, EndReason, GameResult, NextRound, Player, RoundOutcome};
