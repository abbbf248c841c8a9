use core::cmp::Ordering;

use alloc::vec::Vec;

use rand::seq::SliceRandom;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::{Battle, EndReason, GameResult, Player, RoundOutcome};

use super::Game;

impl Game {
    /// Plays one top-level round to completion, including any wars.
    ///
    /// A round draws one face-up card per player and awards the stake to the
    /// strictly higher card. Equal values start a war: both players commit
    /// face-down cards (up to `options.war_face_down`, fewer if a hand runs
    /// short) and draw again, with the stake carried over, until the tie
    /// breaks or a hand is exhausted.
    ///
    /// Terminal conditions are not errors:
    /// - a hand already empty on entry ends the whole game by hand-size
    ///   comparison;
    /// - reaching the deal ceiling ends the game the same way, without
    ///   drawing;
    /// - a hand drained during a war ends the game with the in-flight stake
    ///   abandoned.
    ///
    /// Once the game has ended, further calls return the same
    /// [`RoundOutcome::GameOver`] without touching the hands.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "hand locks are held for the entire round"
    )]
    #[expect(
        clippy::missing_panics_doc,
        reason = "draws are guarded by emptiness checks"
    )]
    pub fn play_round(&self) -> RoundOutcome {
        if let Some(result) = *self.finished.lock() {
            return RoundOutcome::GameOver(result);
        }

        let mut p1 = self.player1_hand.lock();
        let mut p2 = self.player2_hand.lock();

        if p1.is_empty() || p2.is_empty() {
            *self.last_battle.lock() = None;
            return self.finish(&p1, &p2, EndReason::Exhausted);
        }

        {
            let mut deal_count = self.deal_count.lock();
            *deal_count += 1;
            if *deal_count >= self.options.max_deals {
                *self.last_battle.lock() = None;
                return self.finish(&p1, &p2, EndReason::DealLimit);
            }
        }

        let mut pile: Vec<Card> = Vec::new();
        let mut battles: Vec<Battle> = Vec::new();

        loop {
            // Both hands are non-empty here: checked on entry, and
            // re-checked after every war contribution.
            let card1 = p1.draw().expect("hand is non-empty before each draw");
            let card2 = p2.draw().expect("hand is non-empty before each draw");

            let battle = Battle {
                player1_card: card1,
                player2_card: card2,
            };
            pile.push(card1);
            pile.push(card2);
            battles.push(battle);
            *self.last_battle.lock() = Some(battle);

            // The one-shot advantage only applies to a fresh round, never to
            // a war continuation, and skips the comparison entirely.
            if battles.len() == 1 && *self.advantage.lock() {
                pile.shuffle(&mut *self.rng.lock());
                p1.award(pile);
                *self.advantage.lock() = false;
                return RoundOutcome::AdvantageWin { battle };
            }

            match card1.value().cmp(&card2.value()) {
                Ordering::Greater => {
                    p1.award(pile);
                    return RoundOutcome::RoundWon {
                        winner: Player::One,
                        battles,
                    };
                }
                Ordering::Less => {
                    p2.award(pile);
                    return RoundOutcome::RoundWon {
                        winner: Player::Two,
                        battles,
                    };
                }
                Ordering::Equal => {}
            }

            // War: both players commit face-down cards to the stake, fewer
            // if a hand runs short.
            let mut stakes1 = Vec::new();
            let mut stakes2 = Vec::new();
            for _ in 0..self.options.war_face_down {
                if let Some(card) = p1.draw() {
                    stakes1.push(card);
                }
                if let Some(card) = p2.draw() {
                    stakes2.push(card);
                }
            }
            pile.append(&mut stakes1);
            pile.append(&mut stakes2);

            if p1.is_empty() || p2.is_empty() {
                // The in-flight stake is abandoned, not awarded.
                return self.finish(&p1, &p2, EndReason::Exhausted);
            }
        }
    }

    /// Records the terminal result: strictly more cards wins, equal is a
    /// tie.
    fn finish(&self, p1: &Hand, p2: &Hand, reason: EndReason) -> RoundOutcome {
        let winner = match p1.len().cmp(&p2.len()) {
            Ordering::Greater => Some(Player::One),
            Ordering::Less => Some(Player::Two),
            Ordering::Equal => None,
        };

        let result = GameResult {
            winner,
            reason,
            player1_count: p1.len(),
            player2_count: p2.len(),
        };
        *self.finished.lock() = Some(result);

        RoundOutcome::GameOver(result)
    }
}
