//! Player hand representation.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;

/// A player's hand.
///
/// Cards are played from the front and winnings are appended to the back,
/// so the hand cycles the way a face-down War stack does.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, front = next card to play.
    cards: VecDeque<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Replaces the hand contents with the given cards, front first.
    pub fn refill<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.clear();
        self.cards.extend(cards);
    }

    /// Removes and returns the next card to play.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Appends won cards to the back of the hand in order.
    pub fn award(&mut self, pile: Vec<Card>) {
        self.cards.extend(pile);
    }

    /// Returns the cards in the hand, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
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

    /// Removes all cards from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
