//! The 36-card draw pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::SetupError;

/// An ordered draw pile.
///
/// Cards are drawn from the top; the bottom card stays in place until the
/// pile is exhausted and is the one revealed as trump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards with the top of the pile at the end.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck with every rank 6..=14 of every suit.
    ///
    /// Cards are ordered rank-major: `6C 6S 6H 6D 7C ...` from the top.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in (MIN_RANK..=MAX_RANK).rev() {
            for suit in Suit::ALL.into_iter().rev() {
                if let Ok(card) = Card::new(suit, rank) {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    /// Creates a deck that deals `cards` in the given order, first card first.
    ///
    /// The deck need not be complete, which makes it useful for replaying a
    /// recorded game or setting up a specific position.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateCard`] if a card appears twice.
    pub fn stacked<I>(cards: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        for (index, card) in cards.iter().enumerate() {
            if cards[index + 1..].contains(card) {
                return Err(SetupError::DuplicateCard);
            }
        }
        cards.reverse();
        Ok(Self { cards })
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the bottom card without removing it.
    #[must_use]
    pub fn peek_bottom(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
