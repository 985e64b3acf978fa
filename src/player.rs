//! Players and their hands.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::ActionError;

/// A seated player.
///
/// Players sit in a ring: each one links to the seat of the next player.
/// Eliminated players keep their seat but are spliced out of the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    /// Cards in hand, in the order received.
    hand: Vec<Card>,
    /// Seat index of the next player in the ring.
    next: usize,
    active: bool,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, next: usize) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            next,
            active: true,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the player is still in the game.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Adds cards to the hand.
    pub fn take<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.hand.extend(cards);
    }

    /// Removes `card` from the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotInHand`] if the player does not hold it.
    pub fn remove_matching(&mut self, card: Card) -> Result<Card, ActionError> {
        let index = self
            .hand
            .iter()
            .position(|held| *held == card)
            .ok_or(ActionError::NotInHand)?;
        Ok(self.hand.remove(index))
    }

    /// Returns the lowest rank held in `suit`.
    pub(crate) fn lowest_in_suit(&self, suit: Suit) -> Option<u8> {
        self.hand
            .iter()
            .filter(|card| card.suit() == suit)
            .map(|card| card.rank())
            .min()
    }

    pub(crate) const fn next(&self) -> usize {
        self.next
    }

    pub(crate) const fn set_next(&mut self, next: usize) {
        self.next = next;
    }

    pub(crate) const fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn take_and_remove() {
        let mut player = Player::new("A", 0);
        player.take([card("6C"), card("KS")]);
        player.take([card("10D")]);
        assert_eq!(player.hand_size(), 3);

        assert_eq!(player.remove_matching(card("KS")), Ok(card("KS")));
        assert_eq!(player.cards(), [card("6C"), card("10D")]);
        assert_eq!(
            player.remove_matching(card("KS")),
            Err(ActionError::NotInHand)
        );
        assert_eq!(player.hand_size(), 2);
    }

    #[test]
    fn lowest_in_suit() {
        let mut player = Player::new("A", 0);
        player.take([card("QH"), card("7H"), card("6C")]);
        assert_eq!(player.lowest_in_suit(Suit::Hearts), Some(7));
        assert_eq!(player.lowest_in_suit(Suit::Spades), None);
    }
}
