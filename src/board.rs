//! The shared play area.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::ActionError;

/// An attacking card and, once answered, the card that beat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardOnBoard {
    attacking: Card,
    defending: Option<Card>,
}

impl CardOnBoard {
    /// Creates an unanswered attack.
    #[must_use]
    pub const fn new(attacking: Card) -> Self {
        Self {
            attacking,
            defending: None,
        }
    }

    /// Returns the attacking card.
    #[must_use]
    pub const fn attacking(&self) -> Card {
        self.attacking
    }

    /// Returns the defending card, if the attack has been answered.
    #[must_use]
    pub const fn defending(&self) -> Option<Card> {
        self.defending
    }

    /// Returns whether the attack has been answered.
    #[must_use]
    pub const fn is_defended(&self) -> bool {
        self.defending.is_some()
    }
}

/// Serialized as `[attackCode, defendCodeOrEmptyString]`.
#[cfg(feature = "serde")]
impl serde::Serialize for CardOnBoard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use alloc::string::{String, ToString};
        use serde::ser::SerializeTuple;

        let defending = self
            .defending
            .as_ref()
            .map_or_else(String::new, ToString::to_string);
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.attacking)?;
        tuple.serialize_element(&defending)?;
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CardOnBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use alloc::string::String;

        let (attacking, defending) = <(Card, String)>::deserialize(deserializer)?;
        let defending = if defending.is_empty() {
            None
        } else {
            Some(defending.parse().map_err(serde::de::Error::custom)?)
        };
        Ok(Self {
            attacking,
            defending,
        })
    }
}

/// Attack/defence pairs of the current round, oldest attack first.
///
/// The board only guards its own structure. Whose turn it is, attack
/// limits and hand ownership are checked by [`Game`](crate::Game).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<CardOnBoard>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns whether the board has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of attacks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns the entries in board order.
    #[must_use]
    pub fn cards(&self) -> &[CardOnBoard] {
        &self.cards
    }

    /// Appends a new unanswered attack.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CardNotAllowed`] and leaves the board unchanged
    /// if the card is already on the board as an attack.
    pub fn add_attack(&mut self, card: Card) -> Result<(), ActionError> {
        if self.cards.iter().any(|entry| entry.attacking == card) {
            return Err(ActionError::CardNotAllowed);
        }
        self.cards.push(CardOnBoard::new(card));
        Ok(())
    }

    /// Returns whether `card` may be added as an attack.
    ///
    /// Anything goes on an empty board. Otherwise the rank must already be
    /// present, as an attack or as a defence.
    #[must_use]
    pub fn can_accept(&self, card: Card) -> bool {
        self.is_empty()
            || self.cards.iter().any(|entry| {
                entry.attacking.rank() == card.rank()
                    || entry.defending.is_some_and(|d| d.rank() == card.rank())
            })
    }

    /// Answers `attacking` with `defending`.
    ///
    /// # Errors
    ///
    /// Returns an error if the attacking card is not on the board, is
    /// already answered, or cannot be beaten by `defending`.
    pub fn defend(
        &mut self,
        attacking: Card,
        defending: Card,
        trump: Suit,
    ) -> Result<(), ActionError> {
        let entry = self
            .cards
            .iter_mut()
            .find(|entry| entry.attacking == attacking)
            .ok_or(ActionError::NotOnBoard)?;

        if entry.defending.is_some() {
            return Err(ActionError::AlreadyDefended);
        }
        if !defending.can_defend(attacking, trump) {
            return Err(ActionError::CannotDefend);
        }

        entry.defending = Some(defending);
        Ok(())
    }

    /// Returns whether every attack has been answered.
    ///
    /// Vacuously true for an empty board.
    #[must_use]
    pub fn all_defended(&self) -> bool {
        self.cards.iter().all(CardOnBoard::is_defended)
    }

    /// Returns the unanswered attacking cards in board order.
    #[must_use]
    pub fn undefended_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|entry| !entry.is_defended())
            .map(CardOnBoard::attacking)
            .collect()
    }

    /// Returns whether no further attack may be added.
    ///
    /// The board is full once it holds `attack_limit` attacks, or once the
    /// defender would have to answer more cards than they hold.
    #[must_use]
    pub fn is_full(&self, attack_limit: usize, defender_hand_size: usize) -> bool {
        let undefended = self.cards.iter().filter(|e| !e.is_defended()).count();
        self.cards.len() >= attack_limit || undefended >= defender_hand_size
    }

    /// Returns every card on the board, each attack followed by its defence.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .flat_map(|entry| core::iter::once(entry.attacking).chain(entry.defending))
            .collect()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
