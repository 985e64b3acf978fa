//! Read-only projection of a game.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::board::CardOnBoard;
use crate::card::Card;

use super::Game;

/// A copy of everything a client may be shown about a game.
///
/// Hands of all players are included. Deciding what a given viewer may see
/// is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    /// Each player's hand keyed by name.
    #[cfg_attr(feature = "serde", serde(rename = "playerCards"))]
    pub player_cards: HashMap<String, Vec<Card>>,
    /// Board entries in board order.
    #[cfg_attr(feature = "serde", serde(rename = "cardsOnTable"))]
    pub cards_on_table: Vec<CardOnBoard>,
    /// Cards left in the deck.
    #[cfg_attr(feature = "serde", serde(rename = "numOfCardsLeftInDeck"))]
    pub cards_left_in_deck: usize,
    /// The trump card.
    #[cfg_attr(feature = "serde", serde(rename = "kozerCard"))]
    pub trump_card: Card,
    /// Name of the player who opens the round.
    #[cfg_attr(feature = "serde", serde(rename = "playerStarting"))]
    pub starting_player: String,
    /// Name of the defending player.
    #[cfg_attr(feature = "serde", serde(rename = "playerDefending"))]
    pub defending_player: String,
    /// Whether the game is over.
    #[cfg_attr(feature = "serde", serde(rename = "gameOver"))]
    pub game_over: bool,
    /// Whether the game ended in a draw.
    #[cfg_attr(feature = "serde", serde(rename = "isDraw"))]
    pub is_draw: bool,
    /// Name of the losing player, once there is one.
    #[cfg_attr(feature = "serde", serde(rename = "losingPlayerName"))]
    pub losing_player: Option<String>,
    /// Player names in seating order.
    pub players: Vec<String>,
}

impl Game {
    /// Returns a snapshot of the current game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player_cards: self.players_cards_map(),
            cards_on_table: self.cards_on_board(),
            cards_left_in_deck: self.cards_left_in_deck(),
            trump_card: self.trump_card(),
            starting_player: self.starting_player().to_string(),
            defending_player: self.defending_player().to_string(),
            game_over: self.is_game_over(),
            is_draw: self.is_draw(),
            losing_player: self.losing_player().map(ToString::to_string),
            players: self.player_names(),
        }
    }
}
