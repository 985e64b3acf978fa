//! A rules engine for Durak with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that enforces turn order, attack and
//! defence legality, trump resolution, hand refill, and elimination for 2 to
//! 4 players with a 36-card deck. [`Table`] wraps a game in a lock for
//! callers that share it between threads.
//!
//! # Example
//!
//! ```
//! use durak::{Game, GameOptions};
//!
//! let mut game = Game::new(&["Anna", "Boris"], GameOptions::default(), 42).unwrap();
//! let attacker = game.starting_player().to_owned();
//! let card = game.player_cards(&attacker).unwrap()[0];
//! game.attack(&attacker, card).unwrap();
//! game.pick_up_cards().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
mod sync;
pub mod table;

// Re-export main types
pub use board::{Board, CardOnBoard};
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
pub use deck::Deck;
pub use error::{ActionError, CardError, SetupError};
pub use game::{Game, GameSnapshot, GameState, TurnPosition};
pub use options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use player::Player;
pub use result::{RoundOutcome, RoundResult};
pub use table::Table;
