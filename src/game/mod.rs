//! Game engine and state management.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::debug;

use crate::board::{Board, CardOnBoard};
use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::{ActionError, SetupError};
use crate::options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
use crate::player::Player;

mod actions;
mod deal;
mod round;
pub mod snapshot;
pub mod state;

pub use snapshot::GameSnapshot;
pub use state::{GameState, TurnPosition};

/// A Durak game engine that manages the deck, the board, and the player ring.
///
/// Every action is a single synchronous call that either applies in full or
/// fails without changing the game. The game has no internal locking; share
/// it between threads through a [`Table`](crate::Table) or your own mutex.
#[derive(Clone)]
pub struct Game {
    board: Board,
    deck: Deck,
    /// Players in seating order. Eliminated players stay in place.
    players: Vec<Player>,
    /// Seat of the player who opens the current round.
    starting: usize,
    /// Seat of the player defending the current round.
    defending: usize,
    trump: Card,
    active_players: usize,
    /// Cards moved to the discard pile so far.
    discarded: usize,
    options: GameOptions,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a shuffled deck and the given seed.
    ///
    /// Players are seated in the order given. The holder of the lowest trump
    /// attacks first, or the first player if nobody holds a trump.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not 2 to 4 unique player names, or the
    /// options are invalid or would deal out the whole deck.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::{Game, GameOptions};
    ///
    /// let game = Game::new(&["Anna", "Boris"], GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.cards_left_in_deck(), 24);
    /// ```
    pub fn new<S: AsRef<str>>(
        names: &[S],
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SetupError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        Self::setup(names, options, deck, rng)
    }

    /// Creates a game from a deck in a fixed order, without shuffling.
    ///
    /// The deck must hold at least one card more than the deal, so the last
    /// card stays at the bottom as the trump.
    ///
    /// Later restarts shuffle with a generator seeded from zero.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn with_deck<S: AsRef<str>>(
        names: &[S],
        options: GameOptions,
        deck: Deck,
    ) -> Result<Self, SetupError> {
        Self::setup(names, options, deck, ChaCha8Rng::seed_from_u64(0))
    }

    fn setup<S: AsRef<str>>(
        names: &[S],
        options: GameOptions,
        deck: Deck,
        rng: ChaCha8Rng,
    ) -> Result<Self, SetupError> {
        let count = names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::InvalidPlayerCount);
        }
        for (index, name) in names.iter().enumerate() {
            if names[..index].iter().any(|other| other.as_ref() == name.as_ref()) {
                return Err(SetupError::DuplicatePlayerName);
            }
        }
        if !options.is_valid() {
            return Err(SetupError::InvalidOptions);
        }
        // The bottom card is the trump and is never dealt.
        if count * usize::from(options.hand_size) >= deck.remaining() {
            return Err(SetupError::NotEnoughCards);
        }

        // Revealed before dealing; it stays at the bottom and is drawn last.
        let trump = deck.peek_bottom().ok_or(SetupError::NotEnoughCards)?;

        let players = names
            .iter()
            .enumerate()
            .map(|(seat, name)| Player::new(name.as_ref(), (seat + 1) % count))
            .collect();

        let mut game = Self {
            board: Board::new(),
            deck,
            players,
            starting: 0,
            defending: 1,
            trump,
            active_players: count,
            discarded: 0,
            options,
            rng,
        };
        game.deal_cards();
        game.start_game();

        debug!(
            players = count,
            trump = %game.trump,
            starting = game.starting_player(),
            "game created"
        );
        Ok(game)
    }

    /// Replaces this game with a fresh one over the same players and options.
    ///
    /// # Errors
    ///
    /// Returns an error only if the options cannot be dealt from a full deck.
    pub fn restart(&mut self) -> Result<(), SetupError> {
        let names = self.player_names();
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        *self = Self::setup(names.as_slice(), self.options, deck, self.rng.clone())?;
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), ActionError> {
        if self.is_game_over() {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    fn seat_of(&self, name: &str) -> Result<usize, ActionError> {
        self.players
            .iter()
            .position(|player| player.name() == name)
            .ok_or(ActionError::PlayerNotFound)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the trump card revealed at the start of the game.
    #[must_use]
    pub const fn trump_card(&self) -> Card {
        self.trump
    }

    /// Returns the trump suit.
    #[must_use]
    pub const fn trump_suit(&self) -> Suit {
        self.trump.suit()
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a copy of the board entries in board order.
    #[must_use]
    pub fn cards_on_board(&self) -> Vec<CardOnBoard> {
        self.board.cards().to_vec()
    }

    /// Returns all players in seating order, including eliminated ones.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    /// Returns a copy of the named player's hand.
    #[must_use]
    pub fn player_cards(&self, name: &str) -> Option<Vec<Card>> {
        self.player(name).map(|player| player.cards().to_vec())
    }

    /// Returns a copy of every player's hand keyed by name.
    #[must_use]
    pub fn players_cards_map(&self) -> HashMap<String, Vec<Card>> {
        self.players
            .iter()
            .map(|player| (player.name().into(), player.cards().to_vec()))
            .collect()
    }

    /// Returns the player names in seating order.
    #[must_use]
    pub fn player_names(&self) -> Vec<String> {
        self.players
            .iter()
            .map(|player| player.name().into())
            .collect()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_left_in_deck(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the number of cards moved to the discard pile so far.
    #[must_use]
    pub const fn discard_pile_size(&self) -> usize {
        self.discarded
    }

    /// Returns the name of the player who opens the current round.
    #[must_use]
    pub fn starting_player(&self) -> &str {
        self.players[self.starting].name()
    }

    /// Returns the name of the player defending the current round.
    #[must_use]
    pub fn defending_player(&self) -> &str {
        self.players[self.defending].name()
    }

    /// Returns the current turn position.
    #[must_use]
    pub const fn turn(&self) -> TurnPosition {
        TurnPosition {
            starting: self.starting,
            defending: self.defending,
        }
    }

    /// Returns the current phase of the game.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_game_over() {
            GameState::Over
        } else if self.board.is_empty() {
            GameState::Attacking
        } else if self.board.all_defended() {
            GameState::Defended
        } else {
            GameState::Defending
        }
    }

    /// Returns the number of players still in the game.
    #[must_use]
    pub const fn active_player_count(&self) -> usize {
        self.active_players
    }

    /// Returns whether fewer than two players remain.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.active_players < 2
    }

    /// Returns whether every player went out in the same round.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        self.active_players == 0
    }

    /// Returns the name of the player left holding cards, once the game is over.
    #[must_use]
    pub fn losing_player(&self) -> Option<&str> {
        if !self.is_game_over() || self.is_draw() {
            return None;
        }
        self.players
            .iter()
            .find(|player| player.is_active())
            .map(Player::name)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("deck", &self.deck)
            .field("players", &self.players)
            .field("starting", &self.starting)
            .field("defending", &self.defending)
            .field("trump", &self.trump)
            .field("active_players", &self.active_players)
            .field("discarded", &self.discarded)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
