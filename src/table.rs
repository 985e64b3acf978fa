//! Serialized access to a live game.

use crate::card::Card;
use crate::error::{ActionError, SetupError};
use crate::game::{Game, GameSnapshot};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::sync::Mutex;

/// A game behind a lock, safe to share between request handlers.
///
/// Every call takes the lock for its whole duration, so actions on one
/// table are applied one at a time. Separate tables share nothing.
///
/// # Example
///
/// ```
/// use durak::{GameOptions, Table};
///
/// let table = Table::new(&["Anna", "Boris"], GameOptions::default(), 7).unwrap();
/// let snapshot = table.snapshot();
/// assert_eq!(snapshot.players, ["Anna", "Boris"]);
/// ```
pub struct Table {
    game: Mutex<Game>,
}

impl Table {
    /// Creates a table with a new game.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn new<S: AsRef<str>>(
        names: &[S],
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SetupError> {
        Game::new(names, options, seed).map(Self::from_game)
    }

    /// Wraps an existing game.
    #[must_use]
    pub const fn from_game(game: Game) -> Self {
        Self {
            game: Mutex::new(game),
        }
    }

    /// Runs `f` with shared access to the game.
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        let game = self.game.lock();
        f(&game)
    }

    /// Returns a snapshot of the current game.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.lock().snapshot()
    }

    /// See [`Game::attack`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::attack`].
    pub fn attack(&self, player: &str, card: Card) -> Result<(), ActionError> {
        self.game.lock().attack(player, card)
    }

    /// See [`Game::defend`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::defend`].
    pub fn defend(&self, player: &str, attacking: Card, defending: Card) -> Result<(), ActionError> {
        self.game.lock().defend(player, attacking, defending)
    }

    /// See [`Game::move_to_bita`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::move_to_bita`].
    pub fn move_to_bita(&self) -> Result<RoundResult, ActionError> {
        self.game.lock().move_to_bita()
    }

    /// See [`Game::pick_up_cards`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::pick_up_cards`].
    pub fn pick_up_cards(&self) -> Result<RoundResult, ActionError> {
        self.game.lock().pick_up_cards()
    }

    /// Starts a fresh game with the same players and options.
    ///
    /// # Errors
    ///
    /// Same as [`Game::restart`].
    pub fn restart(&self) -> Result<(), SetupError> {
        self.game.lock().restart()
    }

    /// Consumes the table and returns the game.
    pub fn into_game(self) -> Game {
        self.game.into_inner()
    }
}
