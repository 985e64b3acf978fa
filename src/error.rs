//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building or decoding a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank or suit is outside the 36-card deck.
    #[error("rank must be between 6 and 14 and suit one of Clubs, Spades, Hearts, Diamonds")]
    InvalidCard,
    /// Malformed card code.
    #[error("malformed card code")]
    InvalidCode,
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player count is outside 2..=4.
    #[error("a game needs between 2 and 4 players")]
    InvalidPlayerCount,
    /// Two players share a name.
    #[error("player names must be unique")]
    DuplicatePlayerName,
    /// A stacked deck contains the same card twice.
    #[error("deck contains a duplicate card")]
    DuplicateCard,
    /// Not enough cards in the deck to deal every hand.
    #[error("not enough cards in the deck to deal")]
    NotEnoughCards,
    /// Hand size or attack limit is zero.
    #[error("hand size and attack limit must be non-zero")]
    InvalidOptions,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The game is already over.
    #[error("the game is already over")]
    GameOver,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Card is not in the player's hand.
    #[error("no such card in player's hand")]
    NotInHand,
    /// Attacking card is not on the board.
    #[error("attacking card is not on the board")]
    NotOnBoard,
    /// Attacking card already has a defence.
    #[error("attacking card is already defended")]
    AlreadyDefended,
    /// Defending card cannot beat the attacking card.
    #[error("card cannot defend against the attacking card")]
    CannotDefend,
    /// Rank is not already present on the board.
    #[error("card is not a valid attack at this moment")]
    CardNotAllowed,
    /// Attack limit or defender hand size reached.
    #[error("attacking cards limit reached")]
    LimitReached,
    /// Nothing on the board to resolve.
    #[error("board is empty")]
    BoardEmpty,
    /// Some attacks are still unanswered.
    #[error("some cards are undefended")]
    IncompleteDefense,
}
