//! Game state types.

/// Phase of the game, derived from the board and the player ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Board is empty; the starting player opens the round.
    Attacking,
    /// At least one attack is unanswered.
    Defending,
    /// Every attack is answered; more may be added or the round resolved.
    Defended,
    /// Fewer than two players remain.
    Over,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Seat of the player who opens the round.
    pub starting: usize,
    /// Seat of the player defending this round.
    pub defending: usize,
}
