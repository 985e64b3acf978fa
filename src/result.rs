//! Round result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// How a round was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every attack was beaten and the cards went to the discard pile.
    Defended,
    /// The defender picked up every card on the board.
    PickedUp,
}

/// Result of resolving a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Number of cards cleared from the board.
    pub cards_moved: usize,
    /// Players eliminated at the end of this round, in ring order.
    pub eliminated: Vec<String>,
    /// Whether the game ended with this round.
    pub game_over: bool,
}
