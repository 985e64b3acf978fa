//! Game configuration options.

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 4;

/// Configuration options for a Durak game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use durak::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(6)
///     .with_max_attack_cards(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player and refilled to after every round.
    pub hand_size: u8,
    /// Maximum number of attacks in a single round.
    pub max_attack_cards: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 6,
            max_attack_cards: 6,
        }
    }
}

impl GameOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(4);
    /// assert_eq!(options.hand_size, 4);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the per-round attack limit.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_attack_cards(5);
    /// assert_eq!(options.max_attack_cards, 5);
    /// ```
    #[must_use]
    pub const fn with_max_attack_cards(mut self, limit: u8) -> Self {
        self.max_attack_cards = limit;
        self
    }

    pub(crate) const fn is_valid(&self) -> bool {
        self.hand_size > 0 && self.max_attack_cards > 0
    }
}
