use super::Game;

impl Game {
    /// Deals one card at a time around the table until every hand is full.
    pub(super) fn deal_cards(&mut self) {
        for _ in 0..self.options.hand_size {
            for player in &mut self.players {
                if let Some(card) = self.deck.draw() {
                    player.take([card]);
                }
            }
        }
    }

    /// Seats the first attacker and the defender to their left.
    pub(super) fn start_game(&mut self) {
        self.starting = self.choose_starting_player();
        self.defending = self.players[self.starting].next();
    }

    /// Returns the seat holding the lowest trump, or the first seat if no
    /// one holds a trump.
    fn choose_starting_player(&self) -> usize {
        let trump = self.trump.suit();
        let mut starting = 0;
        let mut lowest: Option<u8> = None;

        for (seat, player) in self.players.iter().enumerate() {
            if let Some(rank) = player.lowest_in_suit(trump) {
                if lowest.is_none_or(|low| rank < low) {
                    starting = seat;
                    lowest = Some(rank);
                }
            }
        }

        starting
    }
}
