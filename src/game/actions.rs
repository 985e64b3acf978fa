use tracing::trace;

use crate::card::Card;
use crate::error::ActionError;

use super::Game;

impl Game {
    /// An empty board is opened by the starting player; after that anyone
    /// still playing except the defender may add cards.
    fn can_attack_now(&self, seat: usize) -> bool {
        if !self.players[seat].is_active() {
            return false;
        }
        if self.board.is_empty() {
            seat == self.starting
        } else {
            seat != self.defending
        }
    }

    /// Player action: Attack (place a card on the board).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player is unknown or may not
    /// attack now, the board is full, the card's rank is not on the board,
    /// or the player does not hold the card.
    pub fn attack(&mut self, player: &str, card: Card) -> Result<(), ActionError> {
        self.ensure_running()?;
        let seat = self.seat_of(player)?;

        if !self.can_attack_now(seat) {
            return Err(ActionError::NotYourTurn);
        }

        let defender_hand = self.players[self.defending].hand_size();
        if self
            .board
            .is_full(usize::from(self.options.max_attack_cards), defender_hand)
        {
            return Err(ActionError::LimitReached);
        }

        if !self.board.is_empty() && !self.board.can_accept(card) {
            return Err(ActionError::CardNotAllowed);
        }

        let card = self.players[seat].remove_matching(card)?;
        if let Err(err) = self.board.add_attack(card) {
            self.players[seat].take([card]);
            return Err(err);
        }

        trace!(player, card = %card, "attack");
        Ok(())
    }

    /// Player action: Defend (beat an attacking card).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player is unknown or is not
    /// the defender, the player does not hold the defending card, or the
    /// board rejects the defence. On a board error the defending card is
    /// returned to the player's hand.
    pub fn defend(
        &mut self,
        player: &str,
        attacking: Card,
        defending: Card,
    ) -> Result<(), ActionError> {
        self.ensure_running()?;
        let seat = self.seat_of(player)?;

        if seat != self.defending {
            return Err(ActionError::NotYourTurn);
        }

        let defending = self.players[seat].remove_matching(defending)?;
        if let Err(err) = self.board.defend(attacking, defending, self.trump.suit()) {
            self.players[seat].take([defending]);
            return Err(err);
        }

        trace!(player, attacking = %attacking, defending = %defending, "defend");
        Ok(())
    }
}
