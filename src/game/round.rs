use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, info};

use crate::error::ActionError;
use crate::result::{RoundOutcome, RoundResult};

use super::Game;

impl Game {
    /// Ends a successfully defended round: every card on the board goes to
    /// the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the board is empty, or an
    /// attack is still unanswered.
    pub fn move_to_bita(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_running()?;
        if self.board.is_empty() {
            return Err(ActionError::BoardEmpty);
        }
        if !self.board.all_defended() {
            return Err(ActionError::IncompleteDefense);
        }

        let cards_moved = self.board.all_cards().len();
        self.discarded += cards_moved;
        self.board.clear();
        self.refill_hands();

        Ok(self.finalize_turn(RoundOutcome::Defended, cards_moved))
    }

    /// Ends a lost round: the defender picks up every card on the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the board is empty.
    pub fn pick_up_cards(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_running()?;
        if self.board.is_empty() {
            return Err(ActionError::BoardEmpty);
        }

        let cards = self.board.all_cards();
        let cards_moved = cards.len();
        self.players[self.defending].take(cards);
        self.board.clear();
        self.refill_hands();

        Ok(self.finalize_turn(RoundOutcome::PickedUp, cards_moved))
    }

    fn finalize_turn(&mut self, outcome: RoundOutcome, cards_moved: usize) -> RoundResult {
        let eliminated = if self.deck.is_empty() {
            self.remove_finished_players()
        } else {
            Vec::new()
        };

        let game_over = self.is_game_over();
        if game_over {
            info!(draw = self.is_draw(), loser = ?self.losing_player(), "game over");
        } else {
            self.set_up_next_turn(outcome == RoundOutcome::Defended);
        }

        debug!(
            ?outcome,
            cards_moved,
            deck = self.deck.remaining(),
            starting = self.starting_player(),
            defending = self.defending_player(),
            "round resolved"
        );

        RoundResult {
            outcome,
            cards_moved,
            eliminated,
            game_over,
        }
    }

    /// Tops up hands from the deck, going round from the starting player and
    /// serving the defender last.
    fn refill_hands(&mut self) {
        if self.deck.is_empty() {
            return;
        }

        let mut seat = self.starting;
        for _ in 0..self.active_players {
            if seat != self.defending {
                self.refill_player(seat);
            }
            seat = self.players[seat].next();
        }
        self.refill_player(self.defending);
    }

    fn refill_player(&mut self, seat: usize) {
        let hand_size = usize::from(self.options.hand_size);
        while self.players[seat].hand_size() < hand_size {
            let Some(card) = self.deck.draw() else {
                return;
            };
            self.players[seat].take([card]);
        }
    }

    /// Splices every player with an empty hand out of the ring.
    ///
    /// Walks the ring once from the defender. Returns the names of the
    /// removed players in that order.
    fn remove_finished_players(&mut self) -> Vec<String> {
        let mut eliminated = Vec::new();
        let mut seat = self.defending;

        for _ in 0..self.active_players {
            let next = self.players[seat].next();
            if self.players[seat].hand_size() == 0 {
                let previous = self.previous_seat(seat);
                self.players[previous].set_next(next);
                self.players[seat].deactivate();
                info!(player = self.players[seat].name(), "player out");
                eliminated.push(self.players[seat].name().into());
            }
            seat = next;
        }

        self.active_players -= eliminated.len();
        eliminated
    }

    /// Returns the seat whose ring link points at `seat`.
    fn previous_seat(&self, seat: usize) -> usize {
        let mut previous = seat;
        while self.players[previous].next() != seat {
            previous = self.players[previous].next();
        }
        previous
    }

    /// Returns the first active seat after `seat`.
    ///
    /// Eliminated players keep the link they had when they left, so the
    /// chain from a removed seat always leads forward to an active one.
    fn next_active(&self, seat: usize) -> usize {
        let mut next = self.players[seat].next();
        while !self.players[next].is_active() {
            next = self.players[next].next();
        }
        next
    }

    /// A defender who beat every attack and still holds cards attacks next.
    /// Otherwise the turn passes to the player after the defender.
    fn set_up_next_turn(&mut self, was_defended: bool) {
        let previous_defender = self.defending;
        self.starting = if was_defended && self.players[previous_defender].hand_size() > 0 {
            previous_defender
        } else {
            self.next_active(previous_defender)
        };
        self.defending = self.next_active(self.starting);
    }
}

#[cfg(test)]
mod tests {
    use crate::card::Card;
    use crate::deck::Deck;
    use crate::options::GameOptions;

    use super::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn defender_and_neighbour_leave_together() {
        // A: 6C 10C, B: 7C JC, C: 8C QC, D: 9C KC. AC stays at the bottom.
        let deck = Deck::stacked(
            ["6C", "7C", "8C", "9C", "10C", "JC", "QC", "KC", "AC"].map(card),
        )
        .unwrap();
        let options = GameOptions::default().with_hand_size(2);
        let mut game = Game::with_deck(&["A", "B", "C", "D"], options, deck).unwrap();
        assert_eq!((game.starting, game.defending), (0, 1));

        // A draws the trump, leaving nothing to refill from.
        let last = game.deck.draw().unwrap();
        assert_eq!(last, card("AC"));
        game.players[0].take([last]);

        for code in ["7C", "JC"] {
            game.players[1].remove_matching(card(code)).unwrap();
        }
        for code in ["8C", "QC"] {
            game.players[2].remove_matching(card(code)).unwrap();
        }
        let trump = game.trump_suit();
        for (attack, defence) in [("7C", "JC"), ("8C", "QC")] {
            game.board.add_attack(card(attack)).unwrap();
            game.board.defend(card(attack), card(defence), trump).unwrap();
        }

        let result = game.move_to_bita().unwrap();
        assert_eq!(result.eliminated, ["B", "C"]);
        assert!(!result.game_over);
        assert_eq!(game.active_players, 2);
        assert_eq!(game.players[0].next(), 3);

        // The turn skips both empty seats.
        assert_eq!(game.starting_player(), "D");
        assert_eq!(game.defending_player(), "A");
    }

    #[test]
    fn refill_stops_when_deck_runs_out() {
        let mut game = Game::new(&["A", "B"], GameOptions::default(), 11).unwrap();
        while game.deck.draw().is_some() {}
        let starting = game.starting;
        let first = game.players[starting].cards()[0];
        game.players[starting].remove_matching(first).unwrap();

        game.refill_hands();
        assert_eq!(game.players[starting].hand_size(), 5);
    }

    #[test]
    fn resolution_checks_game_state_first() {
        let mut game = Game::new(&["A", "B"], GameOptions::default(), 5).unwrap();
        assert_eq!(game.move_to_bita(), Err(ActionError::BoardEmpty));
        assert_eq!(game.pick_up_cards(), Err(ActionError::BoardEmpty));

        game.players[1].deactivate();
        game.active_players = 1;
        assert_eq!(game.move_to_bita(), Err(ActionError::GameOver));
        assert_eq!(game.pick_up_cards(), Err(ActionError::GameOver));
    }
}
