//! Property tests driving games with random action sequences.
//!
//! Every generated action is attempted regardless of legality; the engine
//! must either apply it or reject it without touching the game.

use std::collections::HashSet;

use durak::{Card, DECK_SIZE, Game, GameOptions, GameSnapshot};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Move {
    Attack { player: usize, card: usize },
    Defend { attack: usize, card: usize },
    Bita,
    PickUp,
}

fn arb_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        4 => (0..4usize, any::<usize>()).prop_map(|(player, card)| Move::Attack { player, card }),
        4 => (any::<usize>(), any::<usize>()).prop_map(|(attack, card)| Move::Defend { attack, card }),
        1 => Just(Move::Bita),
        1 => Just(Move::PickUp),
    ]
}

fn arb_game() -> impl Strategy<Value = Game> {
    (2..=4usize, 1..=6u8, 1..=6u8, any::<u64>()).prop_map(|(count, hand_size, limit, seed)| {
        let names = ["A", "B", "C", "D"];
        let options = GameOptions::default()
            .with_hand_size(hand_size)
            .with_max_attack_cards(limit);
        Game::new(&names[..count], options, seed).unwrap()
    })
}

/// Picks concrete cards for a move. Returns `None` when there is nothing to
/// pick from, in which case the move is skipped.
fn apply(game: &mut Game, mv: Move) -> Option<bool> {
    let outcome = match mv {
        Move::Attack { player, card } => {
            let names = game.player_names();
            let name = &names[player % names.len()];
            let hand = game.player_cards(name)?;
            let chosen = *hand.get(card % hand.len().max(1))?;
            game.attack(name, chosen).is_ok()
        }
        Move::Defend { attack, card } => {
            let defender = game.defending_player().to_owned();
            let open = game.board().undefended_cards();
            let hand = game.player_cards(&defender)?;
            let attacking = *open.get(attack % open.len().max(1))?;
            let defending = *hand.get(card % hand.len().max(1))?;
            game.defend(&defender, attacking, defending).is_ok()
        }
        Move::Bita => game.move_to_bita().is_ok(),
        Move::PickUp => game.pick_up_cards().is_ok(),
    };
    Some(outcome)
}

fn sort_key(card: &Card) -> (u8, char) {
    (card.rank(), card.suit().letter())
}

/// Snapshot with hands sorted, since a rejected defence returns its card to
/// the end of the hand.
fn normalized(game: &Game) -> GameSnapshot {
    let mut snapshot = game.snapshot();
    for hand in snapshot.player_cards.values_mut() {
        hand.sort_by_key(sort_key);
    }
    snapshot
}

fn check_invariants(game: &Game) -> Result<(), TestCaseError> {
    let mut seen: Vec<Card> = game
        .players()
        .iter()
        .flat_map(|player| player.cards().iter().copied())
        .collect();
    seen.extend(game.board().all_cards());
    let unique: HashSet<Card> = seen.iter().copied().collect();
    prop_assert_eq!(unique.len(), seen.len(), "a card is held twice");

    let total = seen.len() + game.cards_left_in_deck() + game.discard_pile_size();
    prop_assert_eq!(total, DECK_SIZE, "cards were created or lost");

    let active = game.players().iter().filter(|p| p.is_active()).count();
    prop_assert_eq!(active, game.active_player_count());

    if game.is_game_over() {
        prop_assert!(active <= 1);
        if let Some(loser) = game.losing_player() {
            prop_assert!(!game.player_cards(loser).unwrap_or_default().is_empty());
        }
        return Ok(());
    }

    let turn = game.turn();
    prop_assert_ne!(turn.starting, turn.defending);
    prop_assert!(game.players()[turn.starting].is_active());
    prop_assert!(game.players()[turn.defending].is_active());

    // Nobody without cards stays in once the deck is gone.
    if game.cards_left_in_deck() == 0 && game.board().is_empty() {
        for player in game.players().iter().filter(|p| p.is_active()) {
            prop_assert!(player.hand_size() > 0, "{} should be out", player.name());
        }
    }

    let board = game.board();
    prop_assert!(board.len() <= usize::from(game.options().max_attack_cards));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_actions_preserve_invariants(
        mut game in arb_game(),
        moves in prop::collection::vec(arb_move(), 1..200),
    ) {
        check_invariants(&game)?;
        for mv in moves {
            let before = normalized(&game);
            let Some(applied) = apply(&mut game, mv) else {
                continue;
            };
            if !applied {
                prop_assert_eq!(normalized(&game), before, "rejected {:?} changed the game", mv);
            }
            check_invariants(&game)?;
        }
    }

    #[test]
    fn prop_refill_tops_up_every_hand(
        mut game in arb_game(),
        moves in prop::collection::vec(arb_move(), 1..200),
    ) {
        let hand_size = usize::from(game.options().hand_size);
        for mv in moves {
            let deck_before = game.cards_left_in_deck();
            let Some(true) = apply(&mut game, mv) else {
                continue;
            };
            let drew = game.cards_left_in_deck() < deck_before;
            if drew && game.cards_left_in_deck() > 0 {
                for player in game.players().iter().filter(|p| p.is_active()) {
                    prop_assert!(player.hand_size() >= hand_size);
                }
            }
        }
    }
}
