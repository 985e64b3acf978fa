//! Hot-seat CLI Durak example.
//!
//! Player names come from the command line (two to four, default
//! `Anna Boris`). Set `RUST_LOG=durak=debug` to watch the engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use durak::{Card, Game, GameOptions, GameState, RoundOutcome, RoundResult, Suit};
use tracing_subscriber::{EnvFilter, fmt};

const HELP: &str = "Commands: [a]ttack <player> <card>, [d]efend <attack> <card>, \
                    [b]ita, [t]ake, [r]estart, [q]uit";

fn main() {
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).without_time().init();

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names = vec!["Anna".to_string(), "Boris".to_string()];
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(names.as_slice(), GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Cannot start: {err}");
            return;
        }
    };

    println!("Durak CLI example");
    println!("{HELP}");

    loop {
        print_table(&game);
        if game.is_game_over() {
            match game.losing_player() {
                Some(loser) => println!("{loser} is the durak."),
                None => println!("Draw."),
            }
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    if let Err(err) = game.restart() {
                        println!("Restart error: {err}");
                        return;
                    }
                    continue;
                }
                _ => return,
            }
        }

        let line = prompt_line("> ");
        let words: Vec<&str> = line.split_whitespace().collect();
        let result = match words.as_slice() {
            ["a" | "attack", player, code] => {
                let Some(player) = find_player(&game, player) else {
                    println!("No player named {player}.");
                    continue;
                };
                parse_card(code).map(|card| game.attack(&player, card).map_err(|e| e.to_string()))
            }
            ["d" | "defend", attack, code] => {
                let defender = game.defending_player().to_string();
                match (parse_card(attack), parse_card(code)) {
                    (Some(attack), Some(card)) => Some(
                        game.defend(&defender, attack, card)
                            .map_err(|e| e.to_string()),
                    ),
                    _ => None,
                }
            }
            ["b" | "bita"] => Some(game.move_to_bita().map(report).map_err(|e| e.to_string())),
            ["t" | "take"] => Some(game.pick_up_cards().map(report).map_err(|e| e.to_string())),
            ["r" | "restart"] => Some(game.restart().map_err(|e| e.to_string())),
            ["q" | "quit"] => return,
            _ => {
                println!("{HELP}");
                continue;
            }
        };

        match result {
            Some(Ok(())) => {}
            Some(Err(err)) => println!("Not allowed: {err}"),
            None => println!("Cards are written like 6C, 10H, QS or AD."),
        }
    }
}

fn report(result: RoundResult) {
    match result.outcome {
        RoundOutcome::Defended => println!("Bita: {} card(s) discarded.", result.cards_moved),
        RoundOutcome::PickedUp => println!("Picked up {} card(s).", result.cards_moved),
    }
    for name in &result.eliminated {
        println!("{name} is out of cards.");
    }
}

/// Player lookup ignoring case, since input is lowercased.
fn find_player(game: &Game, input: &str) -> Option<String> {
    game.player_names()
        .into_iter()
        .find(|name| name.eq_ignore_ascii_case(input))
}

fn parse_card(input: &str) -> Option<Card> {
    input.to_uppercase().parse().ok()
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!(
        "\nTrump: {} | Deck: {} | Discarded: {}",
        format_card(game.trump_card()),
        game.cards_left_in_deck(),
        game.discard_pile_size()
    );

    let board = game.board();
    if board.is_empty() {
        println!("Board: (empty)");
    } else {
        let pairs: Vec<String> = board
            .cards()
            .iter()
            .map(|entry| match entry.defending() {
                Some(defending) => format!(
                    "{}/{}",
                    format_card(entry.attacking()),
                    format_card(defending)
                ),
                None => format_card(entry.attacking()),
            })
            .collect();
        println!("Board: {}", pairs.join("  "));
    }

    for player in game.players() {
        let role = if !player.is_active() {
            "out"
        } else if player.name() == game.defending_player() {
            "defending"
        } else if player.name() == game.starting_player() {
            "attacking"
        } else {
            ""
        };
        let cards: Vec<String> = player.cards().iter().copied().map(format_card).collect();
        println!("{:>10} {:<10} {}", player.name(), role, cards.join(" "));
    }

    let hint = match game.state() {
        GameState::Attacking => "waiting for the opening attack",
        GameState::Defending => "defender to answer or take",
        GameState::Defended => "throw in more or call bita",
        GameState::Over => "game over",
    };
    println!("({hint})");
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
