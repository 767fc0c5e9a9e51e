//! Jorro -- a line-oriented driver for the rules engine.
//!
//! This binary reads commands from stdin and writes responses to stdout. It
//! is a thin shell: every rule lives in the library. Commands:
//!
//! ```text
//! new [seed]      start a fresh game, optionally seeded
//! show            print the board and whose turn it is
//! select R C      select the piece at (R, C)
//! move R C        move the selected piece to (R, C)
//! auto            play one random legal move for the side to move
//! history         print the move history as JSON
//! save FILE       write the history to FILE
//! load FILE       open a saved history in the replay cursor
//! next / prev     step the loaded replay
//! quit            exit
//! ```

use std::fs;
use std::io::{self, BufRead};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use jorro::board::Square;
use jorro::engine::{Game, Selection};
use jorro::movegen::random_move;
use jorro::replay::{records_to_json, ReplayCursor};

enum Command {
    New { seed: Option<u64> },
    Show,
    Select { row: usize, col: usize },
    Move { row: usize, col: usize },
    Auto,
    History,
    Save { path: String },
    Load { path: String },
    Next,
    Prev,
    Quit,
}

/// Parses one input line. Returns `None` for blank or unrecognized input.
fn parse_command(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let coords = |tokens: &mut dyn Iterator<Item = &str>| -> Option<(usize, usize)> {
        let row = tokens.next()?.parse().ok()?;
        let col = tokens.next()?.parse().ok()?;
        Some((row, col))
    };

    match tokens.next()? {
        "new" => Some(Command::New {
            seed: tokens.next().and_then(|t| t.parse().ok()),
        }),
        "show" => Some(Command::Show),
        "select" => {
            let (row, col) = coords(&mut tokens)?;
            Some(Command::Select { row, col })
        }
        "move" => {
            let (row, col) = coords(&mut tokens)?;
            Some(Command::Move { row, col })
        }
        "auto" => Some(Command::Auto),
        "history" => Some(Command::History),
        "save" => Some(Command::Save {
            path: tokens.next()?.to_string(),
        }),
        "load" => Some(Command::Load {
            path: tokens.next()?.to_string(),
        }),
        "next" => Some(Command::Next),
        "prev" => Some(Command::Prev),
        "quit" => Some(Command::Quit),
        _ => None,
    }
}

fn square(row: usize, col: usize) -> Option<Square> {
    let sq = Square::new(row, col);
    if sq.is_none() {
        eprintln!("({}, {}) is off the board", row, col);
    }
    sq
}

fn report(game: &Game) {
    match game.winner() {
        Some(winner) => println!("player {} wins", winner.number()),
        None => println!("player {} to move", game.turn().number()),
    }
}

fn main() {
    let stdin = io::stdin();
    let mut rng = SmallRng::from_entropy();
    let mut game = Game::new(&mut rng);
    let mut replay: Option<ReplayCursor> = None;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::New { seed } => {
                let mut seeded = match seed {
                    Some(s) => SmallRng::seed_from_u64(s),
                    None => SmallRng::from_entropy(),
                };
                game = Game::new(&mut seeded);
                report(&game);
            }
            Command::Show => {
                print!("{}", game.board());
                report(&game);
            }
            Command::Select { row, col } => {
                let Some(sq) = square(row, col) else { continue };
                match game.select_square(sq) {
                    Ok(Selection::Selected { moves, .. }) => {
                        let list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                        println!("moves: {}", list.join(" "));
                    }
                    Ok(Selection::Cleared) => println!("selection cleared"),
                    Err(e) => eprintln!("{}", e),
                }
            }
            Command::Move { row, col } => {
                let Some(sq) = square(row, col) else { continue };
                match game.apply_move(sq) {
                    Ok(applied) => {
                        if let Some(kind) = applied.record.captured_kind {
                            println!("captured {}", kind.letter());
                        }
                        report(&game);
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
            Command::Auto => match random_move(game.turn(), game.board(), &mut rng) {
                Some((from, dest)) => {
                    let moved = game
                        .select_square(from)
                        .and_then(|_| game.apply_move(dest));
                    match moved {
                        Ok(_) => {
                            println!("played {} -> {}", from, dest);
                            report(&game);
                        }
                        Err(e) => eprintln!("{}", e),
                    }
                }
                None => println!("no legal move"),
            },
            Command::History => match records_to_json(game.history()) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("{}", e),
            },
            Command::Save { path } => {
                let result =
                    records_to_json(game.history()).map(|json| fs::write(&path, json));
                match result {
                    Ok(Ok(())) => println!("saved {} moves to {}", game.history().len(), path),
                    Ok(Err(e)) => eprintln!("failed to write {}: {}", path, e),
                    Err(e) => eprintln!("{}", e),
                }
            }
            Command::Load { path } => match fs::read_to_string(&path) {
                Ok(json) => match ReplayCursor::from_json(&json) {
                    Ok(cursor) => {
                        println!("loaded {} moves", cursor.len());
                        replay = Some(cursor);
                    }
                    Err(e) => eprintln!("{}", e),
                },
                Err(e) => eprintln!("failed to read {}: {}", path, e),
            },
            Command::Next => match replay.as_mut() {
                Some(cursor) => {
                    cursor.step_forward();
                    println!("step {}/{}", cursor.step(), cursor.len());
                    print!("{}", cursor.board());
                }
                None => eprintln!("no replay loaded"),
            },
            Command::Prev => match replay.as_mut() {
                Some(cursor) => {
                    cursor.step_backward();
                    println!("step {}/{}", cursor.step(), cursor.len());
                    print!("{}", cursor.board());
                }
                None => eprintln!("no replay loaded"),
            },
            Command::Quit => break,
        }
    }
}
