//! Minimal stdin play loop for the 5×5×5 rules engine.
//!
//! Reads commands line by line and drives a single `Game`, printing the
//! renderer output after every change. Squares use the `<A-E><a-e><1-5>`
//! coordinate notation, e.g. `move Ba1 Ca1` or `move Db3 Eb3 Q`.

use std::io::{self, BufRead, Write};

use raum_chess::game_state::chess_types::{Color, GameStatus, PieceKind};
use raum_chess::game_state::game::Game;
use raum_chess::utils::notation::{
    char_to_kind, kind_to_char, notation_to_position, position_to_notation,
};
use raum_chess::utils::render_game_state::render_board;

fn main() {
    let stdin = io::stdin();
    let mut game = Game::new();

    println!("raum_chess - 5x5x5 chess. Type 'help' for commands.");
    print_state(&game);

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let words: Vec<&str> = input.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["new"] => {
                game.reset();
                print_state(&game);
            }
            ["show"] => print_state(&game),
            ["history"] => print_history(&game),
            ["moves", square] => match notation_to_position(square) {
                Ok(pos) => {
                    let targets: Vec<String> = game
                        .valid_moves_for(pos)
                        .into_iter()
                        .map(position_to_notation)
                        .collect();
                    if targets.is_empty() {
                        println!("no legal moves from {square}");
                    } else {
                        println!("{}", targets.join(" "));
                    }
                }
                Err(err) => println!("{err}"),
            },
            ["move", from, to] => apply_move(&mut game, from, to, None),
            ["move", from, to, piece] => {
                let letter = piece.chars().next().unwrap_or(' ');
                match char_to_kind(letter) {
                    Ok(kind) => apply_move(&mut game, from, to, Some(kind)),
                    Err(err) => println!("{err}"),
                }
            }
            _ => println!("unknown command; type 'help'"),
        }
    }
}

fn apply_move(game: &mut Game, from: &str, to: &str, promotion: Option<PieceKind>) {
    let (from, to) = match (notation_to_position(from), notation_to_position(to)) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(err), _) | (_, Err(err)) => {
            println!("{err}");
            return;
        }
    };

    let before = game.history().len();
    match promotion {
        Some(kind) => game.promote_pawn(from, to, kind),
        None => game.make_move(from, to),
    }
    if game.history().len() == before {
        println!(
            "illegal move {} -> {}",
            position_to_notation(from),
            position_to_notation(to)
        );
    } else {
        print_state(game);
    }
}

fn print_state(game: &Game) {
    println!("{}", render_board(game.board()));
    let player = match game.current_player() {
        Color::White => "white",
        Color::Black => "black",
    };
    match game.status() {
        GameStatus::Active => println!("{player} to move"),
        GameStatus::Check => println!("{player} to move - check"),
        GameStatus::Checkmate => println!("checkmate - {player} loses"),
        GameStatus::Stalemate => println!("stalemate"),
    }
}

fn print_history(game: &Game) {
    if game.history().is_empty() {
        println!("no moves yet");
        return;
    }
    for (ply, record) in game.history().iter().enumerate() {
        let mut line = format!(
            "{:>3}. {}{} -> {}",
            ply + 1,
            kind_to_char(record.piece.kind),
            position_to_notation(record.from),
            position_to_notation(record.to),
        );
        if let Some(captured) = record.captured {
            line.push_str(&format!(" x{}", kind_to_char(captured.kind)));
        }
        if let Some(kind) = record.promotion {
            line.push_str(&format!(" ={}", kind_to_char(kind)));
        }
        println!("{line}");
    }
}

fn print_help() {
    println!("commands:");
    println!("  show              print the board");
    println!("  moves <sq>        legal targets from a square, e.g. moves Ba1");
    println!("  move <from> <to>  play a move, e.g. move Ba1 Ca1");
    println!("  move <f> <t> <P>  promotion move with piece choice Q R B N U");
    println!("  history           list played moves");
    println!("  new               start over");
    println!("  quit              leave");
}
