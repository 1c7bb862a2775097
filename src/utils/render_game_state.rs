//! Terminal-oriented board renderer.
//!
//! Draws the five levels side by side, highest level first so white's home
//! level ends up at the bottom left, for debugging and the demo binary.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Position;
use crate::utils::notation::piece_to_char;

/// Render all five levels of `board` to a string.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for level in (0..BOARD_SIZE).rev() {
        out.push_str(&format!("Level {}\n", char::from(b'A' + level as u8)));
        for rank in (0..BOARD_SIZE).rev() {
            out.push(char::from(b'1' + rank as u8));
            out.push(' ');
            for file in 0..BOARD_SIZE {
                match board.piece_at(Position::new(level, rank, file)) {
                    Some(piece) => out.push(piece_to_char(piece)),
                    None => out.push('.'),
                }
                if file < BOARD_SIZE - 1 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e\n");
        if level > 0 {
            out.push('\n');
        }
    }

    out
}
