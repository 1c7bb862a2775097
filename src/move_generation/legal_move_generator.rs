//! Legality filtering over pseudo-legal candidates.
//!
//! Every candidate is checked by applying it to a hypothetical board and
//! asking whether the mover's own king is then attacked. There is no cheaper
//! shortcut; the simulate-then-check step runs for every candidate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{generate_moves, GenMode};

/// Legal target squares for the piece at `from`, owned by `player`. Empty
/// when the square is empty or holds the other color. Candidate order is
/// preserved from generation.
pub fn legal_moves(board: &Board, from: Position, player: Color) -> Vec<Position> {
    match board.piece_at(from) {
        Some(piece) if piece.color == player => {}
        _ => return Vec::new(),
    }

    generate_moves(board, from, GenMode::Normal)
        .into_iter()
        .filter(|&to| {
            let (hypothetical, _) = apply_move_to_board(board, from, to, None);
            !is_king_in_check(&hypothetical, player)
        })
        .collect()
}

/// True iff at least one piece of `color` has at least one legal move.
/// Used for terminal-state detection; returns on the first survivor.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.pieces_of(color).any(|(from, _)| {
        generate_moves(board, from, GenMode::Normal)
            .into_iter()
            .any(|to| {
                let (hypothetical, _) = apply_move_to_board(board, from, to, None);
                !is_king_in_check(&hypothetical, color)
            })
    })
}
