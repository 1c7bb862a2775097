//! Copy-on-commit move application.
//!
//! Builds a fresh board with one move applied; the input board is never
//! mutated, so references held by observers stay valid across commits. Also
//! used by the legality filter to build the hypothetical boards it checks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Position};

/// Apply `from -> to` on a copy of `board`, optionally overriding the moved
/// piece's kind (pawn promotion). Returns the new board and the captured
/// piece, if any. Callers are expected to pass a validated move; an empty
/// `from` yields an unchanged copy.
pub fn apply_move_to_board(
    board: &Board,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> (Board, Option<Piece>) {
    let mut next = board.clone();

    let Some(piece) = next.piece_at(from) else {
        return (next, None);
    };
    let captured = next.piece_at(to);

    let placed = match promotion {
        Some(kind) => Piece::new(kind, piece.color),
        None => piece,
    };
    next.set(from, None);
    next.set(to, Some(placed));

    (next, captured)
}
