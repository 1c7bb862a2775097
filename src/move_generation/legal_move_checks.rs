//! Attack oracle: square-attacked and king-in-check queries.
//!
//! Built directly on Attack-mode generation; cost is proportional to the
//! attacker's piece count times per-piece generation, which is fine at 125
//! cells. No caching is attempted.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::move_generator::{generate_moves, GenMode};

/// True iff any piece of `by_color` threatens `pos`.
pub fn is_position_under_attack(board: &Board, pos: Position, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, _)| generate_moves(board, from, GenMode::Attack).contains(&pos))
}

/// Locate the king of `color` by scanning the board.
pub fn king_square(board: &Board, color: Color) -> Option<Position> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(pos, _)| pos)
}

/// True iff `color`'s king is attacked. Returns `false` when no king of that
/// color is on the board; the king-capture status shortcut can produce such
/// boards and the query is deliberately lenient there.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_pos) = king_square(board, color) else {
        return false;
    };
    is_position_under_attack(board, king_pos, color.opposite())
}
