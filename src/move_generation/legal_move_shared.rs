//! Shared stepping and ray-walking helpers for per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::directions::Offset;

/// Push every in-bounds single-step target that is empty or holds an enemy.
pub fn push_step_targets(
    board: &Board,
    from: Position,
    mover: Color,
    offsets: &[Offset],
    out: &mut Vec<Position>,
) {
    for &(dl, dr, df) in offsets {
        let target = from.offset(dl, dr, df);
        if !target.in_bounds() {
            continue;
        }
        match board.piece_at(target) {
            Some(piece) if piece.color == mover => {}
            _ => out.push(target),
        }
    }
}

/// Walk each ray cell by cell: stop and exclude on a friendly piece, stop and
/// include on an enemy piece, continue to the board edge otherwise.
pub fn push_ray_targets(
    board: &Board,
    from: Position,
    mover: Color,
    directions: &[Offset],
    out: &mut Vec<Position>,
) {
    for &(dl, dr, df) in directions {
        let mut cursor = from.offset(dl, dr, df);
        while cursor.in_bounds() {
            match board.piece_at(cursor) {
                None => out.push(cursor),
                Some(piece) => {
                    if piece.color != mover {
                        out.push(cursor);
                    }
                    break;
                }
            }
            cursor = cursor.offset(dl, dr, df);
        }
    }
}
