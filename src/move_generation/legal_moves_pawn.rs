//! Pawn candidate generation, the only piece whose output depends on the
//! generation mode.
//!
//! Pawns advance one level toward the enemy side (white +1, black -1) onto an
//! empty cell, with no initial double step and no en passant. Captures sit at
//! the forward level, offset by ±1 in rank or ±1 in file but never both. In
//! `Attack` mode every in-bounds capture cell counts as threatened regardless
//! of occupancy; in `Normal` mode a capture cell is a target only when it
//! holds an enemy piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::move_generator::GenMode;

const CAPTURE_OFFSETS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_pawn_moves(
    board: &Board,
    from: Position,
    mover: Color,
    mode: GenMode,
    out: &mut Vec<Position>,
) {
    let direction = mover.pawn_direction();

    if mode == GenMode::Normal {
        let forward = from.offset(direction, 0, 0);
        if forward.in_bounds() && board.piece_at(forward).is_none() {
            out.push(forward);
        }
    }

    for (d_rank, d_file) in CAPTURE_OFFSETS {
        let target = from.offset(direction, d_rank, d_file);
        if !target.in_bounds() {
            continue;
        }
        match mode {
            GenMode::Attack => out.push(target),
            GenMode::Normal => {
                if matches!(board.piece_at(target), Some(piece) if piece.color != mover) {
                    out.push(target);
                }
            }
        }
    }
}
