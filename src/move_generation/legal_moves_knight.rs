//! Knight candidate generation: the 24 single-step L-jumps.
//!
//! No blocking semantics; a jump is included whenever the target is in
//! bounds and not occupied by a friendly piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_move_shared::push_step_targets;
use crate::moves::directions::KNIGHT_OFFSETS;

pub fn generate_knight_moves(board: &Board, from: Position, mover: Color, out: &mut Vec<Position>) {
    push_step_targets(board, from, mover, &KNIGHT_OFFSETS, out);
}
