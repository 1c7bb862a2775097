//! King candidate generation: one step along any of the 26 unit offsets.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_move_shared::push_step_targets;
use crate::moves::directions::KING_OFFSETS;

pub fn generate_king_moves(board: &Board, from: Position, mover: Color, out: &mut Vec<Position>) {
    push_step_targets(board, from, mover, &KING_OFFSETS, out);
}
