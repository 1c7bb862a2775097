//! Rook candidate generation: the 6 orthogonal sliding rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_move_shared::push_ray_targets;
use crate::moves::directions::ORTHOGONAL_DIRECTIONS;

pub fn generate_rook_moves(board: &Board, from: Position, mover: Color, out: &mut Vec<Position>) {
    push_ray_targets(board, from, mover, &ORTHOGONAL_DIRECTIONS, out);
}
