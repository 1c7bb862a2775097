//! Queen candidate generation: the 18 orthogonal and bi-diagonal rays.
//!
//! The queen does not slide triagonally; that family belongs to the unicorn.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_move_shared::push_ray_targets;
use crate::moves::directions::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(board: &Board, from: Position, mover: Color, out: &mut Vec<Position>) {
    push_ray_targets(board, from, mover, &QUEEN_DIRECTIONS, out);
}
