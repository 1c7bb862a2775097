//! Bishop candidate generation: the 12 bi-diagonal sliding rays.
//!
//! A bi-diagonal changes exactly two coordinates per step; the third axis
//! stays fixed, so a bishop never leaves its plane within one ray.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_move_shared::push_ray_targets;
use crate::moves::directions::DIAGONAL_DIRECTIONS;

pub fn generate_bishop_moves(board: &Board, from: Position, mover: Color, out: &mut Vec<Position>) {
    push_ray_targets(board, from, mover, &DIAGONAL_DIRECTIONS, out);
}
