//! Unicorn candidate generation: the 8 triagonal sliding rays.
//!
//! The unicorn is the 3D-only slider; every step changes all three
//! coordinates by ±1 together.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_move_shared::push_ray_targets;
use crate::moves::directions::TRIAGONAL_DIRECTIONS;

pub fn generate_unicorn_moves(
    board: &Board,
    from: Position,
    mover: Color,
    out: &mut Vec<Position>,
) {
    push_ray_targets(board, from, mover, &TRIAGONAL_DIRECTIONS, out);
}
