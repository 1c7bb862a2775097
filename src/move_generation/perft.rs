//! Legal-move tree enumeration with per-move counters.
//!
//! Walks every legal move to a fixed depth, fanning promotion pushes out over
//! the five promotion kinds. Used by tests and the criterion bench to pin
//! down move generation behavior; there is no search on top of it.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count the legal game tree of `to_move` on `board` down to `depth` plies.
pub fn perft(board: &Board, to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (from, piece) in board.pieces_of(to_move) {
        for to in legal_moves(board, from, to_move) {
            let is_promotion =
                piece.kind == PieceKind::Pawn && to.level == to_move.promotion_level();
            if is_promotion {
                for kind in PROMOTION_KINDS {
                    count_move(board, to_move, from, to, Some(kind), depth, &mut total);
                }
            } else {
                count_move(board, to_move, from, to, None, depth, &mut total);
            }
        }
    }
    total
}

#[allow(clippy::too_many_arguments)]
fn count_move(
    board: &Board,
    to_move: Color,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
    depth: u8,
    total: &mut PerftCounts,
) {
    let (next, captured) = apply_move_to_board(board, from, to, promotion);
    let opponent = to_move.opposite();

    if depth == 1 {
        let in_check = is_king_in_check(&next, opponent);
        total.merge(PerftCounts {
            nodes: 1,
            captures: captured.is_some() as u64,
            promotions: promotion.is_some() as u64,
            checks: in_check as u64,
            checkmates: (in_check && !has_any_legal_move(&next, opponent)) as u64,
        });
    } else {
        total.merge(perft(&next, opponent, depth - 1));
    }
}
