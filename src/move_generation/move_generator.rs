//! Per-piece candidate dispatch.
//!
//! `generate_moves` enumerates pseudo-legal target squares for the piece on
//! one cell. Candidates respect movement and blocking rules but are not yet
//! filtered for self-check; that is `legal_move_generator`'s job. Output
//! order follows each piece's direction/offset table and is deterministic.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::legal_moves_unicorn::generate_unicorn_moves;

/// Generation mode. `Attack` is used only for threat computation and differs
/// from `Normal` solely for pawns, whose diagonal capture squares count as
/// threatened even when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    Normal,
    Attack,
}

/// Pseudo-legal targets for the piece at `from`; empty when the cell is
/// empty or off-board.
pub fn generate_moves(board: &Board, from: Position, mode: GenMode) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, mode, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, &mut out),
        PieceKind::Unicorn => generate_unicorn_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => generate_king_moves(board, from, piece.color, &mut out),
    }
    out
}
