//! Canonical rule constants for the 5×5×5 variant.
//!
//! Holds the board dimension, the promotion piece set, and the starting
//! layout used to initialize and reset games. The two armies are mirror
//! images of each other through the middle level; ranks and files match.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

/// Cells per axis. The board is `BOARD_SIZE`³.
pub const BOARD_SIZE: i8 = 5;

/// Kinds a pawn may promote to.
pub const PROMOTION_KINDS: [PieceKind; 5] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Unicorn,
];

/// Back row on each army's outer level, by file.
pub const OUTER_BACK_ROW: [PieceKind; 5] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::King,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Second row on each army's outer level, by file.
pub const OUTER_SECOND_ROW: [PieceKind; 5] = [
    PieceKind::Bishop,
    PieceKind::Unicorn,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Unicorn,
];

/// Build the starting board.
///
/// White occupies levels 0 (pieces) and 1 (pawns); black mirrors through the
/// level axis on levels 4 and 3. Each back piece sits directly below (above,
/// for black) one of its own pawns, so no slider has an open line at the
/// start.
pub fn starting_board() -> Board {
    let mut board = Board::empty();

    for (file, &kind) in OUTER_BACK_ROW.iter().enumerate() {
        place_mirrored(&mut board, kind, 0, 0, file as i8);
    }
    for (file, &kind) in OUTER_SECOND_ROW.iter().enumerate() {
        place_mirrored(&mut board, kind, 0, 1, file as i8);
    }
    for rank in 0..2 {
        for file in 0..BOARD_SIZE {
            place_mirrored(&mut board, PieceKind::Pawn, 1, rank, file);
        }
    }

    board
}

fn place_mirrored(board: &mut Board, kind: PieceKind, level: i8, rank: i8, file: i8) {
    board.set(
        Position::new(level, rank, file),
        Some(Piece::new(kind, Color::White)),
    );
    board.set(
        Position::new(BOARD_SIZE - 1 - level, rank, file),
        Some(Piece::new(kind, Color::Black)),
    );
}
