//! The 5×5×5 board grid.
//!
//! `Board` is pure data: a cubic array of optional pieces with bounds-checked
//! cell access and iteration helpers. Committing a move never mutates a board
//! in place at the game level; callers clone and install a fresh board.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Piece, Position};

const SIZE: usize = BOARD_SIZE as usize;

/// Cubic piece grid indexed `[level][rank][file]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[[Option<Piece>; SIZE]; SIZE]; SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self {
            cells: [[[None; SIZE]; SIZE]; SIZE],
        }
    }

    /// Piece at `pos`, or `None` for an empty or off-board cell.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells[pos.level as usize][pos.rank as usize][pos.file as usize]
    }

    /// Overwrite the cell at `pos`. Off-board positions are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.in_bounds() {
            self.cells[pos.level as usize][pos.rank as usize][pos.file as usize] = piece;
        }
    }

    /// Every on-board position, in level/rank/file order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|level| {
            (0..BOARD_SIZE).flat_map(move |rank| {
                (0..BOARD_SIZE).map(move |file| Position::new(level, rank, file))
            })
        })
    }

    /// Occupied cells of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Self::positions().filter_map(move |pos| match self.piece_at(pos) {
            Some(piece) if piece.color == color => Some((pos, piece)),
            _ => None,
        })
    }
}
