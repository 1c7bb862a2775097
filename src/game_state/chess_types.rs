//! Core value types for the 5×5×5 rules engine.
//!
//! Everything here is plain data: colors, piece kinds, board coordinates,
//! game status, and the records the game state machine appends or installs.
//! Behavior lives in `move_generation` and `game_state::game`.

use crate::game_state::chess_rules::BOARD_SIZE;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn advance direction along the level axis.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Level at which this color's pawns promote.
    #[inline]
    pub const fn promotion_level(self) -> i8 {
        match self {
            Color::White => BOARD_SIZE - 1,
            Color::Black => 0,
        }
    }
}

/// Piece kind. `Unicorn` is the triagonal slider unique to the 3D variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Unicorn,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Unicorn => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }
}

/// A colored piece occupying one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board coordinate triple. Coordinates are signed so callers can pass the
/// all-negative deselect sentinel; anything outside `[0, 5)` is off-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub level: i8,
    pub rank: i8,
    pub file: i8,
}

impl Position {
    /// Sentinel accepted by `select_square` to clear the selection.
    pub const DESELECT: Position = Position {
        level: -1,
        rank: -1,
        file: -1,
    };

    #[inline]
    pub const fn new(level: i8, rank: i8, file: i8) -> Self {
        Self { level, rank, file }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.level >= 0
            && self.level < BOARD_SIZE
            && self.rank >= 0
            && self.rank < BOARD_SIZE
            && self.file >= 0
            && self.file < BOARD_SIZE
    }

    /// Translate by an offset triple. The result may be off-board.
    #[inline]
    pub const fn offset(self, d_level: i8, d_rank: i8, d_file: i8) -> Self {
        Self {
            level: self.level + d_level,
            rank: self.rank + d_rank,
            file: self.file + d_file,
        }
    }
}

/// Game status as recomputed after every committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Historical record of one committed move. History is append-only and never
/// consulted for legality (no en passant or castling state exists).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
}

/// Transient marker for a pawn awaiting its promotion choice. At most one
/// instance is live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub position: Position,
    pub color: Color,
}

/// Configuration for the promotion sub-flow. Not part of the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub auto_promote: bool,
    pub default_promotion_piece: PieceKind,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            auto_promote: false,
            default_promotion_piece: PieceKind::Queen,
        }
    }
}
