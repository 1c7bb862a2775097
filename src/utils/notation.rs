//! Coordinate notation for 3D squares and piece kinds.
//!
//! A square is written level-first as `<A-E><a-e><1-5>`, e.g. `Ac1` for the
//! white king's starting square and `Ec5` for a far corner: uppercase level,
//! lowercase file, rank digit. Piece kinds use the single letters
//! `K Q R B N U P`.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid square {0:?}: expected <A-E><a-e><1-5>")]
    InvalidSquare(String),
    #[error("invalid piece letter {0:?}: expected one of K Q R B N U P")]
    InvalidPiece(char),
}

/// Format a position, e.g. `Ca3`. Off-board positions (including the
/// deselect sentinel) render as `--`.
pub fn position_to_notation(pos: Position) -> String {
    if !pos.in_bounds() {
        return "--".to_owned();
    }
    format!(
        "{}{}{}",
        char::from(b'A' + pos.level as u8),
        char::from(b'a' + pos.file as u8),
        pos.rank + 1
    )
}

/// Parse a square written as `<A-E><a-e><1-5>`.
pub fn notation_to_position(square: &str) -> Result<Position, NotationError> {
    let invalid = || NotationError::InvalidSquare(square.to_owned());
    let bytes = square.as_bytes();
    if bytes.len() != 3 {
        return Err(invalid());
    }

    let (level, file, rank) = (bytes[0], bytes[1], bytes[2]);
    if !(b'A'..=b'E').contains(&level)
        || !(b'a'..=b'e').contains(&file)
        || !(b'1'..=b'5').contains(&rank)
    {
        return Err(invalid());
    }

    Ok(Position::new(
        (level - b'A') as i8,
        (rank - b'1') as i8,
        (file - b'a') as i8,
    ))
}

/// One-letter piece kind, uppercase for white and lowercase for black.
pub fn piece_to_char(piece: Piece) -> char {
    let upper = kind_to_char(piece.kind);
    match piece.color {
        Color::White => upper,
        Color::Black => upper.to_ascii_lowercase(),
    }
}

pub fn kind_to_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'P',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        PieceKind::Unicorn => 'U',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    }
}

pub fn char_to_kind(letter: char) -> Result<PieceKind, NotationError> {
    match letter.to_ascii_uppercase() {
        'P' => Ok(PieceKind::Pawn),
        'N' => Ok(PieceKind::Knight),
        'B' => Ok(PieceKind::Bishop),
        'R' => Ok(PieceKind::Rook),
        'U' => Ok(PieceKind::Unicorn),
        'Q' => Ok(PieceKind::Queen),
        'K' => Ok(PieceKind::King),
        _ => Err(NotationError::InvalidPiece(letter)),
    }
}
