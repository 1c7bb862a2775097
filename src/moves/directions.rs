//! Direction and offset tables for 3D piece movement.
//!
//! Tables are generated at compile time. In three dimensions a direction may
//! change one coordinate (orthogonal), two (bi-diagonal), or all three
//! (triagonal); sliders own one of those families each, the queen the first
//! two, and the king steps a single cell along any of the 26.

/// A per-step coordinate delta `(level, rank, file)`.
pub type Offset = (i8, i8, i8);

/// Rook ray directions: one coordinate changes.
pub const ORTHOGONAL_DIRECTIONS: [Offset; 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Bishop ray directions: exactly two coordinates change.
pub const DIAGONAL_DIRECTIONS: [Offset; 12] = generate_directions_with_axes::<12>(2);

/// Unicorn ray directions: all three coordinates change.
pub const TRIAGONAL_DIRECTIONS: [Offset; 8] = generate_directions_with_axes::<8>(3);

/// Queen ray directions: orthogonal plus bi-diagonal (no triagonal).
pub const QUEEN_DIRECTIONS: [Offset; 18] = generate_queen_directions();

/// King single-step offsets: every nonzero delta in `{-1, 0, 1}`³.
pub const KING_OFFSETS: [Offset; 26] = generate_king_offsets();

/// Knight single-step offsets: the classic (±1, ±2) jump applied to each of
/// the three axis pairs with the remaining axis fixed.
pub const KNIGHT_OFFSETS: [Offset; 24] = generate_knight_offsets();

const fn generate_directions_with_axes<const N: usize>(moving_axes: i8) -> [Offset; N] {
    let mut out = [(0i8, 0i8, 0i8); N];
    let mut idx = 0;
    let mut dl = -1i8;
    while dl <= 1 {
        let mut dr = -1i8;
        while dr <= 1 {
            let mut df = -1i8;
            while df <= 1 {
                let nonzero = (dl != 0) as i8 + (dr != 0) as i8 + (df != 0) as i8;
                if nonzero == moving_axes {
                    out[idx] = (dl, dr, df);
                    idx += 1;
                }
                df += 1;
            }
            dr += 1;
        }
        dl += 1;
    }
    out
}

const fn generate_king_offsets() -> [Offset; 26] {
    let mut out = [(0i8, 0i8, 0i8); 26];
    let mut idx = 0;
    let mut dl = -1i8;
    while dl <= 1 {
        let mut dr = -1i8;
        while dr <= 1 {
            let mut df = -1i8;
            while df <= 1 {
                if dl != 0 || dr != 0 || df != 0 {
                    out[idx] = (dl, dr, df);
                    idx += 1;
                }
                df += 1;
            }
            dr += 1;
        }
        dl += 1;
    }
    out
}

const fn generate_knight_offsets() -> [Offset; 24] {
    let jumps: [(i8, i8); 8] = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    let mut out = [(0i8, 0i8, 0i8); 24];
    let mut idx = 0;
    let mut pair = 0;
    while pair < 3 {
        let mut j = 0;
        while j < 8 {
            let (a, b) = jumps[j];
            out[idx] = match pair {
                0 => (a, b, 0),
                1 => (a, 0, b),
                _ => (0, a, b),
            };
            idx += 1;
            j += 1;
        }
        pair += 1;
    }
    out
}

const fn generate_queen_directions() -> [Offset; 18] {
    let mut out = [(0i8, 0i8, 0i8); 18];
    let mut i = 0;
    while i < 6 {
        out[i] = ORTHOGONAL_DIRECTIONS[i];
        i += 1;
    }
    let mut j = 0;
    while j < 12 {
        out[6 + j] = DIAGONAL_DIRECTIONS[j];
        j += 1;
    }
    out
}
