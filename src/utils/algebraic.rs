//! Square conversions for algebraic coordinates.
//!
//! Files `a`..`h` map to columns 0..7 and ranks `1`..`8` map to rows 7..0.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
///
/// Surrounding whitespace is ignored and the file letter may be uppercase.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let trimmed = square.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidSquare(trimmed.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidSquare(trimmed.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a').ok_or_else(|| ChessErrors::InvalidSquare(trimmed.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parses a square name that a test knows to be valid.
#[cfg(test)]
pub(crate) fn test_square(name: &str) -> Square {
    algebraic_to_square(name).unwrap_or_else(|err| panic!("bad test square {name}: {err}"))
}
