//! Straight and diagonal line helpers shared by rooks, bishops and queens.

use crate::game_state::chess_types::*;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// True when every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, a column or a diagonal. Squares are
/// stepped one at a time from `from` toward `to`, both endpoints excluded.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).signum();
    let d_col = (to.col() as i8 - from.col() as i8).signum();
    debug_assert!(is_aligned(from, to), "path_clear on unaligned squares {from}{to}");

    let mut current = from.offset(d_row, d_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty_at(square) {
            return false;
        }
        current = square.offset(d_row, d_col);
    }

    // Walked off the board without meeting `to`.
    from == to
}

/// Same row, same column, or same diagonal.
#[inline]
pub fn is_aligned(from: Square, to: Square) -> bool {
    is_straight(from, to) || is_diagonal(from, to)
}

#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    from.row() == to.row() || from.col() == to.col()
}

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    from.row().abs_diff(to.row()) == from.col().abs_diff(to.col())
}

/// Appends every square reachable from `from` along one direction: empty
/// squares up to and including the first enemy piece, stopping before a
/// friendly one.
pub fn trace_ray(board: &Board, from: Square, mover: Color, direction: (i8, i8), out: &mut Vec<Square>) {
    let (d_row, d_col) = direction;
    let mut current = from.offset(d_row, d_col);

    while let Some(square) = current {
        match board.get(square) {
            None => out.push(square),
            Some(piece) => {
                if piece.color != mover {
                    out.push(square);
                }
                break;
            }
        }
        current = square.offset(d_row, d_col);
    }
}
