//! Knight jumps. Intervening squares are never checked.

use crate::game_state::chess_types::*;
use crate::moves::piece_movement::{offset_destinations, PieceMovement};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knights jump: intervening pieces never obstruct them.
pub struct KnightMoves;

impl PieceMovement for KnightMoves {
    fn follows_movement_rule(&self, _board: &Board, from: Square, to: Square, _mover: Piece) -> bool {
        matches!(
            (from.row().abs_diff(to.row()), from.col().abs_diff(to.col())),
            (2, 1) | (1, 2)
        )
    }

    fn legal_destinations(&self, board: &Board, from: Square, mover: Piece) -> Vec<Square> {
        offset_destinations(board, from, mover, &KNIGHT_OFFSETS)
    }
}
