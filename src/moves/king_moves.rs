//! King steps to any adjacent square. No castling.

use crate::game_state::chess_types::*;
use crate::moves::piece_movement::{offset_destinations, PieceMovement};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One square in any direction. No castling.
pub struct KingMoves;

impl PieceMovement for KingMoves {
    fn follows_movement_rule(&self, _board: &Board, from: Square, to: Square, _mover: Piece) -> bool {
        from.row().abs_diff(to.row()) <= 1 && from.col().abs_diff(to.col()) <= 1
    }

    fn legal_destinations(&self, board: &Board, from: Square, mover: Piece) -> Vec<Square> {
        offset_destinations(board, from, mover, &KING_OFFSETS)
    }
}
