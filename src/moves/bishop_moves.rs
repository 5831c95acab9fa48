//! Bishop movement along diagonals, stopped by the first occupied square.

use crate::game_state::chess_types::*;
use crate::moves::piece_movement::PieceMovement;
use crate::moves::sliding_path::{is_diagonal, path_clear, trace_ray, BISHOP_DIRECTIONS};

pub struct BishopMoves;

impl PieceMovement for BishopMoves {
    fn follows_movement_rule(&self, board: &Board, from: Square, to: Square, _mover: Piece) -> bool {
        is_diagonal(from, to) && path_clear(board, from, to)
    }

    fn legal_destinations(&self, board: &Board, from: Square, mover: Piece) -> Vec<Square> {
        let mut out = Vec::with_capacity(13);
        for direction in BISHOP_DIRECTIONS {
            trace_ray(board, from, mover.color, direction, &mut out);
        }
        out
    }
}
