//! Rook movement along ranks and files.
//!
//! A rook may land on the first occupied square of a ray when it holds an
//! enemy piece, never beyond it.

use crate::game_state::chess_types::*;
use crate::moves::piece_movement::PieceMovement;
use crate::moves::sliding_path::{is_straight, path_clear, trace_ray, ROOK_DIRECTIONS};

pub struct RookMoves;

impl PieceMovement for RookMoves {
    fn follows_movement_rule(&self, board: &Board, from: Square, to: Square, _mover: Piece) -> bool {
        is_straight(from, to) && path_clear(board, from, to)
    }

    fn legal_destinations(&self, board: &Board, from: Square, mover: Piece) -> Vec<Square> {
        let mut out = Vec::with_capacity(14);
        for direction in ROOK_DIRECTIONS {
            trace_ray(board, from, mover.color, direction, &mut out);
        }
        out
    }
}
