//! Queen movement, built from the rook and bishop rules.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BishopMoves;
use crate::moves::piece_movement::PieceMovement;
use crate::moves::rook_moves::RookMoves;

/// Union of the rook and bishop rules.
pub struct QueenMoves;

impl PieceMovement for QueenMoves {
    fn follows_movement_rule(&self, board: &Board, from: Square, to: Square, mover: Piece) -> bool {
        RookMoves.follows_movement_rule(board, from, to, mover)
            || BishopMoves.follows_movement_rule(board, from, to, mover)
    }

    fn legal_destinations(&self, board: &Board, from: Square, mover: Piece) -> Vec<Square> {
        let mut out = RookMoves.legal_destinations(board, from, mover);
        out.extend(BishopMoves.legal_destinations(board, from, mover));
        out
    }
}
