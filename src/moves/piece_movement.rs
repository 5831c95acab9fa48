//! Per-kind movement capability.
//!
//! Each piece kind gets a zero-sized implementor of [`PieceMovement`]; the
//! closed set is mapped from [`PieceKind`] by [`movement_for`].

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BishopMoves;
use crate::moves::king_moves::KingMoves;
use crate::moves::knight_moves::KnightMoves;
use crate::moves::pawn_moves::PawnMoves;
use crate::moves::queen_moves::QueenMoves;
use crate::moves::rook_moves::RookMoves;

pub trait PieceMovement: Send + Sync {
    /// Movement rule of this kind for `mover` standing on `from`.
    ///
    /// Callers have already established that `to` does not hold a piece of
    /// the mover's color.
    fn follows_movement_rule(&self, board: &Board, from: Square, to: Square, mover: Piece) -> bool;

    /// Every square `mover` may reach from `from`, friendly squares excluded.
    fn legal_destinations(&self, board: &Board, from: Square, mover: Piece) -> Vec<Square>;
}

pub fn movement_for(kind: PieceKind) -> &'static dyn PieceMovement {
    match kind {
        PieceKind::Pawn => &PawnMoves,
        PieceKind::Knight => &KnightMoves,
        PieceKind::Bishop => &BishopMoves,
        PieceKind::Rook => &RookMoves,
        PieceKind::Queen => &QueenMoves,
        PieceKind::King => &KingMoves,
    }
}

/// Offset-based destinations shared by knights and kings.
pub(crate) fn offset_destinations(
    board: &Board,
    from: Square,
    mover: Piece,
    offsets: &[(i8, i8)],
) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&to| board.get(to).map_or(true, |piece| piece.color != mover.color))
        .collect()
}
