use crate::game_state::chess_types::*;

/// Single undo record for `apply_move` / `undo_move`.
///
/// The moved piece is not stored: after the move it sits on `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}
