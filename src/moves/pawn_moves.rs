//! Pawn movement: forward pushes onto empty squares, diagonal captures only.
//! No en-passant and no promotion.

use crate::game_state::chess_types::*;
use crate::moves::piece_movement::PieceMovement;

pub struct PawnMoves;

impl PieceMovement for PawnMoves {
    fn follows_movement_rule(&self, board: &Board, from: Square, to: Square, mover: Piece) -> bool {
        let direction = mover.color.pawn_direction();
        let d_row = to.row() as i8 - from.row() as i8;
        let d_col = to.col() as i8 - from.col() as i8;

        if d_col == 0 && d_row == direction {
            return board.is_empty_at(to);
        }

        if d_col == 0 && d_row == 2 * direction && from.row() == mover.color.pawn_start_row() {
            let Some(intermediate) = from.offset(direction, 0) else {
                return false;
            };
            return board.is_empty_at(intermediate) && board.is_empty_at(to);
        }

        if d_col.abs() == 1 && d_row == direction {
            return is_enemy(board, to, mover.color);
        }

        false
    }

    fn legal_destinations(&self, board: &Board, from: Square, mover: Piece) -> Vec<Square> {
        let direction = mover.color.pawn_direction();
        let mut out = Vec::with_capacity(4);

        if let Some(one_step) = from.offset(direction, 0) {
            if board.is_empty_at(one_step) {
                out.push(one_step);

                if from.row() == mover.color.pawn_start_row() {
                    if let Some(two_step) = one_step.offset(direction, 0) {
                        if board.is_empty_at(two_step) {
                            out.push(two_step);
                        }
                    }
                }
            }
        }

        for d_col in [-1i8, 1i8] {
            if let Some(to) = from.offset(direction, d_col) {
                if is_enemy(board, to, mover.color) {
                    out.push(to);
                }
            }
        }

        out
    }
}

#[inline]
fn is_enemy(board: &Board, square: Square, mover: Color) -> bool {
    board.get(square).is_some_and(|piece| piece.color != mover)
}

#[cfg(test)]
mod tests {
    use super::PawnMoves;
    use crate::game_state::chess_types::*;
    use crate::moves::piece_movement::PieceMovement;
    use crate::utils::algebraic::test_square as sq;
    use crate::utils::fen_parser::parse_fen;

    const WHITE_PAWN: Piece = Piece::new(Color::Light, PieceKind::Pawn);
    const BLACK_PAWN: Piece = Piece::new(Color::Dark, PieceKind::Pawn);

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let board = Board::standard();
        assert_eq!(
            PawnMoves.legal_destinations(&board, sq("e2"), WHITE_PAWN),
            vec![sq("e3"), sq("e4")]
        );
        assert_eq!(
            PawnMoves.legal_destinations(&board, sq("d7"), BLACK_PAWN),
            vec![sq("d6"), sq("d5")]
        );
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let game = parse_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("fixture FEN should parse");
        assert!(!PawnMoves.follows_movement_rule(&game.board, sq("e2"), sq("e4"), WHITE_PAWN));
        assert!(PawnMoves.legal_destinations(&game.board, sq("e2"), WHITE_PAWN).is_empty());

        let game = parse_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("fixture FEN should parse");
        assert!(PawnMoves.follows_movement_rule(&game.board, sq("e2"), sq("e3"), WHITE_PAWN));
        assert!(!PawnMoves.follows_movement_rule(&game.board, sq("e2"), sq("e4"), WHITE_PAWN));
    }

    #[test]
    fn double_push_only_from_the_start_row() {
        let game = parse_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1").expect("fixture FEN should parse");
        assert!(PawnMoves.follows_movement_rule(&game.board, sq("e3"), sq("e4"), WHITE_PAWN));
        assert!(!PawnMoves.follows_movement_rule(&game.board, sq("e3"), sq("e5"), WHITE_PAWN));
    }

    #[test]
    fn diagonal_only_when_capturing() {
        let game = parse_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("fixture FEN should parse");
        assert!(PawnMoves.follows_movement_rule(&game.board, sq("e4"), sq("d5"), WHITE_PAWN));
        assert!(!PawnMoves.follows_movement_rule(&game.board, sq("e4"), sq("f5"), WHITE_PAWN));
        assert!(PawnMoves.follows_movement_rule(&game.board, sq("d5"), sq("e4"), BLACK_PAWN));
        assert_eq!(
            PawnMoves.legal_destinations(&game.board, sq("e4"), WHITE_PAWN),
            vec![sq("e5"), sq("d5")]
        );
    }

    #[test]
    fn pawns_never_move_backwards_or_capture_straight() {
        let game = parse_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1").expect("fixture FEN should parse");
        assert!(!PawnMoves.follows_movement_rule(&game.board, sq("e4"), sq("e5"), WHITE_PAWN));
        assert!(!PawnMoves.follows_movement_rule(&game.board, sq("e4"), sq("e3"), WHITE_PAWN));
        assert!(PawnMoves.legal_destinations(&game.board, sq("e4"), WHITE_PAWN).is_empty());
    }
}
