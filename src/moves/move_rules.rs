//! Move legality for a single (from, to) pair.
//!
//! Legality here is turn-agnostic and does not look at the mover's own king:
//! a move that walks into check, or leaves the king attacked, is still legal
//! as far as this module is concerned. Strict rule mode layers that filter on
//! top (see `legal_move_checks`).

use crate::game_state::chess_types::*;
use crate::moves::piece_movement::movement_for;

/// True when the piece on `from` may move to `to` under its movement rule.
///
/// Both squares are on-board by construction of [`Square`]. The move is
/// rejected when `from` is empty or `to` holds a piece of the mover's color,
/// which also rules out `from == to`.
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.get(from) else {
        return false;
    };

    if board.get(to).is_some_and(|target| target.color == mover.color) {
        return false;
    }

    movement_for(mover.kind).follows_movement_rule(board, from, to, mover)
}

/// Squares the piece on `from` may move to. Empty when `from` is empty.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    match board.get(from) {
        Some(mover) => movement_for(mover.kind).legal_destinations(board, from, mover),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_legal_move, legal_destinations};
    use crate::game_state::chess_rules::STARTING_POSITION_MOVE_COUNT;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::test_square as sq;
    use crate::utils::fen_parser::parse_fen;

    const FIXTURES: [&str; 4] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w - - 1 8",
    ];

    #[test]
    fn white_has_twenty_first_moves() {
        let board = Board::standard();
        let mut count = 0;
        for (from, _) in board.pieces(Color::Light) {
            for to in Square::all() {
                if is_legal_move(&board, from, to) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, STARTING_POSITION_MOVE_COUNT);
    }

    #[test]
    fn destinations_agree_with_pairwise_legality() {
        for fen in FIXTURES {
            let game = parse_fen(fen).expect("fixture FEN should parse");
            for from in Square::all() {
                let mut generated = legal_destinations(&game.board, from);
                generated.sort();
                let pairwise: Vec<Square> = Square::all()
                    .filter(|&to| is_legal_move(&game.board, from, to))
                    .collect();
                assert_eq!(generated, pairwise, "mismatch from {from} in {fen}");
            }
        }
    }

    #[test]
    fn empty_source_is_illegal() {
        let board = Board::standard();
        assert!(!is_legal_move(&board, sq("e4"), sq("e5")));
        assert!(legal_destinations(&board, sq("e4")).is_empty());
    }

    #[test]
    fn self_capture_and_null_moves_are_illegal() {
        let board = Board::standard();
        assert!(!is_legal_move(&board, sq("a1"), sq("a2")));
        assert!(!is_legal_move(&board, sq("d1"), sq("d1")));
    }

    #[test]
    fn legality_ignores_whose_turn_it_is() {
        let board = Board::standard();
        assert!(is_legal_move(&board, sq("e7"), sq("e5")));
        assert!(is_legal_move(&board, sq("b8"), sq("c6")));
    }

    #[test]
    fn rook_on_a1_blocked_at_a4() {
        let game = parse_fen("4k3/8/8/8/P7/8/8/R3K3 w - - 0 1").expect("fixture FEN should parse");
        for name in ["a5", "a6", "a7", "a8", "a4"] {
            assert!(!is_legal_move(&game.board, sq("a1"), sq(name)), "a1{name}");
        }
        for name in ["a2", "a3", "b1", "c1", "d1"] {
            assert!(is_legal_move(&game.board, sq("a1"), sq(name)), "a1{name}");
        }
        assert!(!is_legal_move(&game.board, sq("a1"), sq("e1")));
    }

    #[test]
    fn moves_into_check_are_not_filtered() {
        // d2 is attacked by the rook on d1.
        let game = parse_fen("4k3/8/8/8/8/8/8/3rK3 w - - 0 1").expect("fixture FEN should parse");
        assert!(is_legal_move(&game.board, sq("e1"), sq("d2")));
    }
}
