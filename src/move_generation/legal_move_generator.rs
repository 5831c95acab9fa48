//! Whole-side move generation and highlight sets.
//!
//! `SimplifiedMoveGenerator` lists every rules-legal (from, to) pair.
//! `StrictMoveGenerator` additionally drops pairs that leave the mover's own
//! king attacked.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::leaves_king_in_check;
use crate::moves::move_rules::legal_destinations;

pub type MovePair = (Square, Square);

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &Board, color: Color) -> ChessResult<Vec<MovePair>>;
}

pub struct SimplifiedMoveGenerator;
pub struct StrictMoveGenerator;

impl MoveGenerator for SimplifiedMoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color) -> ChessResult<Vec<MovePair>> {
        let mut out = Vec::with_capacity(64);
        for (from, _) in board.pieces(color) {
            out.extend(legal_destinations(board, from).into_iter().map(|to| (from, to)));
        }
        Ok(out)
    }
}

impl MoveGenerator for StrictMoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color) -> ChessResult<Vec<MovePair>> {
        let pseudo = SimplifiedMoveGenerator.generate_moves(board, color)?;
        let mut legal = Vec::with_capacity(pseudo.len());
        for (from, to) in pseudo {
            if !leaves_king_in_check(board, from, to)? {
                legal.push((from, to));
            }
        }
        Ok(legal)
    }
}

pub fn generator_for(mode: RuleMode) -> &'static dyn MoveGenerator {
    match mode {
        RuleMode::Simplified => &SimplifiedMoveGenerator,
        RuleMode::Strict => &StrictMoveGenerator,
    }
}

/// Destinations of the piece on `from` under `mode`.
pub fn destinations_for_mode(board: &Board, from: Square, mode: RuleMode) -> ChessResult<Vec<Square>> {
    let candidates = legal_destinations(board, from);
    match mode {
        RuleMode::Simplified => Ok(candidates),
        RuleMode::Strict => {
            let mut out = Vec::with_capacity(candidates.len());
            for to in candidates {
                if !leaves_king_in_check(board, from, to)? {
                    out.push(to);
                }
            }
            Ok(out)
        }
    }
}

/// Set of highlighted squares, one bit per square index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightSet(u64);

impl HighlightSet {
    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.0 & (1u64 << square.index()) != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&square| self.contains(square))
    }
}

impl FromIterator<Square> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = HighlightSet::default();
        for square in iter {
            set.insert(square);
        }
        set
    }
}

/// Highlight overlay for the piece on `from`. Empty when `from` is empty.
pub fn highlight_set(board: &Board, from: Square, mode: RuleMode) -> ChessResult<HighlightSet> {
    Ok(destinations_for_mode(board, from, mode)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_MOVE_COUNT;
    use crate::utils::algebraic::test_square as sq;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn both_generators_find_twenty_opening_moves() {
        let board = Board::standard();
        for mode in [RuleMode::Simplified, RuleMode::Strict] {
            let moves = generator_for(mode)
                .generate_moves(&board, Color::Light)
                .expect("start position has both kings");
            assert_eq!(moves.len(), STARTING_POSITION_MOVE_COUNT);
            let knight_moves = moves
                .iter()
                .filter(|(from, _)| board.get(*from).is_some_and(|p| p.kind == PieceKind::Knight))
                .count();
            assert_eq!(knight_moves, 4);
        }
    }

    #[test]
    fn strict_generator_drops_pinned_moves() {
        let game = parse_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").expect("fixture FEN should parse");
        let simplified = SimplifiedMoveGenerator
            .generate_moves(&game.board, Color::Light)
            .expect("simplified generation never fails");
        let strict = StrictMoveGenerator
            .generate_moves(&game.board, Color::Light)
            .expect("both kings present");

        assert!(simplified.iter().any(|&(from, _)| from == sq("e2")));
        assert!(!strict.iter().any(|&(from, _)| from == sq("e2")));
        // King: d1, d2, f1, f2 stay legal; e2 is occupied by its own bishop.
        assert_eq!(strict.len(), 4);
    }

    #[test]
    fn highlight_set_marks_knight_targets() {
        let board = Board::standard();
        let set = highlight_set(&board, sq("b1"), RuleMode::Simplified).expect("no king lookup needed");
        assert_eq!(set.len(), 2);
        assert!(set.contains(sq("a3")));
        assert!(set.contains(sq("c3")));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![sq("a3"), sq("c3")]);

        let empty = highlight_set(&board, sq("e4"), RuleMode::Strict).expect("empty square");
        assert!(empty.is_empty());
    }
}
