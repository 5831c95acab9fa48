//! 8x8 mailbox board.
//!
//! Pure storage: no legality is enforced here. Every square holds an
//! `Option<Piece>`, so "at most one piece per square" holds structurally.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard initial position, 16 pieces per side.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Dark, kind));
            board.squares[1][col] = Some(Piece::new(Color::Dark, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::Light, PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::new(Color::Light, kind));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Clears `square` and returns what was on it.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Every occupied square with its piece, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Locates the king of `color`.
    ///
    /// A missing king means the position was corrupted from outside the
    /// engine; the error is meant to abort the game, not to be shown as a
    /// rejected move.
    pub fn find_king(&self, color: Color) -> ChessResult<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.occupied()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
            .ok_or(ChessErrors::NoKingFound(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn standard_board_has_sixteen_pieces_per_side() {
        let board = Board::standard();
        assert_eq!(board.pieces(Color::Light).count(), 16);
        assert_eq!(board.pieces(Color::Dark).count(), 16);
        assert_eq!(
            board.get(sq("e1")),
            Some(Piece::new(Color::Light, PieceKind::King))
        );
        assert_eq!(
            board.get(sq("d8")),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        assert!(board.is_empty_at(sq("e4")));
    }

    #[test]
    fn find_king_locates_both_kings() {
        let board = Board::standard();
        assert_eq!(board.find_king(Color::Light), Ok(sq("e1")));
        assert_eq!(board.find_king(Color::Dark), Ok(sq("e8")));
    }

    #[test]
    fn find_king_reports_missing_king() {
        let mut board = Board::standard();
        board.set(sq("e8"), None);
        assert_eq!(
            board.find_king(Color::Dark),
            Err(ChessErrors::NoKingFound(Color::Dark))
        );
    }

    #[test]
    fn take_clears_the_square() {
        let mut board = Board::standard();
        let pawn = board.take(sq("a2"));
        assert_eq!(pawn, Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert!(board.is_empty_at(sq("a2")));
    }
}
