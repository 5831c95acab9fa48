//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type of the crate. Input and rule
//! violations (`InvalidSquare` through `ExposesKing`) are recoverable: the
//! console reports them and re-prompts without touching the game state.
//! `NoKingFound` signals a corrupted position and is never produced by the
//! engine itself; callers treat it as fatal.

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// A coordinate string did not name a square on the board.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("there is no piece on {0}")]
    EmptySource(Square),

    /// The selected piece does not belong to the side to move.
    #[error("it is {side_to_move}'s turn, the piece on {square} belongs to {owner}")]
    WrongTurn {
        square: Square,
        owner: Color,
        side_to_move: Color,
    },

    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// Only raised in strict rule mode.
    #[error("move {from}{to} would leave the {color} king in check")]
    ExposesKing {
        from: Square,
        to: Square,
        color: Color,
    },

    #[error("no {0} king found on the board")]
    NoKingFound(Color),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;

impl ChessErrors {
    /// True for the variants that only reject a single input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ChessErrors::NoKingFound(_))
    }
}
