//! Check and terminal-state analysis.
//!
//! An attack is any rules-legal move of an enemy piece onto the square, as
//! decided by [`is_legal_move`]. Under [`RuleMode::Simplified`] the move count
//! behind stalemate/checkmate does not filter out moves that leave the
//! mover's own king attacked; under [`RuleMode::Strict`] it does.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::move_piece;
use crate::moves::move_rules::{is_legal_move, legal_destinations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
    /// The last move took a king. Only reachable in simplified mode, where
    /// a king may be left en prise.
    KingCaptured,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::KingCaptured
        )
    }
}

/// True when the king of `color` is attacked by any enemy piece.
pub fn is_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king_sq = board.find_king(color)?;
    Ok(is_square_attacked(board, king_sq, color.opposite()))
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces(attacker_color)
        .any(|(from, _)| is_legal_move(board, from, square))
}

/// Every piece of `attacker_color` with a legal move onto `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<(Square, Piece)> {
    board
        .pieces(attacker_color)
        .filter(|&(from, _)| is_legal_move(board, from, square))
        .collect()
}

/// True when playing `from`-`to` would leave the mover's own king attacked.
pub fn leaves_king_in_check(board: &Board, from: Square, to: Square) -> ChessResult<bool> {
    let Some(mover) = board.get(from) else {
        return Ok(false);
    };

    let mut scratch = board.clone();
    move_piece(&mut scratch, from, to);
    is_in_check(&scratch, mover.color)
}

/// True when `color` has at least one move under `mode`.
pub fn has_legal_move(board: &Board, color: Color, mode: RuleMode) -> ChessResult<bool> {
    for (from, _) in board.pieces(color) {
        for to in legal_destinations(board, from) {
            match mode {
                RuleMode::Simplified => return Ok(true),
                RuleMode::Strict => {
                    if !leaves_king_in_check(board, from, to)? {
                        return Ok(true);
                    }
                }
            }
        }
    }

    Ok(false)
}

/// Not in check and nothing to play.
pub fn is_stalemate(board: &Board, color: Color, mode: RuleMode) -> ChessResult<bool> {
    Ok(!is_in_check(board, color)? && !has_legal_move(board, color, mode)?)
}

pub fn is_checkmate(board: &Board, color: Color, mode: RuleMode) -> ChessResult<bool> {
    Ok(is_in_check(board, color)? && !has_legal_move(board, color, mode)?)
}

/// Classifies the position for `color`, the side about to move.
pub fn classify_position(board: &Board, color: Color, mode: RuleMode) -> ChessResult<GameStatus> {
    let in_check = is_in_check(board, color)?;
    let can_move = has_legal_move(board, color, mode)?;

    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::InProgress,
    })
}

/// Status of `game_state` for its side to move under its own rule mode.
pub fn game_status(game_state: &GameState) -> ChessResult<GameStatus> {
    classify_position(&game_state.board, game_state.side_to_move, game_state.rule_mode)
}
