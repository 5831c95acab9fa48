//! Move application and undo.
//!
//! [`apply_move`] trusts its caller: legality is established beforehand by
//! [`validate_move`] (or by a move generator). [`try_move`] chains the two and
//! classifies the resulting position.

use tracing::{debug, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{game_status, leaves_king_in_check, GameStatus};
use crate::moves::move_rules::is_legal_move;

/// Result of a successfully played move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// Status for the side that moves next.
    pub status: GameStatus,
}

/// Moves whatever stands on `from` to `to`, overwriting the destination.
/// Returns the piece that stood on `to`.
#[inline]
pub fn move_piece(board: &mut Board, from: Square, to: Square) -> Option<Piece> {
    let mover = board.take(from);
    let captured = board.get(to);
    board.set(to, mover);
    captured
}

/// Plays `from`-`to` without any legality check, logs it for undo and hands
/// the turn to the other side.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> MoveRecord {
    let captured = move_piece(&mut game_state.board, from, to);
    let record = MoveRecord { from, to, captured };

    game_state.undo_stack.push_back(record);
    if let Some(limit) = game_state.history_limit {
        while game_state.undo_stack.len() > limit {
            if let Some(evicted) = game_state.undo_stack.pop_front() {
                trace!(from = %evicted.from, to = %evicted.to, "history limit reached, dropping oldest move");
            }
        }
    }

    debug!(
        side = %game_state.side_to_move,
        %from,
        %to,
        captured = ?captured,
        "applied move"
    );
    game_state.side_to_move = game_state.side_to_move.opposite();

    record
}

/// Reverts the most recent move. Returns `None`, leaving the state
/// untouched, when there is nothing to undo.
pub fn undo_move(game_state: &mut GameState) -> Option<MoveRecord> {
    let record = game_state.undo_stack.pop_back()?;

    let mover = game_state.board.take(record.to);
    game_state.board.set(record.from, mover);
    game_state.board.set(record.to, record.captured);
    game_state.side_to_move = game_state.side_to_move.opposite();

    debug!(from = %record.from, to = %record.to, "undid move");
    Some(record)
}

/// Checks a move request against the turn, the movement rules and, in strict
/// mode, king safety. Never mutates the game state.
pub fn validate_move(game_state: &GameState, from: Square, to: Square) -> ChessResult<()> {
    let mover = game_state
        .board
        .get(from)
        .ok_or(ChessErrors::EmptySource(from))?;

    if mover.color != game_state.side_to_move {
        return Err(ChessErrors::WrongTurn {
            square: from,
            owner: mover.color,
            side_to_move: game_state.side_to_move,
        });
    }

    if !is_legal_move(&game_state.board, from, to) {
        return Err(ChessErrors::IllegalMove { from, to });
    }

    if game_state.rule_mode == RuleMode::Strict && leaves_king_in_check(&game_state.board, from, to)? {
        return Err(ChessErrors::ExposesKing {
            from,
            to,
            color: mover.color,
        });
    }

    Ok(())
}

/// Validates, applies and classifies a move request.
///
/// Rejected requests leave board, turn and history untouched.
pub fn try_move(game_state: &mut GameState, from: Square, to: Square) -> ChessResult<MoveOutcome> {
    if let Err(err) = validate_move(game_state, from, to) {
        debug!(%from, %to, error = %err, "rejected move");
        return Err(err);
    }

    // A position missing a king fails here, before the board changes.
    for color in [Color::Light, Color::Dark] {
        if let Err(err) = game_state.board.find_king(color) {
            debug!(%from, %to, error = %err, "rejected move");
            return Err(err);
        }
    }

    let record = apply_move(game_state, from, to);
    let status = if record.captured.is_some_and(|piece| piece.kind == PieceKind::King) {
        GameStatus::KingCaptured
    } else {
        game_status(game_state)?
    };
    Ok(MoveOutcome { record, status })
}
