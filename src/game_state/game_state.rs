//! Owned game state for one session.
//!
//! `GameState` bundles the board, the side to move, the undo log and the rule
//! mode. The turn loop owns exactly one of these and is its only writer.

use std::collections::VecDeque;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub rule_mode: RuleMode,

    // --- Undo log ---
    pub undo_stack: VecDeque<MoveRecord>,
    /// `None` keeps every record. With `Some(n)` the oldest record is evicted
    /// once the log holds `n` entries, and that move can no longer be undone.
    pub history_limit: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::Light,
            rule_mode: RuleMode::default(),
            undo_stack: VecDeque::new(),
            history_limit: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    pub fn with_rule_mode(mut self, rule_mode: RuleMode) -> Self {
        self.rule_mode = rule_mode;
        self
    }

    /// Caps the undo log at `history_limit` records, evicting the oldest.
    /// `Some(0)` keeps no history at all.
    pub fn with_history_limit(mut self, history_limit: Option<usize>) -> Self {
        self.history_limit = history_limit;
        self
    }

    /// Number of moves that can still be undone.
    #[inline]
    pub fn undoable_moves(&self) -> usize {
        self.undo_stack.len()
    }
}
