//! Canonical chess-rule constants.
//!
//! Stores static rule-related literals such as the standard starting position
//! FEN used to initialize and validate game state setup.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Number of (from, to) pairs available to the first mover in the standard
/// position: 16 pawn moves and 4 knight moves.
pub const STARTING_POSITION_MOVE_COUNT: usize = 20;
