//! Crate root module declarations for the duel_chess two-player console game.
//!
//! This file exposes the top-level subsystems (game state, per-piece movement
//! rules, check analysis and move application, the console front end, and
//! utility helpers) so the binary, tests, and benches share one module tree.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_rules;
    pub mod pawn_moves;
    pub mod piece_movement;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_path;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod console {
    pub mod console_top;
    pub mod game_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod logging;
    pub mod render_game_state;
}
