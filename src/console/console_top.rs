//! Interactive two-player console and turn loop.
//!
//! Reads whitespace-separated tokens from stdin. Two squares ("e2 e4") play a
//! move, on one line or across lines. A lone square selects a piece and shows
//! its legal destinations. Rejected input is reported and the loop re-prompts.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local};
use tracing::{error, info, warn};

use crate::chess_errors::ChessErrors;
use crate::console::game_config::GameConfig;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{try_move, undo_move, validate_move, MoveOutcome};
use crate::move_generation::legal_move_checks::{attackers_to_square, GameStatus};
use crate::move_generation::legal_move_generator::{highlight_set, HighlightSet};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::render_game_state::render_game_state;

const HELP_TEXT: &str = "\
Commands:
  e2 e4      move the piece on e2 to e4
  e2         select the piece on e2 and show where it can go
  undo       take back the last move
  new        start over from the initial position
  fen        print the current position as FEN
  help       show this text
  quit       leave the game";

pub fn run_stdio_loop(game_state: GameState, config: GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(game_state, config);

    console.write_intro(&mut stdout)?;
    console.write_prompt(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_line(&line, &mut stdout)?;
        if should_quit {
            break;
        }
        console.write_prompt(&mut stdout)?;
        stdout.flush()?;
    }

    stdout.flush()?;
    Ok(())
}

pub struct ConsoleState {
    game_state: GameState,
    initial_state: GameState,
    config: GameConfig,
    pending_from: Option<Square>,
    plies_played: usize,
    started_at: DateTime<Local>,
}

impl ConsoleState {
    pub fn new(game_state: GameState, config: GameConfig) -> Self {
        info!(
            rule_mode = ?game_state.rule_mode,
            history_limit = ?game_state.history_limit,
            fen = %game_state.get_fen(),
            "game started"
        );
        Self {
            initial_state: game_state.clone(),
            game_state,
            config,
            pending_from: None,
            plies_played: 0,
            started_at: Local::now(),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn write_intro(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "Session started {}. Rules: {:?}. Type `help` for commands.",
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            self.game_state.rule_mode
        )?;
        self.write_board(out, None)
    }

    pub fn write_prompt(&self, out: &mut impl Write) -> io::Result<()> {
        match self.pending_from {
            Some(from) => write!(out, "\n{} move {} -> ", self.game_state.side_to_move, from),
            None => write!(out, "\n{} move (e2 e4 | undo): ", self.game_state.side_to_move),
        }
    }

    /// Handles one input line. Returns `true` when the session should end.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let mut tokens = line.split_whitespace().peekable();

        while let Some(token) = tokens.next() {
            let token = token.to_ascii_lowercase();
            match token.as_str() {
                "quit" | "exit" => return Ok(true),
                "undo" => {
                    self.pending_from = None;
                    self.undo(out)?;
                    continue;
                }
                "new" => {
                    self.restart(out)?;
                    continue;
                }
                "fen" => {
                    writeln!(out, "{}", self.game_state.get_fen())?;
                    continue;
                }
                "help" => {
                    writeln!(out, "{HELP_TEXT}")?;
                    continue;
                }
                _ => {}
            }

            let square = match algebraic_to_square(&token) {
                Ok(square) => square,
                Err(err) => {
                    self.pending_from = None;
                    writeln!(out, "Rejected: {err}")?;
                    continue;
                }
            };

            match self.pending_from.take() {
                Some(from) => {
                    if self.play(from, square, out)? {
                        return Ok(true);
                    }
                }
                // The destination follows on the same line; validation happens when it is played.
                None if tokens.peek().is_some() => self.pending_from = Some(square),
                None => self.select(square, out)?,
            }
        }

        Ok(false)
    }

    fn select(&mut self, from: Square, out: &mut impl Write) -> io::Result<()> {
        let selectable = match self.game_state.board.get(from) {
            None => Err(ChessErrors::EmptySource(from)),
            Some(piece) if piece.color != self.game_state.side_to_move => {
                Err(ChessErrors::WrongTurn {
                    square: from,
                    owner: piece.color,
                    side_to_move: self.game_state.side_to_move,
                })
            }
            Some(_) => highlight_set(&self.game_state.board, from, self.game_state.rule_mode),
        };

        match selectable {
            Ok(highlights) => {
                self.pending_from = Some(from);
                self.write_board(out, Some(&highlights))?;
                if highlights.is_empty() {
                    writeln!(out, "The piece on {from} has no legal moves.")?;
                }
                Ok(())
            }
            Err(err) => writeln!(out, "Rejected: {err}"),
        }
    }

    fn play(&mut self, from: Square, to: Square, out: &mut impl Write) -> io::Result<bool> {
        let outcome = match try_move(&mut self.game_state, from, to) {
            Ok(outcome) => outcome,
            Err(err) if err.is_recoverable() => {
                writeln!(out, "Rejected: {err}")?;
                return Ok(false);
            }
            Err(err) => {
                error!(error = %err, fen = %self.game_state.get_fen(), "position invariant violated");
                writeln!(out, "\nInternal error: {err}")?;
                return Ok(true);
            }
        };

        self.plies_played += 1;
        self.write_board(out, None)?;
        self.report_outcome(&outcome, out)
    }

    fn report_outcome(&self, outcome: &MoveOutcome, out: &mut impl Write) -> io::Result<bool> {
        let to_move = self.game_state.side_to_move;
        let mover = to_move.opposite();

        match outcome.status {
            GameStatus::InProgress => Ok(false),
            GameStatus::Check => {
                let king_sq = self.game_state.board.find_king(to_move).ok();
                let checkers: Vec<String> = king_sq
                    .map(|square| attackers_to_square(&self.game_state.board, square, mover))
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(square, piece)| format!("{} on {}", piece.kind.name(), square))
                    .collect();
                writeln!(out, "CHECK! ({})", checkers.join(", "))?;
                Ok(false)
            }
            GameStatus::Checkmate => {
                writeln!(out, "\nCHECKMATE! {mover} wins.")?;
                self.finish(out, "checkmate")
            }
            GameStatus::KingCaptured => {
                writeln!(out, "\nThe {to_move} king has been captured. {mover} wins.")?;
                self.finish(out, "king captured")
            }
            GameStatus::Stalemate => {
                writeln!(out, "\nSTALEMATE! DRAW.")?;
                self.finish(out, "stalemate")
            }
        }
    }

    fn finish(&self, out: &mut impl Write, reason: &str) -> io::Result<bool> {
        let elapsed = Local::now().signed_duration_since(self.started_at);
        let seconds = elapsed.num_seconds().max(0);
        writeln!(
            out,
            "Game over after {} moves in {}m {:02}s.",
            self.plies_played,
            seconds / 60,
            seconds % 60
        )?;
        info!(reason, plies = self.plies_played, seconds, "game over");
        Ok(true)
    }

    fn undo(&mut self, out: &mut impl Write) -> io::Result<()> {
        match undo_move(&mut self.game_state) {
            Some(record) => {
                self.plies_played = self.plies_played.saturating_sub(1);
                self.write_board(out, None)?;
                writeln!(out, "Took back {}{}.", record.from, record.to)
            }
            None => {
                if self.plies_played > 0 {
                    warn!(plies = self.plies_played, "undo requested past the history limit");
                }
                writeln!(out, "Nothing to undo.")
            }
        }
    }

    fn restart(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.game_state = self.initial_state.clone();
        self.pending_from = None;
        self.plies_played = 0;
        self.started_at = Local::now();
        info!("game restarted");
        self.write_board(out, None)
    }

    fn write_board(&self, out: &mut impl Write, highlights: Option<&HighlightSet>) -> io::Result<()> {
        write!(
            out,
            "\n{}",
            render_game_state(&self.game_state.board, highlights, self.config.render_style)
        )
    }

    /// Whether the move from the pending selection to `to` would be accepted.
    pub fn would_accept(&self, to: Square) -> bool {
        self.pending_from
            .is_some_and(|from| validate_move(&self.game_state, from, to).is_ok())
    }
}
