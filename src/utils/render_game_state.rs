//! Terminal board renderer.
//!
//! Draws the board with rank and file labels. `RenderStyle::Ansi` paints
//! checkered backgrounds and colored pieces with ANSI escapes, and highlights
//! legal destinations with a green background. `RenderStyle::Plain` uses
//! letter case for color and brackets/asterisks for highlights, for terminals
//! without escape support and for tests.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::HighlightSet;

const RESET: &str = "\x1b[0m";
const LIGHT_PIECE: &str = "\x1b[1;37m";
const DARK_PIECE: &str = "\x1b[1;31m";
const LIGHT_SQUARE: &str = "\x1b[48;5;250m";
const DARK_SQUARE: &str = "\x1b[48;5;240m";
const HIGHLIGHT_SQUARE: &str = "\x1b[48;5;82m";

const FILE_LABELS: &str = "      a  b  c  d  e  f  g  h\n";
const BORDER: &str = "    +------------------------+\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Ansi,
    Plain,
}

/// Render the board, optionally overlaying the legal destinations of a
/// selected piece. The board is only read.
pub fn render_game_state(board: &Board, highlights: Option<&HighlightSet>, style: RenderStyle) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str(FILE_LABELS);
    out.push_str(BORDER);

    for row in 0..8u8 {
        out.push_str(&format!(" {}  |", 8 - row));

        for col in 0..8u8 {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let highlighted = highlights.is_some_and(|set| set.contains(square));
            match style {
                RenderStyle::Ansi => push_ansi_cell(&mut out, square, board.get(square), highlighted),
                RenderStyle::Plain => push_plain_cell(&mut out, board.get(square), highlighted),
            }
        }

        out.push_str("|\n");
    }

    out.push_str(BORDER);
    out
}

fn push_ansi_cell(out: &mut String, square: Square, piece: Option<Piece>, highlighted: bool) {
    let background = if highlighted {
        HIGHLIGHT_SQUARE
    } else if (square.row() + square.col()) % 2 == 1 {
        DARK_SQUARE
    } else {
        LIGHT_SQUARE
    };
    out.push_str(background);

    match piece {
        Some(piece) => {
            let foreground = match piece.color {
                Color::Light => LIGHT_PIECE,
                Color::Dark => DARK_PIECE,
            };
            out.push(' ');
            out.push_str(foreground);
            out.push(piece.to_fen_char());
            // The reset also clears the background; restore it for the padding.
            out.push_str(RESET);
            out.push_str(background);
            out.push(' ');
        }
        None => out.push_str("   "),
    }

    out.push_str(RESET);
}

fn push_plain_cell(out: &mut String, piece: Option<Piece>, highlighted: bool) {
    match (piece, highlighted) {
        (Some(piece), true) => {
            out.push('[');
            out.push(piece.to_fen_char());
            out.push(']');
        }
        (Some(piece), false) => {
            out.push(' ');
            out.push(piece.to_fen_char());
            out.push(' ');
        }
        (None, true) => out.push_str(" * "),
        (None, false) => out.push_str(" . "),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_game_state, RenderStyle};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::highlight_set;
    use crate::utils::algebraic::test_square as sq;

    #[test]
    fn plain_render_of_the_start_position() {
        let rendered = render_game_state(&Board::standard(), None, RenderStyle::Plain);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[2], " 8  | r  n  b  q  k  b  n  r |");
        assert_eq!(lines[5], " 5  | .  .  .  .  .  .  .  . |");
        assert_eq!(lines[9], " 1  | R  N  B  Q  K  B  N  R |");
    }

    #[test]
    fn plain_render_marks_highlights() {
        let board = Board::standard();
        let highlights =
            highlight_set(&board, sq("g1"), RuleMode::Simplified).expect("simplified highlights never fail");
        let rendered = render_game_state(&board, Some(&highlights), RenderStyle::Plain);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[7], " 3  | .  .  .  .  .  *  .  * |");
    }

    #[test]
    fn ansi_render_resets_every_cell() {
        let rendered = render_game_state(&Board::standard(), None, RenderStyle::Ansi);
        assert_eq!(rendered.matches("\x1b[0m").count(), 64 + 32);
    }
}
