//! FEN-to-GameState parser.
//!
//! Reads the piece placement and side-to-move fields. Castling, en-passant
//! and clock fields may be present and are ignored: this engine has no
//! castling, en-passant or move clocks.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();

    let board_part = fields.first().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = fields.get(1).ok_or_else(|| invalid("missing side-to-move"))?;

    if fields.len() > 6 {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state.board)?;
    check_king_counts(&game_state.board)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}' in board layout")))?;

            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| invalid(&format!("rank {} has too many files", 8 - row)))?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid(&format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(())
}

/// Every position the engine plays needs exactly one king per side.
fn check_king_counts(board: &Board) -> ChessResult<()> {
    for color in [Color::Light, Color::Dark] {
        let kings = board
            .pieces(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(invalid(&format!("expected one {color} king, found {kings}")));
        }
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidFen(reason.to_owned())
}
