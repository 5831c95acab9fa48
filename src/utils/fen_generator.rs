use crate::game_state::{chess_types::*, game_state::GameState};

/// Emits a six-field FEN. Castling and en-passant are always `-` and the
/// clocks are fixed at `0 1`, since the engine tracks neither.
pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };

    format!("{} {} - - 0 1", generate_board_field(&game_state.board), side_to_move)
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|square| board.get(square));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.to_fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::game_state::GameState;

    #[test]
    fn generated_fen_reparses_to_the_same_position() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b - - 0 1";
        let game = GameState::from_fen(fen).expect("fixture FEN should parse");
        assert_eq!(generate_fen(&game), fen);
    }

    #[test]
    fn ignored_fields_are_normalised() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w KQkq e3 12 40")
            .expect("fixture FEN should parse");
        assert_eq!(generate_fen(&game), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }
}
