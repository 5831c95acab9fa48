//! Leaf-node counting over the move tree.
//!
//! Walks the tree with `apply_move`/`undo_move` on a private copy of the
//! game, so the caller's state and history are never touched.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::{MoveGenerator, MovePair};

pub fn perft<G: MoveGenerator + ?Sized>(generator: &G, game_state: &GameState, depth: u8) -> ChessResult<u64> {
    let mut scratch = scratch_copy(game_state);
    perft_recurse(generator, &mut scratch, depth)
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<Vec<(MovePair, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut scratch = scratch_copy(game_state);
    let root_moves = generator.generate_moves(&scratch.board, scratch.side_to_move)?;
    let mut out = Vec::with_capacity(root_moves.len());

    for (from, to) in root_moves {
        apply_move(&mut scratch, from, to);
        let nodes = perft_recurse(generator, &mut scratch, depth - 1);
        undo_move(&mut scratch);
        out.push(((from, to), nodes?));
    }

    Ok(out)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(generator: &G, game_state: &mut GameState, depth: u8) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generator.generate_moves(&game_state.board, game_state.side_to_move)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        apply_move(game_state, from, to);
        let child = perft_recurse(generator, game_state, depth - 1);
        undo_move(game_state);
        nodes += child?;
    }

    Ok(nodes)
}

fn scratch_copy(game_state: &GameState) -> GameState {
    let mut scratch = game_state.clone().with_history_limit(None);
    scratch.undo_stack.clear();
    scratch
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::{SimplifiedMoveGenerator, StrictMoveGenerator};

    #[test]
    fn strict_perft_matches_reference_counts_from_start() {
        let game = GameState::new_game();
        let expected = [1u64, 20, 400, 8902];
        for (depth, nodes) in expected.into_iter().enumerate() {
            assert_eq!(perft(&StrictMoveGenerator, &game, depth as u8), Ok(nodes), "depth {depth}");
        }
    }

    #[test]
    fn simplified_perft_matches_at_shallow_depth() {
        let game = GameState::new_game();
        assert_eq!(perft(&SimplifiedMoveGenerator, &game, 1), Ok(20));
        assert_eq!(perft(&SimplifiedMoveGenerator, &game, 2), Ok(400));
    }

    #[test]
    fn divide_sums_to_perft_and_leaves_state_alone() {
        let game = GameState::new_game();
        let divided = perft_divide(&StrictMoveGenerator, &game, 2).expect("start position has both kings");
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);
        assert_eq!(game.undoable_moves(), 0);
    }
}
