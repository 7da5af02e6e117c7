//! Seeded random walks through legal moves.
//!
//! Used to reach varied mid-game positions for invariant checks and
//! benchmarks without hand-writing FEN for each one.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::moves::chess_move::Move;

/// Play up to `max_plies` uniformly chosen legal moves on `game_state`,
/// stopping early at checkmate or stalemate. Returns the moves played.
pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    max_plies: usize,
    rng: &mut R,
) -> Vec<Move> {
    let mut played = Vec::with_capacity(max_plies);

    for _ in 0..max_plies {
        let legal = game_state.get_valid_moves_with(&FastLegalMoveGenerator);
        let Some(mv) = legal.choose(rng).copied() else {
            debug!(
                plies = played.len(),
                check_mate = game_state.is_check_mate(),
                "random playout reached a terminal position"
            );
            break;
        };
        game_state.make_move(mv);
        played.push(mv);
    }

    played
}
