use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Produces the legal moves of the side to move.
///
/// Implementations may simulate moves on `game_state` but must leave it
/// exactly as they found it.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move>;
}
