use crate::game_state::{
    chess_types::{BoardLocation, Color},
    game_state::GameState,
};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Diagonal slides followed by orthogonal slides from the same square.
pub fn generate_queen_moves(
    game_state: &GameState,
    from: BoardLocation,
    side: Color,
    out: &mut Vec<Move>,
) {
    generate_bishop_moves(game_state, from, side, out);
    generate_rook_moves(game_state, from, side, out);
}
