use crate::game_state::{
    chess_types::{BoardLocation, Color},
    game_state::GameState,
};
use crate::move_generation::legal_move_shared::is_friendly;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: BoardLocation,
    side: Color,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    for to in rook_attacks(board, from) {
        if !is_friendly(board, to, side) {
            out.push(Move::new(from, to, board));
        }
    }
}
