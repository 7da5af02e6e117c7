use crate::game_state::{
    chess_types::{BoardLocation, Color},
    game_state::GameState,
};
use crate::move_generation::legal_move_shared::is_friendly;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: BoardLocation,
    side: Color,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    for to in bishop_attacks(board, from) {
        if !is_friendly(board, to, side) {
            out.push(Move::new(from, to, board));
        }
    }
}
