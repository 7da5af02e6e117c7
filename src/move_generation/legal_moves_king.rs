use crate::game_state::{
    chess_types::{BoardLocation, Color},
    game_state::GameState,
};
use crate::move_generation::legal_move_shared::is_friendly;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_targets;

/// One step in any direction. There is no castling in these rules.
pub fn generate_king_moves(
    game_state: &GameState,
    from: BoardLocation,
    side: Color,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    for to in king_targets(from) {
        if !is_friendly(board, to, side) {
            out.push(Move::new(from, to, board));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::{BoardLocation, Color};
    use crate::game_state::game_state::GameState;

    #[test]
    fn king_is_boxed_in_at_the_start() {
        let game = GameState::new_game();
        let e1 = BoardLocation::new(7, 4).expect("e1 is on the board");
        let mut out = Vec::new();
        generate_king_moves(&game, e1, Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn king_steps_include_adjacent_captures() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/3pP3/4K3 w - - 0 1")
            .expect("king FEN should parse");
        let e1 = BoardLocation::new(7, 4).expect("e1 is on the board");
        let mut out = Vec::new();
        generate_king_moves(&game, e1, Color::White, &mut out);

        let notations: Vec<_> = out.iter().map(|mv| mv.chess_notation()).collect();
        assert_eq!(notations, vec!["e1d2", "e1f2", "e1d1", "e1f1"]);
    }
}
