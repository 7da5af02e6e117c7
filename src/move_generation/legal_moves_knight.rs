use crate::game_state::{
    chess_types::{BoardLocation, Color},
    game_state::GameState,
};
use crate::move_generation::legal_move_shared::is_friendly;
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: BoardLocation,
    side: Color,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    for to in knight_targets(from) {
        if !is_friendly(board, to, side) {
            out.push(Move::new(from, to, board));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::{BoardLocation, Color};
    use crate::game_state::game_state::GameState;

    #[test]
    fn knight_on_b1_has_two_moves_at_the_start() {
        let game = GameState::new_game();
        let b1 = BoardLocation::new(7, 1).expect("b1 is on the board");
        let mut out = Vec::new();
        generate_knight_moves(&game, b1, Color::White, &mut out);
        let notations: Vec<_> = out.iter().map(|mv| mv.chess_notation()).collect();
        assert_eq!(notations, vec!["b1a3", "b1c3"]);
    }

    #[test]
    fn knight_captures_enemies_and_skips_friends() {
        let game = GameState::from_fen("4k3/8/8/2p1P3/8/3N4/8/4K3 w - - 0 1")
            .expect("knight FEN should parse");
        let d3 = BoardLocation::new(5, 3).expect("d3 is on the board");
        let mut out = Vec::new();
        generate_knight_moves(&game, d3, Color::White, &mut out);

        let notations: Vec<_> = out.iter().map(|mv| mv.chess_notation()).collect();
        assert!(notations.contains(&"d3c5".to_owned()));
        assert!(!notations.contains(&"d3e5".to_owned()));
        // c5 b4 f4 b2 f2 c1; e5 and e1 hold white pieces
        assert_eq!(out.len(), 6);
        assert!(out.iter().any(|mv| mv.is_capture()));
    }
}
