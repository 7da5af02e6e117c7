//! Pseudo-legal pawn moves: single and double pushes plus diagonal captures.
//! No en-passant and no promotion.

use crate::game_state::{
    chess_types::{square_at, BoardLocation, Color},
    game_state::GameState,
};
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::{pawn_attacks, pawn_push};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: BoardLocation,
    side: Color,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();

    if let Some(one_step) = pawn_push(side, from) {
        if square_at(board, one_step).is_none() {
            out.push(Move::new(from, one_step, board));

            // Double step is keyed off the starting row; there is no has-moved flag.
            if from.row() == side.pawn_start_row() {
                if let Some(two_step) = pawn_push(side, one_step) {
                    if square_at(board, two_step).is_none() {
                        out.push(Move::new(from, two_step, board));
                    }
                }
            }
        }
    }

    for target in pawn_attacks(side, from) {
        if matches!(square_at(board, target), Some(piece) if piece.color != side) {
            out.push(Move::new(from, target, board));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{BoardLocation, Color};
    use crate::game_state::game_state::GameState;

    fn loc(row: u8, col: u8) -> BoardLocation {
        BoardLocation::new(row, col).expect("test location should be on the board")
    }

    fn notations(game_state: &GameState, from: BoardLocation, side: Color) -> Vec<String> {
        let mut out = Vec::new();
        generate_pawn_moves(game_state, from, side, &mut out);
        out.iter().map(|mv| mv.chess_notation()).collect()
    }

    #[test]
    fn pawns_on_the_start_row_push_one_or_two() {
        let game = GameState::new_game();
        assert_eq!(notations(&game, loc(6, 4), Color::White), vec!["e2e3", "e2e4"]);
        assert_eq!(notations(&game, loc(1, 0), Color::Black), vec!["a7a6", "a7a5"]);
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("blocked pawn FEN should parse");
        assert!(notations(&game, loc(6, 4), Color::White).is_empty());

        let game = GameState::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1")
            .expect("half blocked pawn FEN should parse");
        assert_eq!(notations(&game, loc(6, 4), Color::White), vec!["e2e3"]);
    }

    #[test]
    fn pawn_off_the_start_row_moves_one_square() {
        let game = GameState::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1")
            .expect("advanced pawn FEN should parse");
        assert_eq!(notations(&game, loc(5, 4), Color::White), vec!["e3e4"]);
    }

    #[test]
    fn pawn_captures_enemies_diagonally_but_not_friends() {
        let game = GameState::from_fen("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1")
            .expect("capture FEN should parse");
        assert_eq!(notations(&game, loc(4, 4), Color::White), vec!["e4e5", "e4d5"]);
    }
}
