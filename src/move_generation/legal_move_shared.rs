//! Piece-kind dispatch and whole-board pseudo-legal generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

#[inline]
pub fn is_friendly(board: &Board, location: BoardLocation, side: Color) -> bool {
    matches!(square_at(board, location), Some(piece) if piece.color == side)
}

/// Append the pseudo-legal moves of `piece` standing on `from`.
pub fn generate_piece_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    let side = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, side, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, side, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, side, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, side, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, side, out),
        PieceKind::King => generate_king_moves(game_state, from, side, out),
    }
}

/// Every pseudo-legal move of `side`, scanning the board row by row. King
/// safety is not considered.
pub fn generate_all_possible_moves(game_state: &GameState, side: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let board = game_state.board();
    for location in BoardLocation::all() {
        if let Some(piece) = square_at(board, location) {
            if piece.color == side {
                generate_piece_moves(game_state, location, piece, &mut moves);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::generate_all_possible_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_has_twenty_pseudo_legal_moves_per_side() {
        let game = GameState::new_game();
        assert_eq!(generate_all_possible_moves(&game, Color::White).len(), 20);
        assert_eq!(generate_all_possible_moves(&game, Color::Black).len(), 20);
    }

    #[test]
    fn pseudo_legal_generation_ignores_king_safety() {
        // The rook on d1 covers the whole first rank, yet f1 is still emitted.
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/3rK3 w - - 0 1")
            .expect("rook next to king FEN should parse");
        let moves = generate_all_possible_moves(&game, Color::White);
        let notations: Vec<_> = moves.iter().map(|mv| mv.chess_notation()).collect();
        assert_eq!(notations, vec!["e1d2", "e1e2", "e1f2", "e1d1", "e1f1"]);
    }
}
