//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves for the side to move, simulates each one and
//! discards those that leave the mover's own king attacked. The two
//! generators differ only in how that last question is answered, so they
//! return the same moves in the same order.

use tracing::{debug, trace};

use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_in_check, is_king_attacked};
use crate::move_generation::legal_move_shared::generate_all_possible_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

/// King safety by regenerating every opposing pseudo-legal move.
pub struct LegalMoveGenerator;

/// King safety by scanning outward from the king square.
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        filter_king_safe_moves(game_state, is_in_check)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        filter_king_safe_moves(game_state, is_king_attacked)
    }
}

fn filter_king_safe_moves(
    game_state: &mut GameState,
    king_attacked: fn(&GameState, Color) -> bool,
) -> Vec<Move> {
    let mover = game_state.side_to_move();
    let candidates = generate_all_possible_moves(game_state, mover);
    let mut legal = Vec::with_capacity(candidates.len());

    for mv in candidates {
        game_state.make_move(mv);
        let exposes_king = king_attacked(game_state, mover);
        game_state.undo_move();

        if !exposes_king {
            legal.push(mv);
        }
    }

    legal
}

/// Generate legal moves with `generator` and refresh the terminal flags:
/// no legal moves means checkmate when in check and stalemate otherwise;
/// any legal move clears both.
pub fn get_valid_moves<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
) -> Vec<Move> {
    let moves = generator.generate_legal_moves(game_state);

    if moves.is_empty() {
        let side = game_state.side_to_move();
        let in_check = is_in_check(game_state, side);
        game_state.set_terminal_flags(in_check, !in_check);
        if in_check {
            debug!(?side, "checkmate");
        } else {
            debug!(?side, "stalemate");
        }
    } else {
        game_state.set_terminal_flags(false, false);
    }

    trace!(count = moves.len(), "legal moves generated");
    moves
}
