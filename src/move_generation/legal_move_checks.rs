//! Attack detection and check inspection.
//!
//! `square_under_attack` is the reference definition: a square is attacked
//! when any pseudo-legal move of the attacking side ends on it. That includes
//! pawn pushes onto an empty square and excludes squares holding the
//! attacker's own pieces. `is_king_attacked` answers the same question for a
//! king square by scanning outward from the king instead of regenerating
//! every opposing move; on an occupied target the two agree.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_all_possible_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

pub fn square_under_attack(game_state: &GameState, location: BoardLocation, attacker: Color) -> bool {
    generate_all_possible_moves(game_state, attacker)
        .iter()
        .any(|mv| mv.end() == location)
}

/// Is `color`'s king reachable by the other side?
#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    square_under_attack(game_state, game_state.king_location(color), color.opposite())
}

/// Reverse-scan equivalent of [`is_in_check`].
pub fn is_king_attacked(game_state: &GameState, color: Color) -> bool {
    let board = game_state.board();
    let king = game_state.king_location(color);
    let attacker = color.opposite();

    let holds = |location: BoardLocation, kinds: &[PieceKind]| {
        matches!(square_at(board, location), Some(piece) if piece.color == attacker && kinds.contains(&piece.kind))
    };

    // An attacking pawn sits one step ahead of the king, seen from the king's side.
    pawn_attacks(color, king).any(|loc| holds(loc, &[PieceKind::Pawn]))
        || knight_targets(king).any(|loc| holds(loc, &[PieceKind::Knight]))
        || king_targets(king).any(|loc| holds(loc, &[PieceKind::King]))
        || bishop_attacks(board, king).any(|loc| holds(loc, &[PieceKind::Bishop, PieceKind::Queen]))
        || rook_attacks(board, king).any(|loc| holds(loc, &[PieceKind::Rook, PieceKind::Queen]))
}
