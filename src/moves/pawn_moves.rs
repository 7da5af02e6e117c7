//! Pawn movement geometry: the forward step and the two capture diagonals.

use crate::game_state::chess_types::{BoardLocation, Color};

/// Square one step forward for a `color` pawn on `from`.
#[inline]
pub fn pawn_push(color: Color, from: BoardLocation) -> Option<BoardLocation> {
    from.offset(color.pawn_direction(), 0)
}

/// Forward-left then forward-right diagonal from `from`.
#[inline]
pub fn pawn_attacks(color: Color, from: BoardLocation) -> impl Iterator<Item = BoardLocation> {
    let forward = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(forward, d_col))
}
