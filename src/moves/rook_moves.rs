//! Rook movement geometry.

use crate::game_state::chess_types::{Board, BoardLocation};
use crate::moves::rays::trace_rays;

/// Up, left, down, right.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Orthogonal squares reachable from `from`, including the first blocker on
/// each ray whatever its color.
#[inline]
pub fn rook_attacks(board: &Board, from: BoardLocation) -> impl Iterator<Item = BoardLocation> + '_ {
    trace_rays(board, from, &ROOK_DIRECTIONS)
}
