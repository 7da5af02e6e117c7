//! Bishop movement geometry.

use crate::game_state::chess_types::{Board, BoardLocation};
use crate::moves::rays::trace_rays;

/// Up-left, down-left, down-right, up-right.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// Diagonal squares reachable from `from`, including the first blocker on
/// each ray whatever its color.
#[inline]
pub fn bishop_attacks(board: &Board, from: BoardLocation) -> impl Iterator<Item = BoardLocation> + '_ {
    trace_rays(board, from, &BISHOP_DIRECTIONS)
}
