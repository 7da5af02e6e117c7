//! Occupancy-aware ray tracing shared by the sliding pieces.

use crate::game_state::chess_types::{square_at, Board, BoardLocation};

/// Squares reached from `from` along each direction, in direction order.
/// Each ray stops at the board edge or at the first occupied square, which
/// is included whatever its color.
pub fn trace_rays<'a>(
    board: &'a Board,
    from: BoardLocation,
    directions: &'static [(i8, i8)],
) -> impl Iterator<Item = BoardLocation> + 'a {
    directions.iter().flat_map(move |&step| {
        let mut blocked = false;
        from.ray(step).take_while(move |location| {
            if blocked {
                return false;
            }
            blocked = square_at(board, *location).is_some();
            true
        })
    })
}
