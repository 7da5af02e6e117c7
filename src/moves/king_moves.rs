use crate::game_state::chess_types::BoardLocation;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(from: BoardLocation) -> impl Iterator<Item = BoardLocation> {
    KING_OFFSETS
        .iter()
        .filter_map(move |&(d_row, d_col)| from.offset(d_row, d_col))
}
