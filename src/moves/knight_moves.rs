use crate::game_state::chess_types::BoardLocation;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_targets(from: BoardLocation) -> impl Iterator<Item = BoardLocation> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::BoardLocation;

    #[test]
    fn knight_targets_from_d4_has_eight_squares() {
        let d4 = BoardLocation::new(4, 3).expect("d4 is on the board");
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn knight_targets_from_a1_has_two_squares() {
        let a1 = BoardLocation::new(7, 0).expect("a1 is on the board");
        let targets: Vec<_> = knight_targets(a1).collect();
        assert_eq!(
            targets,
            vec![
                BoardLocation::new(5, 1).expect("b3"),
                BoardLocation::new(6, 2).expect("c2"),
            ]
        );
    }
}
