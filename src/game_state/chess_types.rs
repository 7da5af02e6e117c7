//! Core value types shared by the board, move generation and notation code.
//!
//! The board is an 8x8 mailbox indexed `[row][col]`. Row 0 is Black's back
//! rank (rank 8) and row 7 is White's back rank (rank 1); column 0 is the
//! a-file.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::location_to_algebraic;

pub use crate::game_state::game_state::GameState;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step: White moves toward row 0, Black toward row 7.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns start and may still double-step.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Contents of one board square; `None` is an empty square.
pub type Square = Option<Piece>;

/// The 8x8 grid, indexed `[row][col]`.
pub type Board = [[Square; BOARD_SIZE]; BOARD_SIZE];

/// A `(row, col)` coordinate that is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardLocation {
    row: u8,
    col: u8,
}

impl BoardLocation {
    /// Validating constructor for coordinates coming from outside the engine.
    pub fn new(row: u8, col: u8) -> ChessResult<Self> {
        if usize::from(row) >= BOARD_SIZE || usize::from(col) >= BOARD_SIZE {
            return Err(ChessErrors::InvalidBoardLocation { row, col });
        }
        Ok(Self { row, col })
    }

    /// Caller guarantees `row < 8 && col < 8`.
    #[inline]
    pub(crate) const fn from_indices(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Shift by `(d_row, d_col)`; `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::from_indices(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Squares visited by repeatedly stepping `(d_row, d_col)` until the edge.
    pub fn ray(self, (d_row, d_col): (i8, i8)) -> impl Iterator<Item = BoardLocation> {
        std::iter::successors(self.offset(d_row, d_col), move |loc| {
            loc.offset(d_row, d_col)
        })
    }

    /// Every square in row-major order, starting at `a8`.
    pub fn all() -> impl Iterator<Item = BoardLocation> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Self::from_indices(row, col)))
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&location_to_algebraic(*self))
    }
}

#[inline]
pub fn square_at(board: &Board, location: BoardLocation) -> Square {
    board[usize::from(location.row)][usize::from(location.col)]
}

#[inline]
pub(crate) fn set_square(board: &mut Board, location: BoardLocation, square: Square) {
    board[usize::from(location.row)][usize::from(location.col)] = square;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_off_board_coordinates() {
        assert!(BoardLocation::new(7, 7).is_ok());
        assert_eq!(
            BoardLocation::new(8, 0),
            Err(ChessErrors::InvalidBoardLocation { row: 8, col: 0 })
        );
        assert!(BoardLocation::new(0, 200).is_err());
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let a1 = BoardLocation::new(7, 0).expect("a1 is on the board");
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(-1, 1), BoardLocation::new(6, 1).ok());
    }

    #[test]
    fn ray_walks_to_the_board_edge() {
        let d4 = BoardLocation::new(4, 3).expect("d4 is on the board");
        let north: Vec<_> = d4.ray((-1, 0)).collect();
        assert_eq!(north.len(), 4);
        assert_eq!(north.last().copied(), BoardLocation::new(0, 3).ok());
    }

    #[test]
    fn all_enumerates_sixty_four_squares_row_major() {
        let squares: Vec<_> = BoardLocation::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], BoardLocation::from_indices(0, 0));
        assert_eq!(squares[9], BoardLocation::from_indices(1, 1));
    }

    #[test]
    fn pawn_geometry_depends_on_color() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
        assert_eq!(Color::White.pawn_start_row(), 6);
        assert_eq!(Color::Black.opposite(), Color::White);
    }
}
