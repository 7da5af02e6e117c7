//! The `Move` value: one board transition plus the pieces it touches.
//!
//! A move snapshots the moved and captured squares at construction time so
//! that it can be undone without consulting any other history. Identity is
//! coordinate-only: a candidate built from two clicked squares compares equal
//! to the fully-populated move the generator produced for the same squares.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{square_at, Board, BoardLocation, Square};
use crate::utils::algebraic::location_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: BoardLocation,
    end: BoardLocation,
    piece_moved: Square,
    piece_captured: Square,
    move_id: u16,
}

impl Move {
    /// Capture `board[start]` and `board[end]` as the moved and captured
    /// squares. No legality checking happens here.
    pub fn new(start: BoardLocation, end: BoardLocation, board: &Board) -> Self {
        Self {
            start,
            end,
            piece_moved: square_at(board, start),
            piece_captured: square_at(board, end),
            move_id: encode_move_id(start, end),
        }
    }

    /// Build a move from raw `(row, col)` pairs, rejecting off-board input.
    pub fn from_coordinates(start: (u8, u8), end: (u8, u8), board: &Board) -> ChessResult<Self> {
        let start = BoardLocation::new(start.0, start.1)?;
        let end = BoardLocation::new(end.0, end.1)?;
        Ok(Self::new(start, end, board))
    }

    #[inline]
    pub fn start(&self) -> BoardLocation {
        self.start
    }

    #[inline]
    pub fn end(&self) -> BoardLocation {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Square {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Square {
        self.piece_captured
    }

    /// `start_row*1000 + start_col*100 + end_row*10 + end_col`.
    #[inline]
    pub fn move_id(&self) -> u16 {
        self.move_id
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Start square followed by end square, e.g. `e2e4`.
    pub fn chess_notation(&self) -> String {
        let mut out = location_to_algebraic(self.start);
        out.push_str(&location_to_algebraic(self.end));
        out
    }
}

fn encode_move_id(start: BoardLocation, end: BoardLocation) -> u16 {
    u16::from(start.row()) * 1000
        + u16::from(start.col()) * 100
        + u16::from(end.row()) * 10
        + u16::from(end.col())
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id == other.move_id
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chess_notation())
    }
}
