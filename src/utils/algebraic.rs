//! Conversions between board locations and algebraic coordinates.
//!
//! The mapping is a fixed lookup table in both directions: column 0..=7 is
//! file `a..=h` and row 0..=7 is rank `8..=1`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{square_at, Board, BoardLocation};
use crate::moves::chess_move::Move;

pub const COLS_TO_FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
pub const ROWS_TO_RANKS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// Location to two-character algebraic form, e.g. `(6, 4)` -> `"e2"`.
#[inline]
pub fn location_to_algebraic(location: BoardLocation) -> String {
    let mut out = String::with_capacity(2);
    out.push(COLS_TO_FILES[usize::from(location.col())]);
    out.push(ROWS_TO_RANKS[usize::from(location.row())]);
    out
}

/// Parse a square such as `"e2"`.
pub fn algebraic_to_location(square: &str) -> ChessResult<BoardLocation> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    };

    let col = COLS_TO_FILES
        .iter()
        .position(|&c| c == file)
        .ok_or(ChessErrors::InvalidAlgebraicChar(file))?;
    let row = ROWS_TO_RANKS
        .iter()
        .position(|&r| r == rank)
        .ok_or(ChessErrors::InvalidAlgebraicChar(rank))?;

    BoardLocation::new(row as u8, col as u8)
}

/// Build a candidate move from text such as `"e2e4"` against `board`.
///
/// The result is not checked for legality; test it for membership in the
/// legal move set before applying it.
pub fn long_algebraic_to_move(text: &str, board: &Board) -> ChessResult<Move> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let start = algebraic_to_location(&text[0..2])?;
    let end = algebraic_to_location(&text[2..4])?;

    if square_at(board, start).is_none() {
        return Err(ChessErrors::NoPieceOnSquare(start));
    }

    Ok(Move::new(start, end, board))
}
