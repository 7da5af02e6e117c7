//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Move application and
//! undo never fail; errors only arise at the boundaries where untrusted input
//! enters the engine: raw board coordinates, algebraic text and FEN strings.

use thiserror::Error;

use crate::game_state::chess_types::{BoardLocation, Color};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A `(row, col)` pair outside `0..=7` was supplied.
    #[error("board location ({row}, {col}) is outside the 8x8 board")]
    InvalidBoardLocation { row: u8, col: u8 },

    /// A file or rank character outside `a..=h` / `1..=8`.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// A square or move string with the wrong shape.
    #[error("invalid algebraic string \"{0}\"")]
    InvalidAlgebraicString(String),

    /// Unexpected character in the piece-placement field of a FEN string.
    #[error("invalid FEN token '{0}'")]
    InvalidFENtoken(char),

    /// FEN string with malformed structure.
    #[error("malformed FEN: {0}")]
    InvalidFENstringForm(String),

    /// The board does not contain a king of this color.
    #[error("board does not contain a {0:?} king")]
    MissingKing(Color),

    /// The board contains more than one king of this color.
    #[error("board contains more than one {0:?} king")]
    DuplicateKing(Color),

    /// A text move names an empty source square.
    #[error("no piece on {0}")]
    NoPieceOnSquare(BoardLocation),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
