//! Canonical chess-rule constants.
//!
//! Board dimensions, the standard starting layout and the squares the kings
//! start on.

use crate::game_state::chess_types::{Board, BoardLocation, Color, Piece, PieceKind};

pub const BOARD_SIZE: usize = 8;

/// Standard starting position in Forsyth-Edwards Notation. Castling and
/// en-passant are not part of these rules, so those fields are always empty.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_KING_START: BoardLocation = BoardLocation::from_indices(7, 4);
pub const BLACK_KING_START: BoardLocation = BoardLocation::from_indices(0, 4);

/// Board for the standard initial setup.
pub fn starting_board() -> Board {
    let mut board: Board = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (col, kind) in BACK_RANK.iter().enumerate() {
        board[0][col] = Some(Piece::new(Color::Black, *kind));
        board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
        board[7][col] = Some(Piece::new(Color::White, *kind));
    }
    board
}
