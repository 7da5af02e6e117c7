//! Crate root module declarations for the chess rules engine.
//!
//! The engine tracks a two-player game on an 8x8 mailbox board: per-piece
//! pseudo-legal move generation, a king-safety filter producing the legal
//! move set, reversible make/undo over a move log, and checkmate/stalemate
//! detection. Rendering and input belong to the caller; `utils` carries the
//! text conversions (algebraic, FEN, board rendering) a front end needs.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::chess_types::{Board, BoardLocation, Color, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
pub use moves::chess_move::Move;
