//! Core mutable game state.
//!
//! `GameState` owns the board, the side to move, the move log used as an undo
//! stack, both king locations and the checkmate/stalemate flags. Every board
//! mutation goes through `make_move` / `undo_move`, which keep the king
//! locations in step with the board and make each move exactly reversible.

use std::fmt;

use tracing::trace;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{starting_board, BLACK_KING_START, WHITE_KING_START};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_in_check, square_under_attack};
use crate::move_generation::legal_move_generator::{get_valid_moves, LegalMoveGenerator};
use crate::move_generation::legal_move_shared::generate_all_possible_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    move_log: Vec<Move>,
    // [white, black], indexed by `Color::index`.
    king_locations: [BoardLocation; 2],
    check_mate: bool,
    stale_mate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial setup, White to move.
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            side_to_move: Color::White,
            move_log: Vec::new(),
            king_locations: [WHITE_KING_START, BLACK_KING_START],
            check_mate: false,
            stale_mate: false,
        }
    }

    /// Arbitrary setup. The board must hold exactly one king of each color.
    pub fn from_board(board: Board, side_to_move: Color) -> ChessResult<Self> {
        let king_locations = [
            find_king(&board, Color::White)?,
            find_king(&board, Color::Black)?,
        ];
        Ok(Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            king_locations,
            check_mate: false,
            stale_mate: false,
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Square {
        square_at(&self.board, location)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> BoardLocation {
        self.king_locations[color.index()]
    }

    /// Set by the last `get_valid_moves` call.
    #[inline]
    pub fn is_check_mate(&self) -> bool {
        self.check_mate
    }

    /// Set by the last `get_valid_moves` call.
    #[inline]
    pub fn is_stale_mate(&self) -> bool {
        self.stale_mate
    }

    pub(crate) fn set_terminal_flags(&mut self, check_mate: bool, stale_mate: bool) {
        self.check_mate = check_mate;
        self.stale_mate = stale_mate;
    }

    /// Apply `mv` unconditionally. Callers are expected to submit only moves
    /// from the current legal set.
    pub fn make_move(&mut self, mv: Move) {
        set_square(&mut self.board, mv.start(), None);
        set_square(&mut self.board, mv.end(), mv.piece_moved());

        if let Some(Piece { color, kind: PieceKind::King }) = mv.piece_moved() {
            self.king_locations[color.index()] = mv.end();
        }

        trace!(notation = %mv, side = ?self.side_to_move, "make move");
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Pop and reverse the last move. Returns `None` and changes nothing
    /// when the log is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;

        set_square(&mut self.board, mv.start(), mv.piece_moved());
        set_square(&mut self.board, mv.end(), mv.piece_captured());

        if let Some(Piece { color, kind: PieceKind::King }) = mv.piece_moved() {
            self.king_locations[color.index()] = mv.start();
        }

        self.side_to_move = self.side_to_move.opposite();
        trace!(notation = %mv, side = ?self.side_to_move, "undo move");
        Some(mv)
    }

    /// Pseudo-legal moves of the side to move.
    pub fn get_all_possible_moves(&self) -> Vec<Move> {
        generate_all_possible_moves(self, self.side_to_move)
    }

    /// Can the side not to move reach `location` with any pseudo-legal move?
    pub fn square_under_attack(&self, location: BoardLocation) -> bool {
        square_under_attack(self, location, self.side_to_move.opposite())
    }

    /// Is the side to move's king attacked?
    pub fn in_check(&self) -> bool {
        is_in_check(self, self.side_to_move)
    }

    /// Legal moves of the side to move; refreshes the checkmate and
    /// stalemate flags.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        get_valid_moves(&LegalMoveGenerator, self)
    }

    /// As [`GameState::get_valid_moves`], with a caller-chosen generator.
    pub fn get_valid_moves_with<G: MoveGenerator + ?Sized>(&mut self, generator: &G) -> Vec<Move> {
        get_valid_moves(generator, self)
    }
}

fn find_king(board: &Board, color: Color) -> ChessResult<BoardLocation> {
    let king = Some(Piece::new(color, PieceKind::King));
    let mut found = BoardLocation::all().filter(|location| square_at(board, *location) == king);
    let location = found.next().ok_or(ChessErrors::MissingKing(color))?;
    if found.next().is_some() {
        return Err(ChessErrors::DuplicateKing(color));
    }
    Ok(location)
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
