//! FEN-to-GameState parser.
//!
//! Reads the piece-placement and side-to-move fields. Castling, en-passant
//! and clock fields are accepted for compatibility but carry no meaning
//! under these rules.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 2 || fields.len() > 6 {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "expected 2 to 6 fields, found {}",
            fields.len()
        )));
    }

    let board = parse_board(fields[0])?;
    let side_to_move = parse_side_to_move(fields[1])?;
    GameState::from_board(board, side_to_move)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "board layout must contain {BOARD_SIZE} ranks, found {}",
            rows.len()
        )));
    }

    let mut board: Board = [[None; BOARD_SIZE]; BOARD_SIZE];
    // The first FEN rank is rank 8, which is row 0.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            if col >= BOARD_SIZE {
                return Err(ChessErrors::InvalidFENstringForm(format!(
                    "rank \"{row_str}\" has too many files"
                )));
            }
            board[row][col] = Some(piece);
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(ChessErrors::InvalidFENstringForm(format!(
                "rank \"{row_str}\" does not sum to {BOARD_SIZE} files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFENstringForm(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{BoardLocation, Color};
    use crate::game_state::game_state::GameState;

    #[test]
    fn parse_starting_fen_matches_new_game() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game_state, GameState::new_game());
    }

    #[test]
    fn kings_are_located_while_parsing() {
        let game = parse_fen("8/8/8/3k4/8/8/8/K7 b").expect("two-field FEN should parse");
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.king_location(Color::Black), BoardLocation::new(3, 3).expect("d5"));
        assert_eq!(game.king_location(Color::White), BoardLocation::new(7, 0).expect("a1"));
    }

    #[test]
    fn malformed_fens_are_rejected() {
        assert_eq!(parse_fen("8/8/8/8/8/8/8/K6k x"), Err(ChessErrors::InvalidFENstringForm(
            "invalid side-to-move field: x".to_owned()
        )));
        assert_eq!(parse_fen("8/8/8/8/8/8/8/K6x w"), Err(ChessErrors::InvalidFENtoken('x')));
        assert!(matches!(parse_fen("8/8/8/8/8/8/K6k w"), Err(ChessErrors::InvalidFENstringForm(_))));
        assert!(matches!(parse_fen("8/8/8/8/8/8/8/K5k w"), Err(ChessErrors::InvalidFENstringForm(_))));
        assert!(matches!(parse_fen("8/8/8/8/8/8/8/K5kkk w"), Err(ChessErrors::InvalidFENstringForm(_))));
        assert!(matches!(parse_fen("8/8/8/8/8/8/8/K6k"), Err(ChessErrors::InvalidFENstringForm(_))));
    }

    #[test]
    fn boards_without_both_kings_are_rejected() {
        assert_eq!(parse_fen("8/8/8/8/8/8/8/K7 w"), Err(ChessErrors::MissingKing(Color::Black)));
        assert_eq!(parse_fen("k7/8/8/8/8/8/8/K6K w"), Err(ChessErrors::DuplicateKing(Color::White)));
    }
}
