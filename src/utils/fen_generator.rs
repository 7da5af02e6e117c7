//! GameState-to-FEN serialization.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Piece placement and side to move, followed by `- - 0 1` since castling,
/// en-passant and clocks are not tracked.
pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::with_capacity(64);

    for (row_index, row) in game_state.board().iter().enumerate() {
        if row_index > 0 {
            out.push('/');
        }

        let mut empty = 0u8;
        for square in row {
            match square {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece_to_fen_char(*piece));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
    }

    out.push(' ');
    out.push(match game_state.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    });
    out.push_str(" - - 0 1");
    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
