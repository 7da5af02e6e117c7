//! Perft node counting over the legal move tree.
//!
//! Walks the tree with make/undo on a single `GameState`. Leaf statistics
//! follow the usual perft conventions: a leaf is a check when the side to
//! move there is in check, and a checkmate when it additionally has no
//! legal reply.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Perft with the fast generator on a private copy of `game_state`.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut scratch = game_state.clone();
    perft(&FastLegalMoveGenerator, &mut scratch, depth)
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        game_state.make_move(mv);

        if depth == 1 {
            total.nodes += 1;
            if mv.is_capture() {
                total.captures += 1;
            }
            if is_in_check(game_state, game_state.side_to_move()) {
                total.checks += 1;
                if generator.generate_legal_moves(game_state).is_empty() {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft(generator, game_state, depth - 1));
        }

        game_state.undo_move();
    }

    total
}

/// Node count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for mv in generator.generate_legal_moves(game_state) {
        game_state.make_move(mv);
        let counts = perft(generator, game_state, depth - 1);
        game_state.undo_move();
        out.push((mv.chess_notation(), counts.nodes));
    }
    out
}
