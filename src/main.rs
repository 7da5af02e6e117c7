use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chess_rules::game_state::game_state::GameState;
use chess_rules::moves::chess_move::Move;
use chess_rules::utils::algebraic::long_algebraic_to_move;

const HELP: &str = "commands: <move> (e.g. e2e4) | moves | undo | reset | fen | help | quit";

fn main() -> io::Result<()> {
    // Board and prompts go to stdout; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut game_state = GameState::new_game();
    let mut valid_moves = game_state.get_valid_moves();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{HELP}")?;
    print_position(&mut stdout, &game_state)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            "fen" => {
                writeln!(stdout, "{}", game_state.get_fen())?;
                continue;
            }
            "moves" => {
                writeln!(stdout, "{}", format_moves(&valid_moves))?;
                continue;
            }
            "undo" => match game_state.undo_move() {
                Some(mv) => {
                    info!(notation = %mv, "undo");
                    valid_moves = game_state.get_valid_moves();
                }
                None => writeln!(stdout, "nothing to undo")?,
            },
            "reset" => {
                info!("reset");
                game_state = GameState::new_game();
                valid_moves = game_state.get_valid_moves();
            }
            text => match long_algebraic_to_move(text, game_state.board()) {
                Ok(candidate) => match valid_moves.iter().find(|mv| **mv == candidate).copied() {
                    Some(mv) => {
                        info!(notation = %mv, "move");
                        game_state.make_move(mv);
                        valid_moves = game_state.get_valid_moves();
                    }
                    None => {
                        writeln!(stdout, "illegal move: {candidate}")?;
                        continue;
                    }
                },
                Err(err) => {
                    warn!(%err, input = text, "rejected input");
                    writeln!(stdout, "{err}")?;
                    continue;
                }
            },
        }

        print_position(&mut stdout, &game_state)?;
    }

    Ok(())
}

fn print_position(out: &mut impl Write, game_state: &GameState) -> io::Result<()> {
    writeln!(out, "{game_state}")?;
    if game_state.is_check_mate() {
        writeln!(out, "checkmate, {:?} wins", game_state.side_to_move().opposite())?;
    } else if game_state.is_stale_mate() {
        writeln!(out, "stalemate")?;
    } else {
        let check = if game_state.in_check() { " (check)" } else { "" };
        writeln!(out, "{:?} to move{check}", game_state.side_to_move())?;
    }
    out.flush()
}

fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.chess_notation())
        .collect::<Vec<_>>()
        .join(" ")
}
