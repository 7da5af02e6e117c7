use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::legal_move_generator::{FastLegalMoveGenerator, LegalMoveGenerator};
use chess_rules::move_generation::move_generator::MoveGenerator;
use chess_rules::utils::random_playout::random_playout;

/// Reproducible middlegame positions reached by seeded random play.
fn sample_positions() -> Vec<GameState> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..16)
        .map(|_| {
            let mut game = GameState::new_game();
            random_playout(&mut game, 20, &mut rng);
            game
        })
        .collect()
}

fn bench_generators(c: &mut Criterion) {
    let positions = sample_positions();

    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let generators: [(&str, &dyn MoveGenerator); 2] = [
        ("regenerate", &LegalMoveGenerator),
        ("reverse_scan", &FastLegalMoveGenerator),
    ];

    for (name, generator) in generators {
        group.bench_with_input(BenchmarkId::from_parameter(name), &positions, |b, positions| {
            let mut scratch = positions.clone();
            b.iter(|| {
                let mut total = 0usize;
                for game in scratch.iter_mut() {
                    total += generator.generate_legal_moves(black_box(game)).len();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(legal_moves_benches, bench_generators);
criterion_main!(legal_moves_benches);
