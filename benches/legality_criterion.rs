use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_referee::game_state::game_state::GameState;
use plum_referee::utils::piece_token::parse_move_command;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    moves: &'static [&'static str],
    expected_legal: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        moves: &[],
        expected_legal: 20,
    },
    BenchCase {
        name: "open_game",
        moves: &["Pe2 e4", "pe7 e5"],
        expected_legal: 29,
    },
    BenchCase {
        name: "fools_mate",
        moves: &["Pf2 f3", "pe7 e5", "Pg2 g4", "qd8 h4"],
        expected_legal: 0,
    },
];

fn replay(moves: &[&str]) -> GameState {
    let mut game = GameState::new_game();
    for command in moves {
        let (token, destination) =
            parse_move_command(command).expect("benchmark move should parse");
        game.attempt_move(token, destination)
            .expect("benchmark move should be legal");
    }
    game
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = replay(case.moves);

        // Correctness guard before benchmarking.
        assert_eq!(
            game.legal_moves().len(),
            case.expected_legal,
            "legal move count mismatch for {}",
            case.name
        );

        group.throughput(Throughput::Elements(case.expected_legal.max(1) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(case.name),
            &case.expected_legal,
            |b, expected| {
                b.iter(|| {
                    let moves = black_box(&game).legal_moves();
                    assert_eq!(moves.len(), *expected);
                    black_box(moves.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("attempt_move");
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(20);

    let game = replay(&["Pe2 e4", "pe7 e5", "Ng1 f3"]);
    let (token, destination) = parse_move_command("nb8 c6").expect("move should parse");

    group.bench_function("commit_with_terminal_checks", |b| {
        b.iter(|| {
            let mut next = game.clone();
            let outcome = next
                .attempt_move(black_box(token), black_box(destination))
                .expect("move should be legal");
            black_box(outcome)
        });
    });

    group.finish();
}

criterion_group!(legality_benches, bench_legal_moves, bench_attempt_move);
criterion_main!(legality_benches);
