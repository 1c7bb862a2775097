use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use raum_chess::game_state::chess_rules::starting_board;
use raum_chess::game_state::chess_types::Color;
use raum_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    depth: u8,
    expected_nodes: u64,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos_depth_1",
        depth: 1,
        expected_nodes: 52,
    },
    BenchCase {
        name: "startpos_depth_2",
        depth: 2,
        expected_nodes: 0, // measured only; nodes asserted nonzero
    },
];

fn perft_benchmark(c: &mut Criterion) {
    let board = starting_board();
    let mut group = c.benchmark_group("perft");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for case in CASES {
        let counts = perft(&board, Color::White, case.depth);
        assert!(counts.nodes > 0);
        if case.expected_nodes != 0 {
            assert_eq!(counts.nodes, case.expected_nodes);
        }
        group.throughput(Throughput::Elements(counts.nodes));

        group.bench_with_input(
            BenchmarkId::from_parameter(case.name),
            &case.depth,
            |b, &depth| {
                b.iter(|| {
                    let counts = perft(black_box(&board), Color::White, depth);
                    black_box(counts.nodes)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
