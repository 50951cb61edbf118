use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_board_core::move_generation::legal_move_generator::legal_moves_for_color;
use chess_board_core::move_generation::perft::perft;
use chess_board_core::utils::fen_parser::parse_layout;
use chess_board_core::{create_board, Color};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
    side_to_move: Color,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        side_to_move: Color::White,
    },
    BenchCase {
        name: "open_middlegame",
        layout: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        side_to_move: Color::White,
    },
    BenchCase {
        name: "rook_endgame",
        layout: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        side_to_move: Color::White,
    },
];

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves_for_color");
    for case in CASES {
        let board = parse_layout(case.layout).expect("bench layout should parse");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| legal_moves_for_color(black_box(board), case.side_to_move))
        });
    }
    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_start");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));

    let board = create_board();
    for (depth, nodes) in [(2u8, 400u64), (3u8, 8902u64)] {
        group.throughput(Throughput::Elements(nodes));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let counts = perft(black_box(&board), Color::White, depth);
                assert_eq!(counts.nodes as u64, nodes);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_legal_moves, bench_perft);
criterion_main!(benches);
