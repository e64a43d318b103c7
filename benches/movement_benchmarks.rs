//! Benchmarks for the destination scan and activation handling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hotseat_chess::board::{Board, BoardBuilder, PieceKind};
use hotseat_chess::game::Game;

fn bench_legal_destinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_destinations");

    let start = Board::new();
    for (name, source) in [("knight", 62), ("pawn", 52), ("queen_boxed", 59)] {
        group.bench_with_input(BenchmarkId::new("startpos", name), &source, |b, &source| {
            b.iter(|| start.legal_destinations(black_box(source)))
        });
    }

    // Open board: a queen in the centre scans the longest paths.
    let open = BoardBuilder::new().piece(27, PieceKind::Queen).build();
    group.bench_function("open_queen", |b| {
        b.iter(|| open.legal_destinations(black_box(27)))
    });

    group.finish();
}

fn bench_activation(c: &mut Criterion) {
    let mut group = c.benchmark_group("activation");

    group.bench_function("select_and_move", |b| {
        b.iter(|| {
            let mut game = Game::new();
            game.activate(black_box(62));
            game.activate(black_box(45));
            game.activate(black_box(45));
            black_box(game.activate(black_box(62)))
        })
    });

    group.bench_function("reselect", |b| {
        let mut game = Game::new();
        b.iter(|| {
            game.activate(black_box(52));
            black_box(game.activate(black_box(57)))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_legal_destinations, bench_activation);
criterion_main!(benches);
