use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use doblete_core::{shift, Board, Direction, RandomTileSpawner, TileSpawner};

fn seeded_board(size: (u8, u8), tiles: u32) -> Board {
    let mut spawner = RandomTileSpawner::new(1234);
    let mut board = Board::empty(size);
    for _ in 0..tiles {
        board = spawner.place(&board);
    }
    board
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");
    for &(size, tiles) in &[((4, 4), 8), ((8, 8), 32), ((16, 16), 128)] {
        let board = seeded_board(size, tiles);
        group.bench_with_input(BenchmarkId::from_parameter(size.0), &board, |b, board| {
            b.iter(|| shift(board, Direction::Left));
        });
    }
    group.finish();
}

fn bench_spawn(c: &mut Criterion) {
    let board = seeded_board((4, 4), 8);
    c.bench_function("spawn", |b| {
        let mut spawner = RandomTileSpawner::new(42);
        b.iter(|| spawner.place(&board));
    });
}

criterion_group!(benches, bench_shift, bench_spawn);
criterion_main!(benches);
