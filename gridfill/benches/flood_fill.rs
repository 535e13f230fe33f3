use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridfill::{DenseGrid, FloodGame};

fn bench_flood_fill(c: &mut Criterion) {
    let board = DenseGrid::from_fn(64, 64, |x, y| ((x / 4 + y / 4) % 4) as u8).unwrap();

    c.bench_function("flood 64x64 blocks", |b| {
        b.iter(|| {
            let mut game = FloodGame::new(&board, 64).unwrap();
            for colour in [1u8, 2, 3, 0, 1, 2, 3, 0] {
                game.flood(black_box(colour));
            }
            black_box(game.moves_made())
        })
    });
}

fn bench_dense_construction(c: &mut Criterion) {
    c.bench_function("dense from_fn 256x256", |b| {
        b.iter(|| DenseGrid::from_fn(256, 256, |x, y| black_box(x * y)).unwrap())
    });
}

criterion_group!(benches, bench_flood_fill, bench_dense_construction);
criterion_main!(benches);
