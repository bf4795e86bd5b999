use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use sapper_core::{BoardConfig, FixedPlacer, Game, MinePlacer, RandomPlacer};

fn flood_fill_full_board(c: &mut Criterion) {
    let config = BoardConfig::new(64, 64, 0).unwrap();

    c.bench_function("flood_fill_64x64_clear", |b| {
        b.iter(|| {
            let mut game = Game::new(config, FixedPlacer::new(Vec::new()));
            game.reveal(black_box((0, 0))).unwrap()
        });
    });
}

fn dense_random_placement(c: &mut Criterion) {
    let config = BoardConfig::new(200, 200, 30_000).unwrap();

    c.bench_function("random_placement_200x200_dense", |b| {
        let mut placer = RandomPlacer::new(7);
        b.iter(|| placer.place(black_box(&config), (100, 100)));
    });
}

criterion_group!(benches, flood_fill_full_board, dense_random_placement);
criterion_main!(benches);
