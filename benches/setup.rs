use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use jigsaw_memory::assets::AssetId;
use jigsaw_memory::core::{GameRng, MemoryConfig, PuzzleConfig};
use jigsaw_memory::memory::deck::build_deck;
use jigsaw_memory::memory::MemoryEngine;
use jigsaw_memory::puzzle::PuzzleEngine;

fn photos(n: usize) -> Vec<AssetId> {
    (1..=n).map(|i| AssetId::new(format!("img{}.jpg", i))).collect()
}

fn bench_build_deck(c: &mut Criterion) {
    let drawing = AssetId::from("drawing.png");
    let mut group = c.benchmark_group("build_deck");
    for pool in [5usize, 50, 500] {
        let photos = photos(pool);
        group.bench_function(BenchmarkId::from_parameter(pool), |b| {
            let mut rng = GameRng::new(7);
            b.iter(|| {
                let deck = build_deck(&drawing, &photos, 6, &mut rng).expect("enough photos");
                assert_eq!(deck.len(), 12);
            });
        });
    }
    group.finish();
}

fn bench_new_games(c: &mut Criterion) {
    let images = photos(20);
    let mut group = c.benchmark_group("new_game");

    group.bench_function("puzzle", |b| {
        let mut engine = PuzzleEngine::with_rng(PuzzleConfig::default(), GameRng::new(1));
        b.iter(|| {
            let session = engine.new_game(&images).expect("images available");
            assert_eq!(session.pool().len(), 8);
        });
    });

    group.bench_function("memory", |b| {
        let mut engine = MemoryEngine::with_rng(MemoryConfig::default(), GameRng::new(1));
        b.iter(|| {
            let session = engine
                .new_game(AssetId::from("drawing.png"), &images)
                .expect("enough photos");
            assert_eq!(session.cards().len(), 12);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build_deck, bench_new_games);
criterion_main!(benches);
