use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use uttt::notation::{decode, encode, replay};
use uttt::{evaluate, valid_moves, BoardState, Searcher};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    for depth in [3u8, 4] {
        group.bench_function(format!("initial_depth_{depth}"), |b| {
            let state = BoardState::new();
            let mut searcher = Searcher::new();
            b.iter(|| searcher.get_evaluation(black_box(&state), depth));
        });
    }

    group.bench_function("random_opening_best_move_depth_4", |b| {
        let mut searcher = Searcher::new();
        b.iter_batched(
            || BoardState::random_opening(&mut ChaCha20Rng::seed_from_u64(42)),
            |state| searcher.best_move(&state, 4),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let midgame = match replay("4012383765") {
        Ok(r) => r.state,
        Err(_) => BoardState::new(),
    };
    group.bench_function("static_midgame", |b| {
        b.iter(|| evaluate(black_box(&midgame)));
    });
    group.bench_function("valid_moves", |b| {
        b.iter(|| valid_moves(black_box(&midgame)).count());
    });
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let state = BoardState::random_opening(&mut ChaCha20Rng::seed_from_u64(7));
    group.bench_function("position_roundtrip", |b| {
        b.iter(|| {
            let text = encode(black_box(&state)).unwrap();
            decode(&text).unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_search, bench_evaluate, bench_codec);
criterion_main!(benches);
