use criterion::{black_box, criterion_group, criterion_main, Criterion};
use settrie::SetTrie;
use std::time::{Duration, Instant};

fn bench_supersets(seed: usize) -> Duration {
    let mut trie = SetTrie::new();
    for i in 0..seed {
        trie.add(0..=i);
    }

    let now = Instant::now();
    trie.supersets(0..1).count();
    now.elapsed()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("SetTrie::supersets 200000", |b| {
        b.iter_custom(|_| bench_supersets(black_box(200_000)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
