use criterion::{black_box, criterion_group, criterion_main, Criterion};
use settrie::SetTrie;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

fn bench_subsets(seed: usize) -> Duration {
    let mut trie = SetTrie::new();
    for i in 0..seed {
        trie.add(0..=i);
    }

    let query: BTreeSet<usize> = (0..seed).collect();
    let now = Instant::now();
    trie.subsets(&query).count();
    now.elapsed()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("SetTrie::subsets 200000", |b| {
        b.iter_custom(|_| bench_subsets(black_box(200_000)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
