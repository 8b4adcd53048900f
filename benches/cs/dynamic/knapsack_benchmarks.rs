use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynprog::dynamic::{knapsack_max_value, knapsack_max_value_compact};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_items(rng: &mut StdRng, n: usize) -> (Vec<i64>, Vec<i64>) {
    let values = (0..n).map(|_| rng.gen_range(1..=1_000)).collect();
    let weights = (0..n).map(|_| rng.gen_range(1..=100)).collect();
    (values, weights)
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    let mut rng = StdRng::seed_from_u64(42);

    for &(n, capacity) in &[(50usize, 1_000i64), (200, 5_000), (500, 10_000)] {
        let (values, weights) = random_items(&mut rng, n);
        let id = format!("{n}x{capacity}");

        group.bench_with_input(BenchmarkId::new("table", &id), &capacity, |b, &cap| {
            b.iter(|| knapsack_max_value(black_box(&values), black_box(&weights), cap))
        });
        group.bench_with_input(BenchmarkId::new("compact", &id), &capacity, |b, &cap| {
            b.iter(|| knapsack_max_value_compact(black_box(&values), black_box(&weights), cap))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_knapsack);
criterion_main!(benches);
