use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynprog::dynamic::{longest_increasing_subsequence, longest_increasing_subsequence_length};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_lis(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_increasing_subsequence");
    let mut rng = StdRng::seed_from_u64(42);

    for &len in &[100usize, 1_000, 5_000] {
        let numbers: Vec<i64> = (0..len).map(|_| rng.gen_range(-10_000..10_000)).collect();

        group.bench_with_input(BenchmarkId::new("reconstruct", len), &numbers, |b, nums| {
            b.iter(|| longest_increasing_subsequence(black_box(nums)))
        });
        group.bench_with_input(BenchmarkId::new("length", len), &numbers, |b, nums| {
            b.iter(|| longest_increasing_subsequence_length(black_box(nums)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lis);
criterion_main!(benches);
