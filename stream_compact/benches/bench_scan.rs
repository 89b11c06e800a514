use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use rand::{Rng, SeedableRng};
use rand_hc::Hc128Rng;
use scan_tools::blelloch;
use stream_compact::{compact, scan};

const SEED: &[u8; 32] = b"qLmZ3vX8wNpR5tKs7dYh2cFb9gJa4eUo";

/// Creates the specified number of small random values, zeros included.
fn create_random_values(count: usize, rng: &mut impl Rng) -> Vec<i32> {
    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
        result.push(rng.gen_range(0..8));
    }
    result
}

pub fn scan_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scan comparison");
    group.sample_size(10);
    group.sampling_mode(SamplingMode::Flat);

    for len in [1usize << 16, 1 << 20, 1 << 24] {
        let mut rng = Hc128Rng::from_seed(*SEED);
        let xs = create_random_values(len, &mut rng);

        group.bench_with_input(BenchmarkId::new("Sequential", len), &len, |b, _| {
            b.iter(|| blelloch::exclusive_scan_seq(&xs))
        });

        group.bench_with_input(BenchmarkId::new("Blelloch", len), &len, |b, _| {
            b.iter(|| scan(&xs).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("Compact", len), &len, |b, _| {
            b.iter(|| compact(&xs).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, scan_comparison);
criterion_main!(benches);
