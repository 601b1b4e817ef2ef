//! Benchmark for noise generation performance.
//!
//! TARGET: 1,000,000 2D samples per second
//!
//! Run with: cargo bench --package opensimplex_noise --bench noise_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use opensimplex_noise::{prebuild_all, OpenSimplex};

fn benchmark_single_sample(c: &mut Criterion) {
    prebuild_all().expect("lattices build");
    let noise = OpenSimplex::new(42);

    let mut group = c.benchmark_group("single_sample");

    group.bench_function("noise2", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.noise2(black_box(x), black_box(x * 0.7)))
        });
    });

    group.bench_function("noise3", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.noise3(black_box(x), black_box(x * 0.7), black_box(x * -0.3)))
        });
    });

    group.bench_function("noise4", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.noise4(
                black_box(x),
                black_box(x * 0.7),
                black_box(x * -0.3),
                black_box(x * 0.2),
            ))
        });
    });

    group.finish();
}

fn benchmark_million_samples(c: &mut Criterion) {
    let noise = OpenSimplex::new(42);

    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_noise2_samples", |b| {
        b.iter(|| {
            for i in 0..1_000_000 {
                let x = f64::from(i % 1000) * 0.1;
                let y = f64::from(i / 1000) * 0.1;
                black_box(noise.noise2(x, y));
            }
        });
    });

    group.finish();
}

fn benchmark_construction(c: &mut Criterion) {
    c.bench_function("generator_construction", |b| {
        let mut seed = 0i64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(OpenSimplex::new(black_box(seed)))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_million_samples,
    benchmark_construction
);
criterion_main!(benches);
