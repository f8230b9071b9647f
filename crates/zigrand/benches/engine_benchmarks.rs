//! Criterion benchmarks for zigrand engines and samplers.
//!
//! Measures raw draw throughput per engine, normal sampling cost for the
//! ziggurat and polar methods, and the cost of jump-ahead versus
//! seed-and-forward.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zigrand::{EngineKind, RandomStream};

const BATCH: usize = 10_000;

/// Benchmark raw 32-bit, 64-bit and double draws per engine.
fn bench_uniform_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_draws");
    group.throughput(Throughput::Elements(BATCH as u64));

    for kind in EngineKind::ALL {
        let mut stream = RandomStream::new(kind, 42);

        group.bench_function(BenchmarkId::new("u32", kind.name()), |b| {
            b.iter(|| {
                let mut acc = 0u32;
                for _ in 0..BATCH {
                    acc ^= stream.draw_u32();
                }
                black_box(acc)
            });
        });

        group.bench_function(BenchmarkId::new("u64", kind.name()), |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for _ in 0..BATCH {
                    acc ^= stream.draw_u64();
                }
                black_box(acc)
            });
        });

        // Batch fill into a reused buffer
        let mut buffer = vec![0.0; BATCH];
        group.bench_function(BenchmarkId::new("fill_uniform", kind.name()), |b| {
            b.iter(|| {
                stream.fill_uniform(&mut buffer);
                black_box(buffer[BATCH - 1])
            });
        });
    }

    group.finish();
}

/// Benchmark ziggurat and polar normal sampling.
fn bench_normal_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_sampling");
    group.throughput(Throughput::Elements(BATCH as u64));

    for kind in EngineKind::ALL {
        let mut stream = RandomStream::new(kind, 42);
        let mut buffer = vec![0.0; BATCH];

        group.bench_function(BenchmarkId::new("ziggurat", kind.name()), |b| {
            b.iter(|| {
                stream.fill_normal(&mut buffer);
                black_box(buffer[BATCH - 1])
            });
        });

        group.bench_function(BenchmarkId::new("polar", kind.name()), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for _ in 0..BATCH {
                    acc += stream.draw_normal_polar();
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

/// Benchmark native jumps and seed-and-forward.
fn bench_jump_ahead(c: &mut Criterion) {
    let mut group = c.benchmark_group("jump_ahead");

    for kind in EngineKind::ALL {
        if kind.supports_jump() {
            let mut stream = RandomStream::new(kind, 42);
            group.bench_function(BenchmarkId::new("jump", kind.name()), |b| {
                b.iter(|| stream.jump(black_box(1)))
            });
        }

        let mut stream = RandomStream::new(kind, 42);
        group.bench_with_input(
            BenchmarkId::new("seed_and_jump", kind.name()),
            &16u64,
            |b, &count| b.iter(|| stream.seed_and_jump(black_box(42), black_box(count))),
        );
    }

    group.finish();
}

/// Benchmark construction of parallel sub-streams.
fn bench_substreams(c: &mut Criterion) {
    let mut group = c.benchmark_group("substreams");
    group.sample_size(10);

    for count in [4usize, 16, 64] {
        group.bench_with_input(
            BenchmarkId::new("Xoshiro256+", count),
            &count,
            |b, &count| {
                b.iter(|| RandomStream::substreams(EngineKind::Xoshiro256Plus, 42, black_box(count)))
            },
        );
        group.bench_with_input(BenchmarkId::new("PCG64DXSM", count), &count, |b, &count| {
            b.iter(|| RandomStream::substreams(EngineKind::Pcg64Dxsm, 42, black_box(count)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_uniform_draws,
    bench_normal_sampling,
    bench_jump_ahead,
    bench_substreams
);
criterion_main!(benches);
