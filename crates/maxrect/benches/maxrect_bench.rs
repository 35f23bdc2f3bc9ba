//! Criterion benchmarks for the maximal-rectangle search.
//! Focus sizes: square matrices with side in {16, 64, 256}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p maxrect

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use maxrect::grid::{draw_bernoulli, BernoulliCfg, ReplayToken};
use maxrect::skyline::{largest_rectangle_area, maximal_rectangle};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_heights(n: usize, max_height: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..=max_height)).collect()
}

fn bench_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");
    for &n in &[0usize, 64, 1024, 16384] {
        group.bench_with_input(BenchmarkId::new("largest_rectangle_area", n), &n, |b, &n| {
            b.iter_batched(
                || random_heights(n, n, 43),
                |h| {
                    let _area = largest_rectangle_area(&h);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for &side in &[16usize, 64, 256] {
        // Sparse and dense regimes stress the stack differently: dense rows
        // keep tall histograms alive across many columns.
        for &density in &[0.5f64, 0.9] {
            let id = format!("{side}x{side}_d{density}");
            group.bench_with_input(
                BenchmarkId::new("maximal_rectangle", id),
                &side,
                |b, &side| {
                    b.iter_batched(
                        || {
                            draw_bernoulli(
                                side,
                                side,
                                BernoulliCfg { density },
                                ReplayToken::new(43, side as u64),
                            )
                        },
                        |m| {
                            let _area = maximal_rectangle(&m);
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_stack, bench_search);
criterion_main!(benches);
