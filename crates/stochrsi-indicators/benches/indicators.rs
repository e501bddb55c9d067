//! Benchmarks for the Stochastic RSI pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stochrsi_core::traits::Indicator;
use stochrsi_indicators::rolling::{rolling_mean, rolling_min_max};
use stochrsi_indicators::{wilder_rsi, Rsi, StochRsi};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("series", size), &data, |b, data| {
            b.iter(|| wilder_rsi(black_box(data), black_box(14)))
        });

        group.bench_with_input(BenchmarkId::new("indicator", size), &data, |b, data| {
            let rsi = Rsi::new(14);
            b.iter(|| rsi.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rolling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rolling");

    for window in [14, 100, 1000].iter() {
        let data = generate_test_data(100000);

        group.bench_with_input(BenchmarkId::new("min_max", window), &data, |b, data| {
            b.iter(|| rolling_min_max(black_box(data), black_box(*window)))
        });

        group.bench_with_input(BenchmarkId::new("mean", window), &data, |b, data| {
            b.iter(|| rolling_mean(black_box(data), black_box(*window)))
        });
    }

    group.finish();
}

fn benchmark_stoch_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("StochRSI");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("compute", size), &data, |b, data| {
            let stoch = StochRsi::new();
            b.iter(|| stoch.compute(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rsi, benchmark_rolling, benchmark_stoch_rsi);
criterion_main!(benches);
