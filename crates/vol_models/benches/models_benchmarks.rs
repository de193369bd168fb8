//! Criterion benchmarks for vol_models pricing and estimation.
//!
//! Benchmarks cover:
//! - Black-Scholes call/put pricing across expiries
//! - Greeks evaluation (delta, gamma, vega)
//! - Implied volatility inversion across target volatilities
//! - Realised volatility estimation across series lengths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vol_core::types::{MarketSnapshot, OptionContract, OptionKind};
use vol_models::{BlackScholes, ImpliedVolSolver, RealizedVolEstimator};

/// Generate a deterministic synthetic daily close series.
fn generate_price_series(n: usize) -> Vec<f64> {
    let mut prices = Vec::with_capacity(n);
    let mut price = 100.0;
    for i in 0..n {
        let step = (((i * 31) % 11) as f64 - 5.0) * 0.002;
        price *= 1.0 + step;
        prices.push(price);
    }
    prices
}

fn benchmark_market() -> MarketSnapshot {
    MarketSnapshot::new(100.0, 0.01, 0.0).unwrap()
}

/// Benchmark call and put pricing across expiries.
fn bench_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes_price");

    let model = BlackScholes::from_market(&benchmark_market(), 0.2);

    for expiry in [0.25, 0.5, 1.0, 2.0] {
        group.bench_with_input(BenchmarkId::new("call", expiry), &expiry, |b, &expiry| {
            b.iter(|| model.price_call(black_box(100.0), black_box(expiry)));
        });

        group.bench_with_input(BenchmarkId::new("put", expiry), &expiry, |b, &expiry| {
            b.iter(|| model.price_put(black_box(100.0), black_box(expiry)));
        });
    }

    group.finish();
}

/// Benchmark Greeks evaluation.
fn bench_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes_greeks");

    let model = BlackScholes::from_market(&benchmark_market(), 0.2);

    group.bench_function("delta_call", |b| {
        b.iter(|| model.delta(black_box(100.0), black_box(0.25), black_box(true)));
    });

    group.bench_function("gamma", |b| {
        b.iter(|| model.gamma(black_box(100.0), black_box(0.25)));
    });

    group.bench_function("vega", |b| {
        b.iter(|| model.vega(black_box(100.0), black_box(0.25)));
    });

    group.finish();
}

/// Benchmark implied volatility inversion across target volatilities.
fn bench_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_vol");

    let market = benchmark_market();
    let solver = ImpliedVolSolver::with_defaults();

    for sigma in [0.1, 0.2, 0.5, 1.0] {
        let price = BlackScholes::from_market(&market, sigma).price_call(100.0, 0.25);
        let option = OptionContract::new(100.0, 0.25, OptionKind::Call, price).unwrap();

        group.bench_with_input(BenchmarkId::new("solve", sigma), &option, |b, option| {
            b.iter(|| solver.solve(black_box(option), black_box(&market)));
        });
    }

    group.finish();
}

/// Benchmark realised volatility estimation across series lengths.
fn bench_realized_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("realized_vol");

    let estimator = RealizedVolEstimator::default();

    for n in [50, 252, 1000, 5000] {
        let prices = generate_price_series(n);

        group.bench_with_input(BenchmarkId::new("estimate", n), &prices, |b, prices| {
            b.iter(|| estimator.estimate(black_box(prices)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pricing,
    bench_greeks,
    bench_implied_vol,
    bench_realized_vol,
);
criterion_main!(benches);
