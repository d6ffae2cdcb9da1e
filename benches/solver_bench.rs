//! Cost Solver Benchmarks — Bisection Hot Path
//!
//! Every point on a price chart runs two full solves, so chart
//! generation time is dominated by `solve_cost`.
//!
//! Run with: cargo bench --bench solver_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use othman_msr::domain::msr::{evaluate_trade, MsrMarket};
use othman_msr::domain::solver::{solve_cost, SolverConfig};
use othman_msr::usecases::price_curve::{build_price_chart, VolumeGrid};

/// Benchmark one solve in a binary market.
fn bench_solve_binary(c: &mut Criterion) {
    let config = SolverConfig::default();

    c.bench_function("solve_cost_binary", |b| {
        b.iter(|| {
            let _cost = solve_cost(
                black_box(&[12.0, 4.0][..]),
                black_box(&[0.85, 0.15][..]),
                black_box(80.0),
                black_box(100.0),
                &config,
            );
        });
    });
}

/// Benchmark one solve in a five-outcome market.
fn bench_solve_five_outcomes(c: &mut Criterion) {
    let config = SolverConfig::default();

    c.bench_function("solve_cost_five_outcomes", |b| {
        b.iter(|| {
            let _cost = solve_cost(
                black_box(&[40.0, 7.0, 93.0, 12.0, 0.0][..]),
                black_box(&[0.3, 0.25, 0.2, 0.15, 0.1][..]),
                black_box(10_000.0),
                black_box(100.0),
                &config,
            );
        });
    });
}

/// Benchmark a single-share trade (two solves).
fn bench_evaluate_trade(c: &mut Criterion) {
    let config = SolverConfig::default();

    c.bench_function("evaluate_trade_one_share", |b| {
        b.iter(|| {
            let _trade = evaluate_trade(
                black_box(&[0.0, 0.0][..]),
                black_box(&[1.0, 0.0][..]),
                black_box(&[0.5, 0.5][..]),
                black_box(100.0),
                black_box(10.0),
                &config,
            );
        });
    });
}

/// Benchmark a full default-grid chart for a three-outcome market.
fn bench_price_chart(c: &mut Criterion) {
    let market = MsrMarket::new(vec![0.5, 0.3, 0.2], 100.0, SolverConfig::default())
        .expect("valid market");
    let volumes = VolumeGrid::default().volumes();

    c.bench_function("price_chart_default_grid", |b| {
        b.iter(|| {
            let _chart = build_price_chart(&market, black_box(&[5.0, 0.0, 2.0][..]), &volumes);
        });
    });
}

criterion_group!(
    benches,
    bench_solve_binary,
    bench_solve_five_outcomes,
    bench_evaluate_trade,
    bench_price_chart,
);
criterion_main!(benches);
