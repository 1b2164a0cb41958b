//! Criterion benchmarks for the beam solver.
//!
//! Measures planning time across fort sizes and beam widths to track
//! performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package fortwalk-solver-beam
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fortwalk_core::{RouteOptimizer, RouteRequest, Strategy};
use fortwalk_solver_beam::BeamSolver;


use bench_support::{BENCHMARK_ENTRY, BENCHMARK_SEED, generate_fort};

/// Fort sizes to benchmark.
const FORT_SIZES: &[usize] = &[10, 25, 50];

/// Beam widths to benchmark.
const BEAM_WIDTHS: &[usize] = &[1, 3, 5];

/// Time budget for benchmark requests (minutes).
const BUDGET_MINUTES: f64 = 120.0;

fn bench_fort_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_time");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(5));

    for &size in FORT_SIZES {
        let solver = BeamSolver::new(generate_fort(size, BENCHMARK_SEED));
        let request = RouteRequest::new(BENCHMARK_ENTRY, BUDGET_MINUTES);

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small fort sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("locations", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking planning performance, result is intentionally discarded"
                )]
                let _ = solver.optimize(&request);
            });
        });
    }

    group.finish();
}

fn bench_beam_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("beam_width");
    let solver = BeamSolver::new(generate_fort(25, BENCHMARK_SEED));

    for &width in BEAM_WIDTHS {
        for strategy in Strategy::ALL {
            let request = RouteRequest::new(BENCHMARK_ENTRY, BUDGET_MINUTES)
                .with_strategy(strategy)
                .with_beam_width(width);
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), width),
                &width,
                |b, _| {
                    b.iter(|| {
                        #[expect(
                            clippy::let_underscore_must_use,
                            reason = "Benchmarking planning performance, result is intentionally discarded"
                        )]
                        let _ = solver.optimize(&request);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fort_sizes, bench_beam_widths);
criterion_main!(benches);
