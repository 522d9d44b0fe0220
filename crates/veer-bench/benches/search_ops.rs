//! Criterion benchmarks for planning on the reference request.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use veer_bench::reference_request;
use veer_search::{plan, Planner};

/// Benchmark: field generation plus one search, end to end.
fn bench_plan_reference(c: &mut Criterion) {
    let request = reference_request();

    c.bench_function("plan_reference_32x24", |b| {
        b.iter(|| black_box(plan(black_box(&request))));
    });
}

/// Benchmark: search only, with fields generated once up front.
fn bench_search_reference(c: &mut Criterion) {
    let request = reference_request();
    let planner = match Planner::new(request.config.clone()) {
        Ok(p) => p,
        Err(e) => panic!("reference request must be valid: {e}"),
    };

    c.bench_function("search_reference_32x24", |b| {
        b.iter(|| black_box(planner.plan(request.start, request.goal)));
    });
}

criterion_group!(benches, bench_plan_reference, bench_search_reference);
criterion_main!(benches);
