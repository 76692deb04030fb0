//! Benchmarks for the sizing hot path.
//!
//! The engine recomputes after every keystroke, so `compute` and
//! `parse_amount` both sit on the input latency path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sizelab_core::{compute, lookup, parse_amount, SizingInputs, INSTRUMENTS};

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for spec in INSTRUMENTS {
        group.bench_with_input(BenchmarkId::from_parameter(spec.code), spec, |b, spec| {
            b.iter(|| compute(black_box(spec), black_box("12.5"), black_box("750")));
        });
    }
    group.finish();
}

fn bench_parse_amount(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_amount");
    for text in ["100", "12.5", "0.0001", "1e3", "not a number"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| parse_amount(black_box(text)));
        });
    }
    group.finish();
}

fn bench_degenerate_paths(c: &mut Criterion) {
    let nq = lookup("NQ").unwrap();
    c.bench_function("compute/zero_stop", |b| {
        b.iter(|| compute(black_box(nq), black_box("0"), black_box("100")));
    });
    c.bench_function("compute/unparsable", |b| {
        b.iter(|| compute(black_box(nq), black_box("abc"), black_box("xyz")));
    });
}

fn bench_toggle_round_trip(c: &mut Criterion) {
    c.bench_function("toggle/halve_restore", |b| {
        b.iter(|| {
            let mut inputs = SizingInputs::new();
            inputs.set_risk_budget("12345.67");
            inputs.halve_risk();
            inputs.restore_full_risk();
            black_box(inputs.risk_budget().len())
        });
    });
}

criterion_group!(
    benches,
    bench_compute,
    bench_parse_amount,
    bench_degenerate_paths,
    bench_toggle_round_trip
);
criterion_main!(benches);
