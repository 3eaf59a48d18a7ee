// ============================================================================
// Number Validator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Accepted values - Full path: pattern match plus budget checks
// 2. Rejected values - Early exits (empty, malformed, overflow)
// 3. Input length - Linear cost of the anchored pattern
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use number_validator::prelude::*;
use std::hint::black_box;

// ============================================================================
// Accepted Values
// ============================================================================

fn benchmark_accepted(c: &mut Criterion) {
    let mut group = c.benchmark_group("accepted");
    let validator = NumberValidator::new(17, 2, true).unwrap();

    for value in ["0", "0,0", "+1.23", "123456789012345.67"] {
        group.bench_with_input(BenchmarkId::from_parameter(value), value, |b, value| {
            b.iter(|| black_box(validator.is_valid(Some(black_box(value)))));
        });
    }

    group.finish();
}

// ============================================================================
// Rejected Values
// ============================================================================

fn benchmark_rejected(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejected");
    let validator = NumberValidator::new(4, 2, true).unwrap();

    let cases = [
        ("empty", ""),
        ("malformed", "a.bc"),
        ("precision", "12345"),
        ("scale", "0.123"),
        ("negative", "-1.23"),
    ];

    for (reason, value) in cases {
        group.bench_with_input(BenchmarkId::new("reason", reason), value, |b, value| {
            b.iter(|| black_box(validator.is_valid(Some(black_box(value)))));
        });
    }

    group.finish();
}

// ============================================================================
// Input Length
// ============================================================================

fn benchmark_input_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_length");
    let validator = NumberValidator::new(i32::MAX, 64, false).unwrap();

    for digits in [8usize, 64, 512, 4096].iter() {
        let value = format!("{}.{}", "7".repeat(*digits), "5".repeat(16));

        group.bench_with_input(BenchmarkId::new("digits", digits), &value, |b, value| {
            b.iter(|| black_box(validator.is_valid(Some(black_box(value.as_str())))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_accepted,
    benchmark_rejected,
    benchmark_input_length,
);
criterion_main!(benches);
