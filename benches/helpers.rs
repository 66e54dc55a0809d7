//! Benchmarks for the heavier helpers.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks cover the helpers whose cost grows with their input: combinations and set
//! operations on slices, inflections on strings and stepping through date ranges.

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use garnish::prelude::*;

/// Benchmark: combinations of increasing size
fn bench_combination(c: &mut Criterion) {
    let mut group = c.benchmark_group("combination");

    for len in [8, 12, 16].iter() {
        let items: Vec<u32> = (0..*len).collect();
        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::new("choose_4", len), &items, |b, items| {
            b.iter(|| black_box(items).combination(4));
        });
    }

    group.finish();
}

/// Benchmark: tally, uniq and set operations
fn bench_set_operations(c: &mut Criterion) {
    let left: Vec<u32> = (0..10_000).map(|i| i % 997).collect();
    let right: Vec<u32> = (0..10_000).map(|i| i % 1013).collect();

    c.bench_function("tally", |b| b.iter(|| black_box(&left).tally()));
    c.bench_function("union", |b| {
        b.iter(|| black_box(&left).union(&[right.as_slice()]))
    });
    c.bench_function("intersection", |b| {
        b.iter(|| black_box(&left).intersection(&[right.as_slice()]))
    });
}

/// Benchmark: text inflections
fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let sentence = "  The quick_brown fox_id: jumps over the lazy dog!  ";

    group.bench_function("humanize", |b| b.iter(|| black_box(sentence).humanize()));
    group.bench_function("titleize", |b| b.iter(|| black_box(sentence).titleize()));
    group.bench_function("parameterize", |b| {
        b.iter(|| black_box(sentence).parameterize())
    });
    group.bench_function("to_i", |b| b.iter(|| black_box("  -12345 apples").to_i()));
    group.bench_function("pluralize", |b| {
        b.iter(|| black_box("category").pluralize())
    });

    group.finish();
}

/// Benchmark: iterating a year-long range at every granularity
fn bench_date_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_range");
    let start = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    let range = DateRange::new(start, Duration::years(1).since(start).unwrap());

    for granularity in [Granularity::Day, Granularity::Week, Granularity::Month] {
        group.bench_with_input(
            BenchmarkId::new("step_by", granularity),
            &granularity,
            |b, granularity| {
                b.iter(|| range.step_by(*granularity, 1).unwrap().count());
            },
        );
    }

    group.bench_function("advance", |b| {
        let duration = Duration::months(1).with_days(3).with_hours(4);
        b.iter(|| black_box(start).advance(&duration).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_combination,
    bench_set_operations,
    bench_text,
    bench_date_range,
);
criterion_main!(benches);
