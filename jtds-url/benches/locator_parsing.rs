//! Benchmarks for locator parsing and property description.

use criterion::{Criterion, criterion_group, criterion_main};
use jtds_url::{ConnectionProperties, PropertyCatalog, describe, parse_locator};
use std::hint::black_box;

const SHORT: &str = "jdbc:jtds:sqlserver://localhost";
const FULL: &str = "jdbc:jtds:sqlserver://db.internal:1433/sales;user=sa;password=secret;\
                    TDS=8.0;appName=reports;prepareSql=true;lastUpdateCount=false";

/// Benchmark locator parsing.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_locator");
    let empty = ConnectionProperties::new();

    group.bench_function("short", |b| {
        b.iter(|| black_box(parse_locator(black_box(SHORT), &empty)))
    });

    group.bench_function("full", |b| {
        b.iter(|| black_box(parse_locator(black_box(FULL), &empty)))
    });

    group.bench_function("with_overrides", |b| {
        let overrides = ConnectionProperties::new()
            .with("user", "app")
            .with("password", "pw")
            .with("databaseName", "default");
        b.iter(|| black_box(parse_locator(black_box(SHORT), &overrides)))
    });

    group.finish();
}

/// Benchmark descriptor assembly.
fn bench_describe(c: &mut Criterion) {
    let catalog = PropertyCatalog::bundled().expect("bundled catalog");
    let props = parse_locator(FULL, &ConnectionProperties::new()).expect("valid locator");

    c.bench_function("describe", |b| {
        b.iter(|| black_box(describe(black_box(&props), &catalog)))
    });
}

criterion_group!(benches, bench_parse, bench_describe);
criterion_main!(benches);
