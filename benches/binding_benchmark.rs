use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sql_binding::prelude::*;

#[derive(Debug, Default)]
struct Reading {
    sensor: String,
    value: f64,
    seq: i64,
}

bind_record!(Reading {
    sensor => "sensor_id",
    value,
    seq,
});

fn param_count() -> usize {
    std::env::var("BENCH_PARAMS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(16)
}

fn wide_insert(params: usize) -> String {
    let values: Vec<String> = (0..params).map(|i| format!(":p{i}")).collect();
    format!("INSERT INTO wide VALUES ({})", values.join(", "))
}

fn extraction(c: &mut Criterion) {
    let params = param_count();
    let query = wide_insert(params);
    let mut group = c.benchmark_group("extract_named_parameters");
    group.throughput(Throughput::Elements(params as u64));
    group.bench_function(BenchmarkId::new("colon", params), |b| {
        b.iter(|| extract_named_parameters(black_box(&query), ':'));
    });
    group.finish();
}

fn bind_and_scan(c: &mut Criterion) {
    let binder = Binder::default();
    let reading = Reading {
        sensor: "t-1".into(),
        value: 21.5,
        seq: 7,
    };
    let row = ScannedRow::new(
        Arc::new(vec!["sensor_id".into(), "value".into(), "seq".into()]),
        vec![
            RowValues::Blob(b"t-1".to_vec()),
            RowValues::Float(21.5),
            RowValues::Int32(7),
        ],
    );

    let mut group = c.benchmark_group("binder");
    group.bench_function("bind", |b| {
        b.iter(|| {
            binder.bind(
                black_box("INSERT INTO readings VALUES (:sensor_id, :value, :seq)"),
                black_box(&reading),
            )
        });
    });
    group.bench_function("scan_row", |b| {
        b.iter(|| {
            let mut target = Reading::default();
            binder.scan_row(black_box(&row), &mut target).map(|()| target)
        });
    });
    group.finish();
}

criterion_group!(benches, extraction, bind_and_scan);
criterion_main!(benches);
