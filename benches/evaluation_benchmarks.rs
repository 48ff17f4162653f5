//! Performance benchmarks for the Attendance Eligibility Engine.
//!
//! Covers the pure evaluation path and the HTTP endpoint:
//! - Single line evaluation
//! - Worst-case mismatch scan over a whole pattern list
//! - Pipeline over documents of increasing size
//! - `/evaluate` round trip with 1 and 50 documents
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::{ConfigLoader, PatternCatalog};
use attendance_engine::eligibility::evaluate;
use attendance_engine::models::AttendanceRequest;
use attendance_engine::normalizer::RawGrid;
use attendance_engine::pipeline;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_catalog() -> PatternCatalog {
    ConfigLoader::load("./config/attendance")
        .expect("Failed to load config")
        .into_catalog()
}

fn overnight_request(clock_in: &str) -> AttendanceRequest {
    AttendanceRequest {
        document_id: "BENCH".to_string(),
        category: "시간외근무".to_string(),
        employee_name: "Bench Worker".to_string(),
        start: "00:20".into(),
        end: "01:20".into(),
        requested_code: "1:00".to_string(),
        clock_in: clock_in.into(),
        clock_out: "02:00".into(),
        ..Default::default()
    }
}

/// A document with `lines` overtime lines cycling through the shipped windows.
fn create_grid(document_id: &str, lines: usize) -> RawGrid {
    let windows = [
        ("17:30", "19:30", "2:00", "08:30", "19:40"),
        ("17:30", "22:00", "4:30", "08:30", "22:10"),
        ("00:20", "01:20", "1:00", "10:30", "02:00"),
        ("00:20", "02:20", "2:00", "16:10", "02:30"),
    ];

    let mut rows: Vec<Vec<String>> = vec![vec!["header".to_string()]; 3];
    for i in 0..lines {
        let (start, end, code, clock_in, clock_out) = windows[i % windows.len()];
        let no = (i + 1).to_string();
        rows.push(
            [
                no.as_str(),
                "시간외근무",
                "Assembly",
                "Bench Worker",
                start,
                code,
                clock_in,
                "2025.04.09",
                "수당",
                "",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        );
        rows.push(vec!["20230001".to_string(), end.to_string(), clock_out.to_string()]);
        rows.push(vec![]);
    }

    RawGrid {
        document_id: document_id.to_string(),
        rows,
    }
}

fn evaluate_body(documents: usize, lines: usize) -> String {
    let grids: Vec<RawGrid> = (0..documents)
        .map(|i| create_grid(&format!("GW-{:04}", i), lines))
        .collect();
    serde_json::json!({ "documents": grids }).to_string()
}

/// Benchmark: one eligible line through the overnight exception.
fn bench_single_line(c: &mut Criterion) {
    let catalog = load_catalog();
    let request = overnight_request("10:30");

    c.bench_function("single_line", |b| {
        b.iter(|| black_box(evaluate(black_box(&request), &catalog)))
    });
}

/// Benchmark: a line that fails every pattern, forcing a full scan.
fn bench_full_mismatch_scan(c: &mut Criterion) {
    let catalog = load_catalog();
    let request = overnight_request("16:00");

    c.bench_function("full_mismatch_scan", |b| {
        b.iter(|| black_box(evaluate(black_box(&request), &catalog)))
    });
}

/// Benchmark: pipeline over one document of increasing size.
fn bench_pipeline_scaling(c: &mut Criterion) {
    let catalog = load_catalog();
    let mut group = c.benchmark_group("pipeline");

    for lines in [1usize, 10, 100, 1000] {
        let grids = vec![create_grid("GW-BENCH", lines)];
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::new("lines", lines), &grids, |b, grids| {
            b.iter(|| black_box(pipeline::run(grids, &catalog)))
        });
    }

    group.finish();
}

/// Benchmark: `/evaluate` round trip.
fn bench_http_evaluate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_catalog()));
    let mut group = c.benchmark_group("http_evaluate");

    for documents in [1usize, 50] {
        let body = evaluate_body(documents, 20);
        group.throughput(Throughput::Elements((documents * 20) as u64));
        group.bench_with_input(BenchmarkId::new("documents", documents), &body, |b, body| {
            b.to_async(&rt).iter(|| async {
                let response = router
                    .clone()
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/evaluate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_line,
    bench_full_mismatch_scan,
    bench_pipeline_scaling,
    bench_http_evaluate,
);
criterion_main!(benches);
