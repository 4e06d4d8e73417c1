//! Performance benchmarks for the Payroll Engine.
//!
//! Covers the paths a payroll screen hits on every edit and every upload:
//! - Single row recomputation per work type
//! - Batch recomputation of 100 and 1000 rows
//! - A full calculate request through the router
//! - Roster import of the downloadable template
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_engine::api::{AppState, CalculateRequest, create_router};
use payroll_engine::calculation::{calculate, recalculate_all};
use payroll_engine::config::ConfigLoader;
use payroll_engine::import::{FileKind, export_template, normalize};
use payroll_engine::models::{EmployeeRecord, PayrollRow, WorkType};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates `count` rows with varied order counts and deductions.
fn create_rows(count: usize) -> Vec<PayrollRow> {
    (0..count)
        .map(|i| {
            let mut row = PayrollRow::new(EmployeeRecord {
                name: format!("Rider {:04}", i),
                iqama_number: format!("24{:08}", i),
                basic_salary: Decimal::from(4000 + (i % 5) as i64 * 250),
                ..Default::default()
            });
            row.successful_orders = ((i * 37) % 700) as u32;
            row.wallet_deduction = Decimal::from((i % 4) as i64 * 25);
            row.internal_bonus = Decimal::from((i % 3) as i64 * 100);
            row
        })
        .collect()
}

/// Benchmark: Single row under each package.
///
/// Target: < 10μs mean
fn bench_single_row(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let row = create_rows(1).remove(0);

    let mut group = c.benchmark_group("single_row");
    for package in config.packages() {
        group.bench_with_input(BenchmarkId::new("package", &package.id), &row, |b, row| {
            b.iter(|| black_box(calculate(row, &package.plan, false)))
        });
    }
    group.bench_function("fixed_tier_table", |b| {
        let plan = &config
            .get_package("riders_tiers")
            .expect("riders_tiers package")
            .plan;
        b.iter(|| black_box(calculate(&row, plan, true)))
    });
    group.finish();
}

/// Benchmark: Recomputing batches of rows in place.
///
/// Target: < 1ms mean for 1000 rows
fn bench_batch_recalculation(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let plan = &config
        .get_package("riders_tiers")
        .expect("riders_tiers package")
        .plan;

    let mut group = c.benchmark_group("batch_recalculation");
    for count in [100, 1000] {
        let rows = create_rows(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("rows", count), &rows, |b, rows| {
            b.iter(|| {
                let mut rows = rows.clone();
                recalculate_all(&mut rows, plan, false);
                black_box(rows)
            })
        });
    }
    group.finish();
}

/// Benchmark: A 100-row calculate request through the router.
///
/// Target: < 5ms mean
fn bench_calculate_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let request = CalculateRequest {
        package_id: "riders_target".to_string(),
        month: "2026-03".to_string(),
        tier_system_active: false,
        rows: create_rows(100),
    };
    let body = serde_json::to_string(&request).unwrap();

    let mut group = c.benchmark_group("calculate_request");
    group.throughput(Throughput::Elements(100));
    group.bench_function("rows_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
    group.finish();
}

/// Benchmark: Normalizing the template and a larger generated roster.
fn bench_import(c: &mut Criterion) {
    let template = export_template(WorkType::Tiers).unwrap();

    let mut roster = String::from("اسم الموظف,رقم الإقامة,الجنسية,الراتب الأساسي,Phone\n");
    for i in 0..500 {
        roster.push_str(&format!(
            "Rider {:03},24{:08},Saudi,\"4,{:03}.00\",05{:08}\n",
            i, i, i, i
        ));
    }

    let mut group = c.benchmark_group("import");
    group.bench_function("template", |b| {
        b.iter(|| black_box(normalize(&template, FileKind::Csv, WorkType::Tiers)))
    });
    group.throughput(Throughput::Elements(500));
    group.bench_function("csv_500_rows", |b| {
        b.iter(|| black_box(normalize(roster.as_bytes(), FileKind::Csv, WorkType::Salary)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_row,
    bench_batch_recalculation,
    bench_calculate_request,
    bench_import,
);
criterion_main!(benches);
