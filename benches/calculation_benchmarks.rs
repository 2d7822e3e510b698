//! Performance benchmarks for the Shift Payroll Engine.
//!
//! - Single session through the pure payroll formula
//! - A pay period of sessions through `perform_payroll_run`
//! - The same pay periods through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_payroll::api::{AppState, PayrollRequest, create_router, perform_payroll_run};
use shift_payroll::calculation::calculate_pay;
use shift_payroll::config::ConfigLoader;
use shift_payroll::models::{Employee, PayPeriod, WorkLog};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

/// Creates a payroll request with `session_count` sessions cycling through
/// the three configured shift types over the first half of March 2025.
fn create_request_with_sessions(session_count: usize) -> PayrollRequest {
    let shifts = [
        ("CA_1", "08:07:00", "16:00:00", 0),
        ("CA_2", "16:00:00", "23:40:00", 0),
        ("CA_3", "22:00:00", "06:30:00", 1),
    ];

    let work_logs: Vec<serde_json::Value> = (0..session_count)
        .map(|i| {
            let day = 1 + (i % 15) as u32;
            let (code, check_in, check_out, rollover) = shifts[i % shifts.len()];
            let date = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
            let out_date = date + chrono::Duration::days(rollover);
            serde_json::json!({
                "id": format!("log_{:04}", i + 1),
                "shift_date": date.to_string(),
                "shift_type": code,
                "check_in": format!("{}T{}+07:00", date, check_in),
                "check_out": format!("{}T{}+07:00", out_date, check_out)
            })
        })
        .collect();

    let request_json = serde_json::json!({
        "employee": {
            "id": "emp_bench_001",
            "branch_id": "branch_hcm_01",
            "hourly_wage": "25000"
        },
        "pay_period": {
            "start_date": "2025-03-01",
            "end_date": "2025-03-15"
        },
        "work_logs": work_logs
    });

    serde_json::from_value(request_json).expect("Failed to create request")
}

/// Benchmark: one session through the pure formula.
fn bench_single_session(c: &mut Criterion) {
    let config = load_config();
    let request = create_request_with_sessions(1);
    let work_log: WorkLog = request.work_logs[0].clone().into();
    let shift_type = config.get_shift_type(&work_log.shift_type).unwrap().clone();
    let pay_rule = config.get_pay_rule(work_log.shift_date).unwrap();
    let wage = request.employee.hourly_wage;

    c.bench_function("single_session", |b| {
        b.iter(|| {
            black_box(calculate_pay(
                black_box(&work_log),
                &shift_type,
                &pay_rule,
                wage,
            ))
        })
    });
}

/// Benchmark: payroll runs of increasing size, without HTTP.
fn bench_payroll_run(c: &mut Criterion) {
    let config = load_config();
    let mut group = c.benchmark_group("payroll_run");

    for session_count in [1, 14, 31, 100].iter() {
        let request = create_request_with_sessions(*session_count);
        let employee: Employee = request.employee.into();
        let pay_period: PayPeriod = request.pay_period.into();
        let work_logs: Vec<WorkLog> = request.work_logs.into_iter().map(Into::into).collect();

        group.throughput(Throughput::Elements(*session_count as u64));
        group.bench_with_input(
            BenchmarkId::new("sessions", session_count),
            session_count,
            |b, _| {
                b.iter(|| {
                    black_box(
                        perform_payroll_run(&employee, &pay_period, None, &work_logs, &config)
                            .unwrap(),
                    )
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: full request handling through the router.
fn bench_http_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(load_config());

    let mut group = c.benchmark_group("http_calculate");

    for session_count in [1, 14, 31].iter() {
        let router = create_router(state.clone());
        let body = serde_json::to_string(&create_request_with_sessions(*session_count)).unwrap();

        group.throughput(Throughput::Elements(*session_count as u64));
        group.bench_with_input(
            BenchmarkId::new("sessions", session_count),
            session_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/calculate")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_session,
    bench_payroll_run,
    bench_http_calculate,
);
criterion_main!(benches);
