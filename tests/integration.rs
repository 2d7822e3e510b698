//! Integration tests for the Shift Payroll Engine HTTP API.
//!
//! Covers:
//! - Day and overnight shifts
//! - Lateness, early leave and daily overtime
//! - Missing and inconsistent attendance
//! - Negative net pay
//! - Pay rule overrides and effective dating
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal from a JSON string or number field.
fn field(value: &Value, key: &str) -> Decimal {
    match &value[key] {
        Value::String(s) => decimal(s),
        Value::Number(n) => decimal(&n.to_string()),
        other => panic!("field '{}' is not a decimal: {:?}", key, other),
    }
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    post_raw(router, body.to_string(), Some("application/json")).await
}

async fn post_raw(
    router: Router,
    body: String,
    content_type: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri("/calculate");
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    let response = router
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn work_log(id: &str, date: &str, shift_type: &str, check_in: Value, check_out: Value) -> Value {
    json!({
        "id": id,
        "shift_date": date,
        "shift_type": shift_type,
        "check_in": check_in,
        "check_out": check_out
    })
}

fn create_request(hourly_wage: &str, work_logs: Vec<Value>) -> Value {
    json!({
        "employee": {
            "id": "emp_001",
            "branch_id": "branch_hcm_01",
            "hourly_wage": hourly_wage
        },
        "pay_period": {
            "start_date": "2025-03-01",
            "end_date": "2025-03-15"
        },
        "work_logs": work_logs
    })
}

// =============================================================================
// Day shifts
// =============================================================================

#[tokio::test]
async fn test_late_check_in_and_overstay() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_1",
            json!("2025-03-10T08:10:00+07:00"),
            json!("2025-03-10T17:00:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["sessions"][0]["result"];
    assert_eq!(result["late_minutes"], 10);
    assert_eq!(result["early_leave_minutes"], 0);
    assert_eq!(field(result, "actual_hours"), decimal("7.83"));
    assert_eq!(field(result, "base_hours"), decimal("7.83"));
    assert_eq!(field(result, "overtime_hours"), Decimal::ZERO);
    assert_eq!(field(result, "base_pay"), decimal("156600"));
    assert_eq!(field(result, "penalty_amount"), decimal("10000"));
    assert_eq!(field(result, "total_pay"), decimal("146600"));
    assert_eq!(field(&body["totals"], "total_pay"), decimal("146600"));
}

#[tokio::test]
async fn test_on_time_full_shift() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_1",
            json!("2025-03-10T08:00:00+07:00"),
            json!("2025-03-10T16:00:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["sessions"][0]["result"];
    assert_eq!(result["late_minutes"], 0);
    assert_eq!(field(result, "actual_hours"), decimal("8"));
    assert_eq!(field(result, "total_pay"), decimal("160000"));
    assert!(body["audit_trace"]["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_early_leave_is_penalised() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_1",
            json!("2025-03-10T08:00:00+07:00"),
            json!("2025-03-10T15:30:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["sessions"][0]["result"];
    assert_eq!(result["early_leave_minutes"], 30);
    assert_eq!(field(result, "actual_hours"), decimal("7.5"));
    assert_eq!(field(result, "base_pay"), decimal("150000"));
    assert_eq!(field(result, "penalty_amount"), decimal("30000"));
    assert_eq!(field(result, "total_pay"), decimal("120000"));
}

// =============================================================================
// Overnight shifts
// =============================================================================

#[tokio::test]
async fn test_evening_shift_ends_at_midnight() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_2",
            json!("2025-03-10T16:00:00+07:00"),
            json!("2025-03-11T00:00:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["sessions"][0]["result"];
    assert_eq!(result["late_minutes"], 0);
    assert_eq!(result["early_leave_minutes"], 0);
    assert_eq!(field(result, "actual_hours"), decimal("8"));

    let window = &body["audit_trace"]["steps"][0]["output"];
    assert_eq!(window["end"], "2025-03-11T00:00:00+07:00");
    assert_eq!(window["duration_minutes"], 480);
}

#[tokio::test]
async fn test_night_shift_crosses_midnight() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_3",
            json!("2025-03-10T22:05:00+07:00"),
            json!("2025-03-11T06:00:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["sessions"][0]["result"];
    assert_eq!(result["late_minutes"], 5);
    assert_eq!(field(result, "actual_hours"), decimal("7.92"));
    assert_eq!(field(result, "penalty_amount"), decimal("5000"));
}

// =============================================================================
// Daily overtime
// =============================================================================

#[tokio::test]
async fn test_overtime_above_lowered_threshold() {
    let mut request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_1",
            json!("2025-03-10T08:00:00+07:00"),
            json!("2025-03-10T16:00:00+07:00"),
        )],
    );
    request["pay_rule"] = json!({
        "daily_overtime_threshold_hours": "6",
        "overtime_multiplier": "1.5",
        "late_penalty_per_minute": "1000",
        "early_leave_penalty_per_minute": "1000"
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["sessions"][0]["result"];
    assert_eq!(field(result, "base_hours"), decimal("6"));
    assert_eq!(field(result, "overtime_hours"), decimal("2"));
    assert_eq!(field(result, "base_pay"), decimal("120000"));
    assert_eq!(field(result, "overtime_pay"), decimal("60000"));
    assert_eq!(field(result, "total_pay"), decimal("180000"));
}

#[tokio::test]
async fn test_hours_equal_to_threshold_are_not_overtime() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_1",
            json!("2025-03-10T07:30:00+07:00"),
            json!("2025-03-10T16:30:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["sessions"][0]["result"];
    assert_eq!(field(result, "actual_hours"), decimal("8"));
    assert_eq!(field(result, "overtime_hours"), Decimal::ZERO);
}

// =============================================================================
// Attendance anomalies
// =============================================================================

#[tokio::test]
async fn test_missing_check_out_pays_zero_with_warning() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_1",
            json!("2025-03-10T08:00:00+07:00"),
            Value::Null,
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["sessions"][0]["result"];
    assert_eq!(field(result, "actual_hours"), Decimal::ZERO);
    assert_eq!(field(result, "total_pay"), Decimal::ZERO);
    assert_eq!(result["late_minutes"], 0);

    let warnings = body["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "INCOMPLETE_ATTENDANCE");
}

#[tokio::test]
async fn test_attendance_outside_window_pays_zero() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_1",
            json!("2025-03-10T17:00:00+07:00"),
            json!("2025-03-10T18:00:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["sessions"][0]["result"];
    assert_eq!(field(result, "total_pay"), Decimal::ZERO);
    assert_eq!(field(result, "penalty_amount"), Decimal::ZERO);

    let warnings = body["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings[0]["code"], "INCONSISTENT_ATTENDANCE");
}

#[tokio::test]
async fn test_negative_total_pay_is_preserved() {
    let request = create_request(
        "1000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_1",
            json!("2025-03-10T12:00:00+07:00"),
            json!("2025-03-10T13:00:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    // 1h at 1,000 minus (240 + 180) minutes at 1,000
    let result = &body["sessions"][0]["result"];
    assert_eq!(field(result, "base_pay"), decimal("1000"));
    assert_eq!(field(result, "penalty_amount"), decimal("420000"));
    assert_eq!(field(result, "total_pay"), decimal("-419000"));

    let warnings = body["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings[0]["code"], "NEGATIVE_TOTAL_PAY");
}

// =============================================================================
// Pay period aggregation
// =============================================================================

#[tokio::test]
async fn test_totals_across_sessions() {
    let request = create_request(
        "20000",
        vec![
            work_log(
                "log_001",
                "2025-03-10",
                "CA_1",
                json!("2025-03-10T08:10:00+07:00"),
                json!("2025-03-10T17:00:00+07:00"),
            ),
            work_log(
                "log_002",
                "2025-03-11",
                "CA_1",
                json!("2025-03-11T08:00:00+07:00"),
                json!("2025-03-11T16:00:00+07:00"),
            ),
            work_log("log_003", "2025-03-12", "CA_2", Value::Null, Value::Null),
        ],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    let totals = &body["totals"];
    assert_eq!(totals["sessions"], 3);
    assert_eq!(totals["late_minutes"], 10);
    assert_eq!(field(totals, "actual_hours"), decimal("15.83"));
    assert_eq!(field(totals, "total_pay"), decimal("306600"));

    let ids: Vec<&str> = body["sessions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["work_log_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["log_001", "log_002", "log_003"]);
}

#[tokio::test]
async fn test_response_metadata() {
    let request = create_request("20000", vec![]);

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["employee_id"], "emp_001");
    assert_eq!(body["engine_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["calculation_id"].as_str().is_some());
    assert_eq!(body["pay_period"]["start_date"], "2025-03-01");
    assert_eq!(body["totals"]["sessions"], 0);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_unknown_shift_type() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_9",
            json!("2025-03-10T08:00:00+07:00"),
            json!("2025-03-10T16:00:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "SHIFT_TYPE_NOT_FOUND");
}

#[tokio::test]
async fn test_no_pay_rule_before_first_effective_date() {
    let mut request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2024-12-10",
            "CA_1",
            json!("2024-12-10T08:00:00+07:00"),
            json!("2024-12-10T16:00:00+07:00"),
        )],
    );
    request["pay_period"] = json!({"start_date": "2024-12-01", "end_date": "2024-12-15"});

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "PAY_RULE_NOT_FOUND");
}

#[tokio::test]
async fn test_work_log_outside_pay_period() {
    let request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "2025-03-20",
            "CA_1",
            json!("2025-03-20T08:00:00+07:00"),
            json!("2025-03-20T16:00:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_WORK_LOG");
}

#[tokio::test]
async fn test_negative_wage_rejected() {
    let request = create_request("-1", vec![]);

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_EMPLOYEE");
}

#[tokio::test]
async fn test_wage_beyond_limit_rejected() {
    let request = create_request(
        "79228162514264337593543950335",
        vec![work_log(
            "log_001",
            "2025-03-10",
            "CA_1",
            json!("2025-03-10T08:00:00+07:00"),
            json!("2025-03-10T16:00:00+07:00"),
        )],
    );

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_EMPLOYEE");
}

#[tokio::test]
async fn test_pay_period_before_supported_years_rejected() {
    let mut request = create_request(
        "20000",
        vec![work_log(
            "log_001",
            "1899-12-31",
            "CA_2",
            json!("2025-03-10T16:00:00+07:00"),
            json!("2025-03-11T00:00:00+07:00"),
        )],
    );
    request["pay_period"] = json!({"start_date": "1899-12-31", "end_date": "1899-12-31"});

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAY_PERIOD");
}

#[tokio::test]
async fn test_inverted_pay_period_rejected() {
    let mut request = create_request("20000", vec![]);
    request["pay_period"] = json!({"start_date": "2025-03-15", "end_date": "2025-03-01"});

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAY_PERIOD");
}

#[tokio::test]
async fn test_negative_pay_rule_override_rejected() {
    let mut request = create_request("20000", vec![]);
    request["pay_rule"] = json!({
        "daily_overtime_threshold_hours": "8",
        "overtime_multiplier": "-1.5",
        "late_penalty_per_minute": "1000",
        "early_leave_penalty_per_minute": "1000"
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAY_RULE");
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let request = json!({
        "employee": {"id": "emp_001"},
        "pay_period": {"start_date": "2025-03-01", "end_date": "2025-03-15"}
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json() {
    let (status, body) = post_raw(
        create_router_for_test(),
        "{not json".to_string(),
        Some("application/json"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type() {
    let body = create_request("20000", vec![]).to_string();
    let (status, body) = post_raw(create_router_for_test(), body, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}

// =============================================================================
// Shift types
// =============================================================================

#[tokio::test]
async fn test_list_shift_types() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/shift-types")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["CA_1", "CA_2", "CA_3"]);
    assert_eq!(body[2]["start_time"], "22:00:00");
}
