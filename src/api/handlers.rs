//! HTTP request handlers for the Shift Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashSet;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{AttendanceStatus, calculate_session_pay};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Employee, PayPeriod, PayRule, PayrollRunResult,
    PayrollTotals, SessionPay, ShiftType, WorkLog,
};

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/shift-types", get(shift_types_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET /shift-types.
async fn shift_types_handler(State(state): State<AppState>) -> Response {
    let shift_types: Vec<ShiftType> = state.config().shift_types().into_iter().cloned().collect();
    json_response(StatusCode::OK, shift_types)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a payroll request and returns the payroll run result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let employee: Employee = request.employee.into();
    let pay_period: PayPeriod = request.pay_period.into();
    let work_logs: Vec<WorkLog> = request.work_logs.into_iter().map(Into::into).collect();

    let outcome = request
        .pay_rule
        .map(PayRule::try_from)
        .transpose()
        .and_then(|pay_rule| {
            perform_payroll_run(
                &employee,
                &pay_period,
                pay_rule.as_ref(),
                &work_logs,
                state.config(),
            )
        });

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                sessions_count = result.sessions.len(),
                total_pay = %result.totals.total_pay,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "Payroll run completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll run failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Pays every work log of one employee within a pay period.
///
/// Resolves each log's shift type and pay rule from configuration (unless a
/// rule override is given), runs the payroll formula, and aggregates the
/// results. Sessions are reported in request order.
pub fn perform_payroll_run(
    employee: &Employee,
    pay_period: &PayPeriod,
    pay_rule_override: Option<&PayRule>,
    work_logs: &[WorkLog],
    config: &ConfigLoader,
) -> EngineResult<PayrollRunResult> {
    let start_time = Instant::now();

    employee.validate()?;
    pay_period.validate()?;

    let mut sessions: Vec<SessionPay> = Vec::with_capacity(work_logs.len());
    let mut all_audit_steps: Vec<AuditStep> = Vec::new();
    let mut all_warnings: Vec<AuditWarning> = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(work_logs.len());
    let mut step_number: u32 = 1;

    for work_log in work_logs {
        if !pay_period.contains_date(work_log.shift_date) {
            return Err(EngineError::InvalidWorkLog {
                work_log_id: work_log.id.clone(),
                message: format!(
                    "shift date {} is outside pay period {} to {}",
                    work_log.shift_date, pay_period.start_date, pay_period.end_date
                ),
            });
        }
        if !seen_ids.insert(work_log.id.as_str()) {
            return Err(EngineError::InvalidWorkLog {
                work_log_id: work_log.id.clone(),
                message: "work log appears more than once".to_string(),
            });
        }

        let shift_type = config.get_shift_type(&work_log.shift_type)?;
        let pay_rule = match pay_rule_override {
            Some(rule) => rule.clone(),
            None => config.get_pay_rule(work_log.shift_date)?,
        };

        let calculation = calculate_session_pay(
            work_log,
            shift_type,
            &pay_rule,
            employee.hourly_wage,
            step_number,
        );
        step_number += calculation.audit_steps.len() as u32;
        all_audit_steps.extend(calculation.audit_steps);

        match calculation.status {
            AttendanceStatus::Complete => {}
            AttendanceStatus::Incomplete => all_warnings.push(AuditWarning {
                code: "INCOMPLETE_ATTENDANCE".to_string(),
                message: format!(
                    "Work log '{}' is missing a check-in or check-out and was paid zero",
                    work_log.id
                ),
                severity: "medium".to_string(),
            }),
            AttendanceStatus::Inconsistent => all_warnings.push(AuditWarning {
                code: "INCONSISTENT_ATTENDANCE".to_string(),
                message: format!(
                    "Work log '{}' has no overlap with its shift window and was paid zero",
                    work_log.id
                ),
                severity: "high".to_string(),
            }),
        }

        if calculation.result.total_pay < Decimal::ZERO {
            all_warnings.push(AuditWarning {
                code: "NEGATIVE_TOTAL_PAY".to_string(),
                message: format!(
                    "Penalties exceed earnings for work log '{}': total pay {}",
                    work_log.id,
                    calculation.result.total_pay.normalize()
                ),
                severity: "medium".to_string(),
            });
        }

        sessions.push(SessionPay {
            work_log_id: work_log.id.clone(),
            shift_date: work_log.shift_date,
            shift_type: shift_type.code.clone(),
            result: calculation.result,
        });
    }

    let totals = PayrollTotals::from_sessions(&sessions);
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(PayrollRunResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        pay_period: pay_period.clone(),
        sessions,
        totals,
        audit_trace: AuditTrace {
            steps: all_audit_steps,
            warnings: all_warnings,
            duration_us,
        },
    })
}
