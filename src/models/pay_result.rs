//! Payroll result models.
//!
//! [`PayResult`] is the value produced by the payroll formula for one work
//! session. [`PayrollRunResult`] wraps the per-session results of a pay
//! period together with totals and an audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// The hours and pay decomposition of a single work session.
///
/// `total_pay` is `base_pay + overtime_pay - penalty_amount` and is not
/// floored, so a heavily penalised session can be negative.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PayResult;
/// use rust_decimal::Decimal;
///
/// let result = PayResult::zero();
/// assert_eq!(result.total_pay, Decimal::ZERO);
/// assert!(result.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// Hours worked inside the shift window, rounded to two decimals.
    pub actual_hours: Decimal,
    /// Hours paid at the base rate.
    pub base_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Minutes checked in after the shift started.
    pub late_minutes: i64,
    /// Minutes checked out before the shift ended.
    pub early_leave_minutes: i64,
    /// Pay for base hours.
    pub base_pay: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Lateness and early-leave penalties.
    pub penalty_amount: Decimal,
    /// Net pay for the session.
    pub total_pay: Decimal,
}

impl PayResult {
    /// Returns a result with every field zero.
    pub fn zero() -> Self {
        Self {
            actual_hours: Decimal::ZERO,
            base_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            late_minutes: 0,
            early_leave_minutes: 0,
            base_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            penalty_amount: Decimal::ZERO,
            total_pay: Decimal::ZERO,
        }
    }

    /// Returns true if every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// A session's pay result tagged with the work log it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPay {
    /// The ID of the work log.
    pub work_log_id: String,
    /// The shift date of the work log.
    pub shift_date: NaiveDate,
    /// The shift type code worked.
    pub shift_type: String,
    /// The calculated pay.
    pub result: PayResult,
}

/// Aggregated totals across all sessions of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of sessions included.
    pub sessions: u32,
    /// Sum of actual hours.
    pub actual_hours: Decimal,
    /// Sum of base hours.
    pub base_hours: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
    /// Sum of late minutes.
    pub late_minutes: i64,
    /// Sum of early-leave minutes.
    pub early_leave_minutes: i64,
    /// Sum of base pay.
    pub base_pay: Decimal,
    /// Sum of overtime pay.
    pub overtime_pay: Decimal,
    /// Sum of penalties.
    pub penalty_amount: Decimal,
    /// Sum of net pay.
    pub total_pay: Decimal,
}

impl PayrollTotals {
    /// Sums the given session results.
    pub fn from_sessions(sessions: &[SessionPay]) -> Self {
        sessions.iter().fold(
            PayrollTotals {
                sessions: 0,
                actual_hours: Decimal::ZERO,
                base_hours: Decimal::ZERO,
                overtime_hours: Decimal::ZERO,
                late_minutes: 0,
                early_leave_minutes: 0,
                base_pay: Decimal::ZERO,
                overtime_pay: Decimal::ZERO,
                penalty_amount: Decimal::ZERO,
                total_pay: Decimal::ZERO,
            },
            |mut acc, s| {
                let r = &s.result;
                acc.sessions += 1;
                acc.actual_hours += r.actual_hours;
                acc.base_hours += r.base_hours;
                acc.overtime_hours += r.overtime_hours;
                acc.late_minutes += r.late_minutes;
                acc.early_leave_minutes += r.early_leave_minutes;
                acc.base_pay += r.base_pay;
                acc.overtime_pay += r.overtime_pay;
                acc.penalty_amount += r.penalty_amount;
                acc.total_pay += r.total_pay;
                acc
            },
        )
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag sessions worth a second look without failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll run for one employee and pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunResult {
    /// Unique identifier for this run.
    pub calculation_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The ID of the employee.
    pub employee_id: String,
    /// The pay period covered.
    pub pay_period: PayPeriod,
    /// Per-session results, in request order.
    pub sessions: Vec<SessionPay>,
    /// Aggregated totals.
    pub totals: PayrollTotals,
    /// Audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
