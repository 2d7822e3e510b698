//! The payroll formula for a single work session.
//!
//! Composes window resolution, attendance clipping, the daily overtime split
//! and penalties into a [`PayResult`]. The calculation is pure: it reads only
//! its arguments and never fails. Missing or inconsistent attendance pays
//! zero across every field.

use chrono::{FixedOffset, Offset, Utc};
use rust_decimal::Decimal;

use crate::models::{AuditStep, PayResult, PayRule, ShiftType, WorkLog};

use super::attendance::{AttendanceOutcome, clip_attendance};
use super::daily_overtime::detect_daily_overtime;
use super::penalty::calculate_penalty;
use super::shift_window::resolve_shift_window;

/// How the recorded attendance was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    /// Check-in and check-out produced a usable window.
    Complete,
    /// Check-in or check-out was missing.
    Incomplete,
    /// The clamped check-out preceded the clamped check-in.
    Inconsistent,
}

/// A session's pay result together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPayCalculation {
    /// The calculated pay.
    pub result: PayResult,
    /// How the attendance was judged.
    pub status: AttendanceStatus,
    /// Audit steps in the order they were applied.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the pay for one work session.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::calculate_pay;
/// use shift_payroll::models::{PayRule, ShiftType, WorkLog};
/// use chrono::{DateTime, NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let morning = ShiftType {
///     code: "CA_1".to_string(),
///     name: "Morning".to_string(),
///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
///     standard_hours: Decimal::new(8, 0),
/// };
/// let rule = PayRule {
///     daily_overtime_threshold_hours: Decimal::new(8, 0),
///     overtime_multiplier: Decimal::new(15, 1),
///     late_penalty_per_minute: Decimal::new(1000, 0),
///     early_leave_penalty_per_minute: Decimal::new(1000, 0),
/// };
/// let log = WorkLog {
///     id: "log_001".to_string(),
///     shift_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     shift_type: "CA_1".to_string(),
///     check_in: Some(DateTime::parse_from_rfc3339("2025-03-10T08:10:00+07:00").unwrap()),
///     check_out: Some(DateTime::parse_from_rfc3339("2025-03-10T17:00:00+07:00").unwrap()),
/// };
///
/// let result = calculate_pay(&log, &morning, &rule, Decimal::new(20000, 0));
///
/// assert_eq!(result.late_minutes, 10);
/// assert_eq!(result.actual_hours, Decimal::from_str("7.83").unwrap());
/// assert_eq!(result.base_pay, Decimal::from_str("156600").unwrap());
/// assert_eq!(result.penalty_amount, Decimal::from_str("10000").unwrap());
/// assert_eq!(result.total_pay, Decimal::from_str("146600").unwrap());
/// ```
pub fn calculate_pay(
    work_log: &WorkLog,
    shift_type: &ShiftType,
    pay_rule: &PayRule,
    hourly_wage: Decimal,
) -> PayResult {
    calculate_session_pay(work_log, shift_type, pay_rule, hourly_wage, 1).result
}

/// Calculates the pay for one work session and records each step.
///
/// Step numbers start at `start_step_number` so callers can append the
/// steps of several sessions into one trace.
pub fn calculate_session_pay(
    work_log: &WorkLog,
    shift_type: &ShiftType,
    pay_rule: &PayRule,
    hourly_wage: Decimal,
    start_step_number: u32,
) -> SessionPayCalculation {
    let mut audit_steps = Vec::new();
    let mut current_step = start_step_number;

    // The check-in's offset is authoritative for the whole shift
    let offset = session_offset(work_log);
    let window = resolve_shift_window(work_log.shift_date, offset, shift_type);

    audit_steps.push(AuditStep {
        step_number: current_step,
        rule_id: "shift_window_resolution".to_string(),
        rule_name: "Shift Window Resolution".to_string(),
        input: serde_json::json!({
            "work_log_id": work_log.id,
            "shift_date": work_log.shift_date.to_string(),
            "shift_type": shift_type.code,
            "start_time": shift_type.start_time.to_string(),
            "end_time": shift_type.end_time.to_string()
        }),
        output: serde_json::json!({
            "start": window.start.to_rfc3339(),
            "end": window.end.to_rfc3339(),
            "duration_minutes": window.duration_minutes()
        }),
        reasoning: if shift_type.crosses_midnight() {
            format!(
                "{} ends at or before it starts, so it ends on the following day",
                shift_type.code
            )
        } else {
            format!("{} starts and ends on the shift date", shift_type.code)
        },
    });
    current_step += 1;

    let clip = match clip_attendance(work_log.check_in, work_log.check_out, &window) {
        AttendanceOutcome::Clipped(clip) => clip,
        AttendanceOutcome::Incomplete => {
            audit_steps.push(AuditStep {
                step_number: current_step,
                rule_id: "attendance_clipping".to_string(),
                rule_name: "Attendance Clipping".to_string(),
                input: serde_json::json!({
                    "check_in": work_log.check_in.map(|t| t.to_rfc3339()),
                    "check_out": work_log.check_out.map(|t| t.to_rfc3339())
                }),
                output: serde_json::json!({ "actual_hours": "0" }),
                reasoning: "Check-in or check-out missing, session pays zero".to_string(),
            });
            return SessionPayCalculation {
                result: PayResult::zero(),
                status: AttendanceStatus::Incomplete,
                audit_steps,
            };
        }
        AttendanceOutcome::Inconsistent {
            effective_check_in,
            effective_check_out,
        } => {
            audit_steps.push(AuditStep {
                step_number: current_step,
                rule_id: "attendance_clipping".to_string(),
                rule_name: "Attendance Clipping".to_string(),
                input: serde_json::json!({
                    "check_in": work_log.check_in.map(|t| t.to_rfc3339()),
                    "check_out": work_log.check_out.map(|t| t.to_rfc3339())
                }),
                output: serde_json::json!({
                    "effective_check_in": effective_check_in.to_rfc3339(),
                    "effective_check_out": effective_check_out.to_rfc3339(),
                    "actual_hours": "0"
                }),
                reasoning: "Clamped check-out precedes clamped check-in, session pays zero"
                    .to_string(),
            });
            return SessionPayCalculation {
                result: PayResult::zero(),
                status: AttendanceStatus::Inconsistent,
                audit_steps,
            };
        }
    };

    audit_steps.push(AuditStep {
        step_number: current_step,
        rule_id: "attendance_clipping".to_string(),
        rule_name: "Attendance Clipping".to_string(),
        input: serde_json::json!({
            "check_in": work_log.check_in.map(|t| t.to_rfc3339()),
            "check_out": work_log.check_out.map(|t| t.to_rfc3339()),
            "window_start": window.start.to_rfc3339(),
            "window_end": window.end.to_rfc3339()
        }),
        output: serde_json::json!({
            "effective_check_in": clip.effective_check_in.to_rfc3339(),
            "effective_check_out": clip.effective_check_out.to_rfc3339(),
            "late_minutes": clip.late_minutes,
            "early_leave_minutes": clip.early_leave_minutes,
            "worked_minutes": clip.worked_minutes,
            "actual_hours": clip.actual_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} minutes worked inside the shift window = {} hours",
            clip.worked_minutes,
            clip.actual_hours.normalize()
        ),
    });
    current_step += 1;

    let overtime = detect_daily_overtime(
        clip.actual_hours,
        pay_rule.daily_overtime_threshold_hours,
        current_step,
    );
    audit_steps.push(overtime.audit_step);
    current_step += 1;

    let penalty = calculate_penalty(
        clip.late_minutes,
        clip.early_leave_minutes,
        pay_rule,
        current_step,
    );
    audit_steps.push(penalty.audit_step);
    current_step += 1;

    let base_pay = overtime.base_hours * hourly_wage;
    let overtime_pay = overtime.overtime_hours * hourly_wage * pay_rule.overtime_multiplier;
    let total_pay = base_pay + overtime_pay - penalty.amount;

    audit_steps.push(AuditStep {
        step_number: current_step,
        rule_id: "session_pay_total".to_string(),
        rule_name: "Session Pay Total".to_string(),
        input: serde_json::json!({
            "base_hours": overtime.base_hours.normalize().to_string(),
            "overtime_hours": overtime.overtime_hours.normalize().to_string(),
            "hourly_wage": hourly_wage.normalize().to_string(),
            "overtime_multiplier": pay_rule.overtime_multiplier.normalize().to_string(),
            "penalty_amount": penalty.amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_pay": base_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "total_pay": total_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} - {} = {}",
            base_pay.normalize(),
            overtime_pay.normalize(),
            penalty.amount.normalize(),
            total_pay.normalize()
        ),
    });

    SessionPayCalculation {
        result: PayResult {
            actual_hours: clip.actual_hours,
            base_hours: overtime.base_hours,
            overtime_hours: overtime.overtime_hours,
            late_minutes: clip.late_minutes,
            early_leave_minutes: clip.early_leave_minutes,
            base_pay,
            overtime_pay,
            penalty_amount: penalty.amount,
            total_pay,
        },
        status: AttendanceStatus::Complete,
        audit_steps,
    }
}

/// Picks the offset that anchors the shift window.
///
/// Falls back to the check-out's offset and then UTC; without both instants
/// the session pays zero anyway.
fn session_offset(work_log: &WorkLog) -> FixedOffset {
    work_log
        .check_in
        .or(work_log.check_out)
        .map(|t| *t.offset())
        .unwrap_or_else(|| Utc.fix())
}
