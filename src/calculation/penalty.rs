//! Lateness and early-leave penalties.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, PayRule};

/// The penalty charged for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyResult {
    /// Penalty for arriving late.
    pub late_penalty: Decimal,
    /// Penalty for leaving early.
    pub early_leave_penalty: Decimal,
    /// Sum of both penalties.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the pay rule's per-minute penalty rates.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::calculate_penalty;
/// use shift_payroll::models::PayRule;
/// use rust_decimal::Decimal;
///
/// let rule = PayRule {
///     daily_overtime_threshold_hours: Decimal::new(8, 0),
///     overtime_multiplier: Decimal::new(15, 1),
///     late_penalty_per_minute: Decimal::new(1000, 0),
///     early_leave_penalty_per_minute: Decimal::new(500, 0),
/// };
///
/// let penalty = calculate_penalty(10, 4, &rule, 1);
/// assert_eq!(penalty.amount, Decimal::new(12000, 0));
/// ```
pub fn calculate_penalty(
    late_minutes: i64,
    early_leave_minutes: i64,
    pay_rule: &PayRule,
    step_number: u32,
) -> PenaltyResult {
    let late_penalty = Decimal::from(late_minutes) * pay_rule.late_penalty_per_minute;
    let early_leave_penalty =
        Decimal::from(early_leave_minutes) * pay_rule.early_leave_penalty_per_minute;
    let amount = late_penalty + early_leave_penalty;

    let reasoning = if amount.is_zero() {
        "No lateness or early leave penalty applies".to_string()
    } else {
        format!(
            "{} min late x {} + {} min early x {} = {}",
            late_minutes,
            pay_rule.late_penalty_per_minute.normalize(),
            early_leave_minutes,
            pay_rule.early_leave_penalty_per_minute.normalize(),
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_penalty".to_string(),
        rule_name: "Lateness and Early Leave Penalty".to_string(),
        input: serde_json::json!({
            "late_minutes": late_minutes,
            "early_leave_minutes": early_leave_minutes,
            "late_penalty_per_minute": pay_rule.late_penalty_per_minute.normalize().to_string(),
            "early_leave_penalty_per_minute": pay_rule.early_leave_penalty_per_minute.normalize().to_string()
        }),
        output: serde_json::json!({
            "late_penalty": late_penalty.normalize().to_string(),
            "early_leave_penalty": early_leave_penalty.normalize().to_string(),
            "penalty_amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    PenaltyResult {
        late_penalty,
        early_leave_penalty,
        amount,
        audit_step,
    }
}
