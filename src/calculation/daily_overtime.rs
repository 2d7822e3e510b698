//! Daily overtime detection functionality.
//!
//! This module splits a session's actual hours into base hours (up to the
//! pay rule's daily threshold) and overtime hours (anything beyond it).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The result of detecting daily overtime for a session.
///
/// Contains the split between base hours and overtime hours,
/// along with the audit step documenting the detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertimeDetection {
    /// The number of base hours (up to the threshold).
    pub base_hours: Decimal,
    /// The number of overtime hours (hours exceeding the threshold).
    pub overtime_hours: Decimal,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Detects whether actual hours exceed the daily overtime threshold.
///
/// Overtime starts only when hours are strictly greater than the threshold.
///
/// # Examples
///
/// ## Session at threshold (no overtime)
///
/// ```
/// use shift_payroll::calculation::detect_daily_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let actual = Decimal::from_str("8.0").unwrap();
/// let result = detect_daily_overtime(actual, Decimal::new(8, 0), 1);
///
/// assert_eq!(result.base_hours, Decimal::from_str("8.0").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// ```
///
/// ## Session exceeding threshold
///
/// ```
/// use shift_payroll::calculation::detect_daily_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let actual = Decimal::from_str("10.5").unwrap();
/// let result = detect_daily_overtime(actual, Decimal::new(8, 0), 1);
///
/// assert_eq!(result.base_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::from_str("2.5").unwrap());
/// ```
pub fn detect_daily_overtime(
    actual_hours: Decimal,
    threshold: Decimal,
    step_number: u32,
) -> DailyOvertimeDetection {
    let (base_hours, overtime_hours) = if actual_hours > threshold {
        (threshold, actual_hours - threshold)
    } else {
        (actual_hours, Decimal::ZERO)
    };

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds {} hour threshold by {} hours, triggering overtime",
            actual_hours.normalize(),
            threshold.normalize(),
            overtime_hours.normalize()
        )
    } else if actual_hours == threshold {
        format!(
            "{} hours worked equals {} hour threshold, no overtime triggered",
            actual_hours.normalize(),
            threshold.normalize()
        )
    } else {
        format!(
            "{} hours worked is under {} hour threshold, no overtime triggered",
            actual_hours.normalize(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_overtime_detection".to_string(),
        rule_name: "Daily Overtime Detection".to_string(),
        input: serde_json::json!({
            "actual_hours": actual_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_hours": base_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    DailyOvertimeDetection {
        base_hours,
        overtime_hours,
        audit_step,
    }
}
