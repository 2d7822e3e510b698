//! Wage and penalty policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest accepted hourly wage or per-minute penalty rate (10^12).
pub const MAX_RATE: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Largest accepted overtime multiplier.
pub const MAX_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Largest accepted daily overtime threshold, in hours.
pub const MAX_DAILY_THRESHOLD_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// The overtime and penalty policy applied to a work session.
///
/// Penalty rates are currency amounts per minute.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PayRule;
/// use rust_decimal::Decimal;
///
/// let rule = PayRule {
///     daily_overtime_threshold_hours: Decimal::new(8, 0),
///     overtime_multiplier: Decimal::new(15, 1),
///     late_penalty_per_minute: Decimal::new(1000, 0),
///     early_leave_penalty_per_minute: Decimal::new(1000, 0),
/// };
/// assert_eq!(rule.overtime_multiplier.to_string(), "1.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRule {
    /// Hours per day paid at the base rate before overtime starts.
    pub daily_overtime_threshold_hours: Decimal,
    /// Multiplier applied to the hourly wage for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Penalty per minute of lateness.
    pub late_penalty_per_minute: Decimal,
    /// Penalty per minute of leaving early.
    pub early_leave_penalty_per_minute: Decimal,
}

impl PayRule {
    /// Checks that every value is non-negative and within its upper bound.
    ///
    /// The bounds keep every product the payroll formula forms well inside
    /// the range of [`Decimal`].
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            (
                "daily_overtime_threshold_hours",
                self.daily_overtime_threshold_hours,
                MAX_DAILY_THRESHOLD_HOURS,
            ),
            (
                "overtime_multiplier",
                self.overtime_multiplier,
                MAX_OVERTIME_MULTIPLIER,
            ),
            (
                "late_penalty_per_minute",
                self.late_penalty_per_minute,
                MAX_RATE,
            ),
            (
                "early_leave_penalty_per_minute",
                self.early_leave_penalty_per_minute,
                MAX_RATE,
            ),
        ];

        for (field, value, max) in fields {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidPayRule {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
            if value > max {
                return Err(EngineError::InvalidPayRule {
                    field: field.to_string(),
                    message: format!("must not exceed {}, got {}", max, value),
                });
            }
        }
        Ok(())
    }
}
