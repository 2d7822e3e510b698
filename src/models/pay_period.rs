//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that bounds a payroll run.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Calendar years a pay period may cover.
///
/// Every shift window and check-in offset inside this range stays well
/// within the dates `chrono` can represent.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=9999;

/// Represents a pay period with its inclusive date range.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// };
///
/// assert!(pay_period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()));
/// assert!(pay_period.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 16).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks that the period is not inverted and lies within
    /// [`SUPPORTED_YEARS`].
    pub fn validate(&self) -> EngineResult<()> {
        for date in [self.start_date, self.end_date] {
            if !SUPPORTED_YEARS.contains(&date.year()) {
                return Err(EngineError::InvalidPayPeriod {
                    message: format!(
                        "date {} is outside the supported years {} to {}",
                        date,
                        SUPPORTED_YEARS.start(),
                        SUPPORTED_YEARS.end()
                    ),
                });
            }
        }
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPayPeriod {
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}
