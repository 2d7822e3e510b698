//! Recorded work sessions.
//!
//! A [`WorkLog`] is produced by the time-tracking side of the system and is
//! read-only input to the payroll formula.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A recorded attendance for one shift occurrence.
///
/// Either instant may be absent: an employee who never checked out (or a
/// no-show record) still produces a work log.
///
/// # Example
///
/// ```
/// use shift_payroll::models::WorkLog;
/// use chrono::{DateTime, NaiveDate};
///
/// let log = WorkLog {
///     id: "log_001".to_string(),
///     shift_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     shift_type: "CA_1".to_string(),
///     check_in: Some(DateTime::parse_from_rfc3339("2025-03-10T08:10:00+07:00").unwrap()),
///     check_out: None,
/// };
/// assert!(!log.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLog {
    /// Unique identifier for the work log.
    pub id: String,
    /// The calendar date the shift is scheduled on.
    pub shift_date: NaiveDate,
    /// Code of the shift type worked.
    pub shift_type: String,
    /// When the employee checked in.
    #[serde(default)]
    pub check_in: Option<DateTime<FixedOffset>>,
    /// When the employee checked out.
    #[serde(default)]
    pub check_out: Option<DateTime<FixedOffset>>,
}

impl WorkLog {
    /// Returns true if both check-in and check-out were recorded.
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }
}
