//! Shift type templates.
//!
//! A [`ShiftType`] is a named template with nominal clock-time boundaries.
//! Templates come from configuration and are never mutated at runtime.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named shift template, e.g. the morning shift `CA_1` running 08:00–16:00.
///
/// When `end_time` is earlier than or equal to `start_time` the shift spans
/// midnight and ends on the calendar day after the shift date.
///
/// # Example
///
/// ```
/// use shift_payroll::models::ShiftType;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let evening = ShiftType {
///     code: "CA_2".to_string(),
///     name: "Evening".to_string(),
///     start_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
///     standard_hours: Decimal::new(8, 0),
/// };
/// assert!(evening.crosses_midnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftType {
    /// Unique code of the template (e.g., "CA_1").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Nominal start clock time.
    pub start_time: NaiveTime,
    /// Nominal end clock time.
    pub end_time: NaiveTime,
    /// Nominal duration in hours.
    pub standard_hours: Decimal,
}

impl ShiftType {
    /// Returns true if the shift ends on the day after it starts.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }
}
