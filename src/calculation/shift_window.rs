//! Shift window resolution.
//!
//! Turns a shift date and a [`ShiftType`]'s nominal clock times into the
//! absolute instants the shift occupies. Shifts whose end clock time is not
//! after their start clock time end on the following calendar day.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::ShiftType;

/// The absolute `[start, end)` instants of one shift occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// When the shift nominally starts.
    pub start: DateTime<FixedOffset>,
    /// When the shift nominally ends.
    pub end: DateTime<FixedOffset>,
}

impl ShiftWindow {
    /// Returns the nominal length of the window in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Resolves the absolute window of a shift occurrence.
///
/// Both instants carry `offset`, which callers take from the recorded
/// check-in. No timezone conversion is performed.
///
/// Defined for every shift date in [`SUPPORTED_YEARS`], which
/// [`PayPeriod::validate`] enforces for payroll runs.
///
/// [`SUPPORTED_YEARS`]: crate::models::SUPPORTED_YEARS
/// [`PayPeriod::validate`]: crate::models::PayPeriod::validate
///
/// # Examples
///
/// ## Day shift
///
/// ```
/// use shift_payroll::calculation::resolve_shift_window;
/// use shift_payroll::models::ShiftType;
/// use chrono::{FixedOffset, NaiveDate, NaiveTime, Timelike};
/// use rust_decimal::Decimal;
///
/// let morning = ShiftType {
///     code: "CA_1".to_string(),
///     name: "Morning".to_string(),
///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
///     standard_hours: Decimal::new(8, 0),
/// };
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let offset = FixedOffset::east_opt(7 * 3600).unwrap();
///
/// let window = resolve_shift_window(date, offset, &morning);
/// assert_eq!(window.start.date_naive(), date);
/// assert_eq!(window.end.hour(), 16);
/// assert_eq!(window.duration_minutes(), 480);
/// ```
///
/// ## Overnight shift
///
/// ```
/// use shift_payroll::calculation::resolve_shift_window;
/// use shift_payroll::models::ShiftType;
/// use chrono::{FixedOffset, NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let evening = ShiftType {
///     code: "CA_2".to_string(),
///     name: "Evening".to_string(),
///     start_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
///     standard_hours: Decimal::new(8, 0),
/// };
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let offset = FixedOffset::east_opt(7 * 3600).unwrap();
///
/// let window = resolve_shift_window(date, offset, &evening);
/// assert_eq!(window.end.date_naive(), NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());
/// ```
pub fn resolve_shift_window(
    shift_date: NaiveDate,
    offset: FixedOffset,
    shift_type: &ShiftType,
) -> ShiftWindow {
    let end_date = if shift_type.crosses_midnight() {
        shift_date + Duration::days(1)
    } else {
        shift_date
    };

    ShiftWindow {
        start: at_offset(shift_date, shift_type.start_time, offset),
        end: at_offset(end_date, shift_type.end_time, offset),
    }
}

/// Attaches `offset` to a local wall-clock time.
///
/// Fixed offsets have no gaps or folds, so the mapping is always unique.
fn at_offset(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let local = NaiveDateTime::new(date, time);
    let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}
