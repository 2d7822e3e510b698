//! Attendance clipping.
//!
//! Clips a recorded check-in/check-out pair to the nominal shift window and
//! measures lateness and early leave against the window boundaries. Arriving
//! early or staying late earns no extra time.

use chrono::{DateTime, FixedOffset};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::shift_window::ShiftWindow;

/// Attendance measured inside the shift window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceClip {
    /// Whole minutes between shift start and a late check-in.
    pub late_minutes: i64,
    /// Whole minutes between an early check-out and shift end.
    pub early_leave_minutes: i64,
    /// Check-in clamped forward to the shift start.
    pub effective_check_in: DateTime<FixedOffset>,
    /// Check-out clamped back to the shift end.
    pub effective_check_out: DateTime<FixedOffset>,
    /// Whole minutes between the effective instants.
    pub worked_minutes: i64,
    /// Worked minutes as hours, two decimals, rounded half-up.
    pub actual_hours: Decimal,
}

/// What clipping a recorded attendance produced.
///
/// Only [`AttendanceOutcome::Clipped`] yields paid time; the other two
/// variants mean the session is paid as all zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceOutcome {
    /// Check-in or check-out was not recorded.
    Incomplete,
    /// After clamping, the effective check-out precedes the effective check-in.
    Inconsistent {
        /// Check-in after clamping.
        effective_check_in: DateTime<FixedOffset>,
        /// Check-out after clamping.
        effective_check_out: DateTime<FixedOffset>,
    },
    /// A usable attendance inside the window.
    Clipped(AttendanceClip),
}

/// Clips a check-in/check-out pair to a shift window.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::{clip_attendance, AttendanceOutcome, ShiftWindow};
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap();
/// let window = ShiftWindow {
///     start: at("2025-03-10T08:00:00+07:00"),
///     end: at("2025-03-10T16:00:00+07:00"),
/// };
///
/// let outcome = clip_attendance(
///     Some(at("2025-03-10T08:10:00+07:00")),
///     Some(at("2025-03-10T17:00:00+07:00")),
///     &window,
/// );
///
/// match outcome {
///     AttendanceOutcome::Clipped(clip) => {
///         assert_eq!(clip.late_minutes, 10);
///         assert_eq!(clip.early_leave_minutes, 0);
///         assert_eq!(clip.worked_minutes, 470);
///         assert_eq!(clip.actual_hours, Decimal::from_str("7.83").unwrap());
///     }
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// ```
pub fn clip_attendance(
    check_in: Option<DateTime<FixedOffset>>,
    check_out: Option<DateTime<FixedOffset>>,
    window: &ShiftWindow,
) -> AttendanceOutcome {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return AttendanceOutcome::Incomplete;
    };

    let late_minutes = if check_in > window.start {
        (check_in - window.start).num_minutes()
    } else {
        0
    };

    let early_leave_minutes = if check_out < window.end {
        (window.end - check_out).num_minutes()
    } else {
        0
    };

    let effective_check_in = check_in.max(window.start);
    let effective_check_out = check_out.min(window.end);

    if effective_check_out < effective_check_in {
        return AttendanceOutcome::Inconsistent {
            effective_check_in,
            effective_check_out,
        };
    }

    let worked_minutes = (effective_check_out - effective_check_in).num_minutes();

    AttendanceOutcome::Clipped(AttendanceClip {
        late_minutes,
        early_leave_minutes,
        effective_check_in,
        effective_check_out,
        worked_minutes,
        actual_hours: minutes_to_hours(worked_minutes),
    })
}

/// Converts whole minutes to hours rounded half-up to two decimals.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(minutes_to_hours(470), Decimal::from_str("7.83").unwrap());
/// assert_eq!(minutes_to_hours(45), Decimal::from_str("0.75").unwrap());
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
