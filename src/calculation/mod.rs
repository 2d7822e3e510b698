//! Calculation logic for the Shift Payroll Engine.
//!
//! This module contains the payroll formula and its stages: shift window
//! resolution (including overnight shifts), attendance clipping with
//! lateness and early-leave measurement, daily overtime detection, and
//! per-minute penalties.

mod attendance;
mod daily_overtime;
mod pay_formula;
mod penalty;
mod shift_window;

pub use attendance::{AttendanceClip, AttendanceOutcome, clip_attendance, minutes_to_hours};
pub use daily_overtime::{DailyOvertimeDetection, detect_daily_overtime};
pub use pay_formula::{
    AttendanceStatus, SessionPayCalculation, calculate_pay, calculate_session_pay,
};
pub use penalty::{PenaltyResult, calculate_penalty};
pub use shift_window::{ShiftWindow, resolve_shift_window};
