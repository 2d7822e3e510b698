//! Core data models for the Shift Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_period;
mod pay_result;
mod pay_rule;
mod shift_type;
mod work_log;

pub use employee::Employee;
pub use pay_period::{PayPeriod, SUPPORTED_YEARS};
pub use pay_result::{
    AuditStep, AuditTrace, AuditWarning, PayResult, PayrollRunResult, PayrollTotals, SessionPay,
};
pub use pay_rule::{MAX_DAILY_THRESHOLD_HOURS, MAX_OVERTIME_MULTIPLIER, MAX_RATE, PayRule};
pub use shift_type::ShiftType;
pub use work_log::WorkLog;
