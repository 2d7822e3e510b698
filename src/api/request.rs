//! Request types for the Shift Payroll Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayPeriod, PayRule, WorkLog};

/// Request body for the `/calculate` endpoint.
///
/// Contains everything needed to pay one employee's work sessions within a
/// pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee being paid.
    pub employee: EmployeeRequest,
    /// The pay period for the run.
    pub pay_period: PayPeriodRequest,
    /// Rule to apply to every session instead of the configured ones.
    #[serde(default)]
    pub pay_rule: Option<PayRuleRequest>,
    /// The recorded work sessions.
    #[serde(default)]
    pub work_logs: Vec<WorkLogRequest>,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The branch the employee belongs to.
    #[serde(default)]
    pub branch_id: Option<String>,
    /// Hourly wage in the payroll currency.
    pub hourly_wage: Decimal,
}

/// Pay period information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// Pay rule override in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRuleRequest {
    /// Hours per day before overtime starts.
    pub daily_overtime_threshold_hours: Decimal,
    /// Overtime pay multiplier.
    pub overtime_multiplier: Decimal,
    /// Penalty per minute late.
    pub late_penalty_per_minute: Decimal,
    /// Penalty per minute of early leave.
    pub early_leave_penalty_per_minute: Decimal,
}

/// Work log information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogRequest {
    /// Unique identifier for the work log.
    pub id: String,
    /// The date the shift is scheduled on.
    pub shift_date: NaiveDate,
    /// Code of the shift type worked.
    pub shift_type: String,
    /// Check-in instant with offset.
    #[serde(default)]
    pub check_in: Option<DateTime<FixedOffset>>,
    /// Check-out instant with offset.
    #[serde(default)]
    pub check_out: Option<DateTime<FixedOffset>>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            branch_id: req.branch_id,
            hourly_wage: req.hourly_wage,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl TryFrom<PayRuleRequest> for PayRule {
    type Error = EngineError;

    fn try_from(req: PayRuleRequest) -> EngineResult<Self> {
        let rule = PayRule {
            daily_overtime_threshold_hours: req.daily_overtime_threshold_hours,
            overtime_multiplier: req.overtime_multiplier,
            late_penalty_per_minute: req.late_penalty_per_minute,
            early_leave_penalty_per_minute: req.early_leave_penalty_per_minute,
        };
        rule.validate()?;
        Ok(rule)
    }
}

impl From<WorkLogRequest> for WorkLog {
    fn from(req: WorkLogRequest) -> Self {
        WorkLog {
            id: req.id,
            shift_date: req.shift_date,
            shift_type: req.shift_type,
            check_in: req.check_in,
            check_out: req.check_out,
        }
    }
}
