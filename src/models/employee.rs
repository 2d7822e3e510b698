//! Employee model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::MAX_RATE;

/// An employee whose sessions are being paid.
///
/// Only the fields the payroll run needs are carried here; the rest of the
/// employee record lives with the user-management side of the system.
///
/// # Example
///
/// ```
/// use shift_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     branch_id: Some("branch_hcm_01".to_string()),
///     hourly_wage: Decimal::new(20000, 0),
/// };
/// assert!(employee.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The branch the employee belongs to, if known.
    #[serde(default)]
    pub branch_id: Option<String>,
    /// Hourly wage in the payroll currency.
    pub hourly_wage: Decimal,
}

impl Employee {
    /// Checks that the employee record can be used for a payroll run.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.hourly_wage < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_wage".to_string(),
                message: format!("must not be negative, got {}", self.hourly_wage),
            });
        }
        if self.hourly_wage > MAX_RATE {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_wage".to_string(),
                message: format!("must not exceed {}, got {}", MAX_RATE, self.hourly_wage),
            });
        }
        Ok(())
    }
}
