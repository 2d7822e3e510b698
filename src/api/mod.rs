//! HTTP API module for the Shift Payroll Engine.
//!
//! Exposes `POST /calculate`, which pays an employee's work sessions over a
//! pay period, and `GET /shift-types`, which lists the configured shift
//! templates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{create_router, perform_payroll_run};
pub use request::{
    EmployeeRequest, PayPeriodRequest, PayRuleRequest, PayrollRequest, WorkLogRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
