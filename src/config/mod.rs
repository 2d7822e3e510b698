//! Configuration loading and management for the Shift Payroll Engine.
//!
//! This module loads the payroll configuration from YAML files: metadata,
//! shift type templates, and effective-dated pay rules.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded payroll config: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayRuleConfig, PayrollConfig, PayrollMetadata, ShiftTypesConfig};
