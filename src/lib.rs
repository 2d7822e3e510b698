//! Shift Payroll Engine
//!
//! Turns recorded work sessions (check-in and check-out against a shift
//! template) into worked hours and pay. The core formula in [`calculation`]
//! is pure and decimal-exact; [`config`] loads shift types and
//! effective-dated pay rules from YAML, and [`api`] serves the formula over
//! HTTP with per-period totals and an audit trace.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
