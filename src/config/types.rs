//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{PayRule, ShiftType};

/// Metadata about the payroll configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollMetadata {
    /// Short code identifying the configuration (e.g., "default").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version of the configuration.
    pub version: String,
    /// ISO currency code that wages and penalties are expressed in.
    pub currency: String,
}

/// Shift types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftTypesConfig {
    /// All shift templates.
    pub shift_types: Vec<ShiftType>,
}

/// An effective-dated pay rule from a file under `pay_rules/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRuleConfig {
    /// Short code of the rule.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// The first date this rule applies to.
    pub effective_date: NaiveDate,
    /// Hours per day before overtime starts.
    pub daily_overtime_threshold_hours: Decimal,
    /// Overtime pay multiplier.
    pub overtime_multiplier: Decimal,
    /// Penalty per minute late.
    pub late_penalty_per_minute: Decimal,
    /// Penalty per minute of early leave.
    pub early_leave_penalty_per_minute: Decimal,
}

impl PayRuleConfig {
    /// Returns the rule values the payroll formula consumes.
    pub fn pay_rule(&self) -> PayRule {
        PayRule {
            daily_overtime_threshold_hours: self.daily_overtime_threshold_hours,
            overtime_multiplier: self.overtime_multiplier,
            late_penalty_per_minute: self.late_penalty_per_minute,
            early_leave_penalty_per_minute: self.early_leave_penalty_per_minute,
        }
    }
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Configuration metadata.
    metadata: PayrollMetadata,
    /// Shift templates keyed by code.
    shift_types: HashMap<String, ShiftType>,
    /// Pay rules by effective date (sorted oldest first).
    pay_rules: Vec<PayRuleConfig>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: PayrollMetadata,
        shift_types: Vec<ShiftType>,
        pay_rules: Vec<PayRuleConfig>,
    ) -> Self {
        let mut sorted_rules = pay_rules;
        sorted_rules.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            shift_types: shift_types
                .into_iter()
                .map(|st| (st.code.clone(), st))
                .collect(),
            pay_rules: sorted_rules,
        }
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns all shift templates keyed by code.
    pub fn shift_types(&self) -> &HashMap<String, ShiftType> {
        &self.shift_types
    }

    /// Returns all pay rules, oldest first.
    pub fn pay_rules(&self) -> &[PayRuleConfig] {
        &self.pay_rules
    }
}
