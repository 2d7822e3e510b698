//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayRule, ShiftType};

use super::types::{PayRuleConfig, PayrollConfig, PayrollMetadata, ShiftTypesConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml       # Metadata
/// ├── shift_types.yaml   # Shift templates
/// └── pay_rules/
///     └── 2025-01-01.yaml  # Rule effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_payroll::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default")?;
///
/// let morning = loader.get_shift_type("CA_1")?;
/// println!("{} runs {}-{}", morning.name, morning.start_time, morning.end_time);
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let rule = loader.get_pay_rule(date)?;
/// println!("Overtime multiplier: {}", rule.overtime_multiplier);
/// # Ok::<(), shift_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if any required file is missing, contains invalid YAML, defines
    /// the same shift type code twice, or holds a pay rule value that is
    /// negative or above its limit.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrollMetadata>(&path.join("payroll.yaml"))?;

        let shift_types_path = path.join("shift_types.yaml");
        let shift_types = Self::load_yaml::<ShiftTypesConfig>(&shift_types_path)?.shift_types;
        Self::check_unique_codes(&shift_types, &shift_types_path)?;

        let pay_rules = Self::load_pay_rules(&path.join("pay_rules"))?;

        tracing::debug!(
            code = %metadata.code,
            shift_types = shift_types.len(),
            pay_rules = pay_rules.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, shift_types, pay_rules),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_unique_codes(shift_types: &[ShiftType], path: &Path) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for st in shift_types {
            if !seen.insert(st.code.as_str()) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate shift type code '{}'", st.code),
                });
            }
        }
        Ok(())
    }

    /// Loads all pay rule files from the pay_rules directory.
    fn load_pay_rules(rules_dir: &Path) -> EngineResult<Vec<PayRuleConfig>> {
        let rules_dir_str = rules_dir.display().to_string();

        let entries = fs::read_dir(rules_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rules_dir_str.clone(),
        })?;

        let mut rules: Vec<PayRuleConfig> = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rules_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "yaml") {
                continue;
            }

            let rule = Self::load_yaml::<PayRuleConfig>(&path)?;
            rule.pay_rule().validate().map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            if rules.iter().any(|r| r.effective_date == rule.effective_date) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "another pay rule is already effective on {}",
                        rule.effective_date
                    ),
                });
            }
            rules.push(rule);
        }

        if rules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no pay rule files found)", rules_dir_str),
            });
        }

        Ok(rules)
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }

    /// Returns all shift templates sorted by code.
    pub fn shift_types(&self) -> Vec<&ShiftType> {
        let mut shift_types: Vec<&ShiftType> = self.config.shift_types().values().collect();
        shift_types.sort_by(|a, b| a.code.cmp(&b.code));
        shift_types
    }

    /// Gets a shift template by its code.
    pub fn get_shift_type(&self, code: &str) -> EngineResult<&ShiftType> {
        self.config
            .shift_types()
            .get(code)
            .ok_or_else(|| EngineError::ShiftTypeNotFound {
                code: code.to_string(),
            })
    }

    /// Gets the pay rule effective on a given date.
    ///
    /// The most recent rule whose effective date is on or before `date` wins.
    pub fn get_pay_rule(&self, date: NaiveDate) -> EngineResult<PayRule> {
        self.config
            .pay_rules()
            .iter()
            .rev()
            .find(|rc| rc.effective_date <= date)
            .map(PayRuleConfig::pay_rule)
            .ok_or(EngineError::PayRuleNotFound { date })
    }
}
