//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! policy and holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{HolidayCalendar, PayrollPolicy};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the payroll policy and the holiday calendar.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── policy.yaml    # hours per day, minimum base pay, default PTO
/// └── holidays.yaml  # ISO date -> holiday label
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Hours per day: {}", config.policy().hours_per_day);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PayrollPolicy,
    holidays: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if a file is missing and
    /// [`EngineError::ConfigParseError`] if a file is not valid YAML.
    pub fn load(dir: impl AsRef<Path>) -> EngineResult<Self> {
        let dir = dir.as_ref();
        let policy = Self::read_yaml(&dir.join("policy.yaml"))?;
        let holidays = Self::read_yaml(&dir.join("holidays.yaml"))?;
        Ok(Self { policy, holidays })
    }

    /// Builds a loader from in-memory parts, for callers that do not read
    /// configuration from disk.
    pub fn from_parts(policy: PayrollPolicy, holidays: HolidayCalendar) -> Self {
        Self { policy, holidays }
    }

    /// The payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// The holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
