//! Error types for the Payroll Compensation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.
//!
//! Division by zero is deliberately absent from this taxonomy: a month with
//! zero expected hours resolves to an hourly rate of zero as a documented
//! computation policy, never an error.

use thiserror::Error;

use crate::models::MonthKey;

/// The main error type for the Payroll Compensation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth {
///     value: "2025/03".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid month '2025/03': expected YYYY-MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A month identifier did not match the canonical `YYYY-MM` form.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected month string.
        value: String,
    },

    /// A required input field was missing or failed validation.
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {user_id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        user_id: String,
    },

    /// No salary record exists with the given id.
    #[error("Salary record not found: {id}")]
    RecordNotFound {
        /// The record id that was not found.
        id: String,
    },

    /// A salary record already exists for the `(user, month)` pair.
    #[error("Salary record already exists for user '{user_id}' in {month}")]
    DuplicateRecord {
        /// The employee id.
        user_id: String,
        /// The month that already has a record.
        month: MonthKey,
    },

    /// An opaque failure from the salary record store, surfaced unchanged.
    #[error("Persistence error: {message}")]
    Persistence {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_invalid_month_displays_value() {
        let error = EngineError::InvalidMonth {
            value: "March".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid month 'March': expected YYYY-MM");
    }

    #[test]
    fn test_validation_displays_field_and_message() {
        let error = EngineError::Validation {
            field: "annual_salary".to_string(),
            message: "required for fixed-salary pay".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validation failed for 'annual_salary': required for fixed-salary pay"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            user_id: "user_042".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: user_042");
    }

    #[test]
    fn test_duplicate_record_displays_user_and_month() {
        let error = EngineError::DuplicateRecord {
            user_id: "user_042".to_string(),
            month: MonthKey::new(2025, 5).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Salary record already exists for user 'user_042' in 2025-05"
        );
    }

    #[test]
    fn test_persistence_displays_message() {
        let error = EngineError::Persistence {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Persistence error: connection reset");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                user_id: "user_001".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
