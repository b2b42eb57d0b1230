//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load the payroll policy and
//! holiday calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Minimum base pay: {}", config.policy().minimum_base_pay);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayCalendar, PayrollPolicy};
