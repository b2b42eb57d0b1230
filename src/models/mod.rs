//! Core data models for the Payroll Compensation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod month;
mod salary_record;

pub use attendance::{ApprovalStatus, AttendanceFact};
pub use employee::{BonusConfig, BonusType, Employee, EmployeeRole, PayConfig, PayOverride};
pub use leave::LeaveFact;
pub use month::MonthKey;
pub use salary_record::{CompensationResult, MonthProjection, SalaryRecord, WeeklyHours};
