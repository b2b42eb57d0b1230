//! Payroll Compensation Engine for a recruitment-agency back office.
//!
//! This crate computes what an employee is owed for a calendar month, given
//! their pay configuration, the working-day calendar, approved attendance,
//! unpaid leave, carried-over PTO, and bonus eligibility. It can also run
//! the same logic forward to produce multi-month projections.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod service;
pub mod store;
