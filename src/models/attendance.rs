//! Attendance facts read from the timesheet collaborator.
//!
//! The engine only consumes *approved* facts; pending and rejected entries
//! never contribute to pay.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Approval state of an attendance or leave fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting review.
    Pending,
    /// Approved; counted by the engine.
    Approved,
    /// Rejected; never counted.
    Rejected,
}

/// A single time entry submitted through the timesheet workflow.
///
/// An entry carries either an hours value or a worked/off day flag; hourly
/// timesheets record `hours`, daily ones record `worked`. The date range is
/// inclusive on both ends.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceFact, ApprovalStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let fact = AttendanceFact {
///     user_id: "user_001".to_string(),
///     from: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     to: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     status: ApprovalStatus::Approved,
///     hours: Some(Decimal::from(8)),
///     worked: None,
/// };
/// assert!(fact.hours.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceFact {
    /// The employee this entry belongs to.
    pub user_id: String,
    /// First day covered by the entry.
    pub from: NaiveDate,
    /// Last day covered by the entry (inclusive).
    pub to: NaiveDate,
    /// Approval state; only `Approved` facts are aggregated.
    pub status: ApprovalStatus,
    /// Hours worked, for hourly timesheets.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Worked-day flag, for daily timesheets: `Some(true)` is a worked day,
    /// `Some(false)` an off day.
    #[serde(default)]
    pub worked: Option<bool>,
}

impl AttendanceFact {
    /// Whether this entry overlaps the inclusive `[from, to]` range.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.from <= to && self.to >= from
    }
}
