//! Leave facts read from the PTO-request collaborator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ApprovalStatus;

/// An approved-or-pending leave interval requested by an employee.
///
/// The interval is inclusive on both ends: a single-day leave has
/// `from == to` and counts as one day.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{LeaveFact, ApprovalStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveFact {
///     user_id: "user_001".to_string(),
///     from: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     to: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
///     status: ApprovalStatus::Approved,
/// };
/// assert_eq!((leave.to - leave.from).num_days() + 1, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveFact {
    /// The employee who requested the leave.
    pub user_id: String,
    /// First day of leave.
    pub from: NaiveDate,
    /// Last day of leave (inclusive).
    pub to: NaiveDate,
    /// Approval state; only `Approved` leave counts against PTO.
    pub status: ApprovalStatus,
}

impl LeaveFact {
    /// Whether this leave overlaps the inclusive `[from, to]` range.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.from <= to && self.to >= from
    }
}
