//! Salary record persistence.
//!
//! The engine owns `SalaryRecord` exclusively: records are created through
//! an explicit add operation, mutated only through explicit updates, and
//! never silently overwritten by a later computation for the same month.
//!
//! The `(user, month)` uniqueness invariant is enforced *inside* the
//! store, where the occupancy check and the insert happen atomically: an
//! application-level check-then-insert is a read-then-write race under
//! concurrent requests.

mod memory;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{MonthKey, SalaryRecord};

pub use memory::MemorySalaryStore;

/// Filter for listing salary records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryFilter {
    /// Restrict to one employee.
    pub user_id: Option<String>,
    /// Restrict to one month.
    pub month: Option<MonthKey>,
}

impl SalaryFilter {
    /// Matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the filter to `user_id`.
    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Restricts the filter to `month`.
    pub fn for_month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    /// Whether `record` satisfies this filter.
    pub fn matches(&self, record: &SalaryRecord) -> bool {
        self.user_id.as_deref().is_none_or(|u| record.user_id == u)
            && self.month.is_none_or(|m| record.month == m)
    }
}

/// A partial update to an existing salary record.
///
/// Absent fields are left unchanged. When `base_pay` or `bonus` changes,
/// the stored `final_amount` is recomputed as
/// `base_pay + bonus - pto_deduction` so the record stays reconcilable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryPatch {
    /// New gross base pay.
    pub base_pay: Option<Decimal>,
    /// New bonus amount.
    pub bonus: Option<Decimal>,
    /// New currency code.
    pub currency: Option<String>,
    /// New remarks.
    pub remarks: Option<String>,
}

/// Storage for salary records, keyed by `(user, month)`.
pub trait SalaryStore {
    /// Lists the records matching `filter`, ordered by user then month.
    fn find(&self, filter: &SalaryFilter) -> EngineResult<Vec<SalaryRecord>>;

    /// The record for `(user_id, month)`, if one exists.
    fn find_one(&self, user_id: &str, month: MonthKey) -> EngineResult<Option<SalaryRecord>>;

    /// Inserts a new record.
    ///
    /// Fails with [`crate::error::EngineError::DuplicateRecord`] when a
    /// record already exists for the same `(user, month)`; the existing
    /// record is left untouched.
    fn create(&self, record: SalaryRecord) -> EngineResult<SalaryRecord>;

    /// Applies `patch` to the record with the given id.
    fn update(&self, id: Uuid, patch: &SalaryPatch) -> EngineResult<SalaryRecord>;

    /// Deletes the record with the given id.
    fn delete(&self, id: Uuid) -> EngineResult<()>;
}
