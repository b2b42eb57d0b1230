//! Unpaid-leave and carry-forward PTO accounting.
//!
//! This module computes how many approved leave days exceed an employee's
//! allowed PTO for a month, and how much unused PTO carries forward from
//! the previous month's stored outcome.
//!
//! Carry-forward creates a sequential dependency between months: month
//! `m`'s allowed PTO depends on month `m-1`'s persisted record. The prior
//! record is reached through the [`PriorPeriodLookup`] trait so that
//! projection mode can supply synthetic no-history state instead of
//! reaching into live storage.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{ApprovalStatus, MonthKey, SalaryRecord};
use crate::providers::LeaveProvider;

/// Access to the persisted salary record of an earlier month.
pub trait PriorPeriodLookup {
    /// The stored record for `(user_id, month)`, if one exists.
    fn record_for(&self, user_id: &str, month: MonthKey) -> EngineResult<Option<SalaryRecord>>;
}

/// A lookup with no history: every month resolves to no prior record.
///
/// Used by projection mode, where forecasts must not read live storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl PriorPeriodLookup for NoHistory {
    fn record_for(&self, _user_id: &str, _month: MonthKey) -> EngineResult<Option<SalaryRecord>> {
        Ok(None)
    }
}

/// Allowed PTO for a month: the base allocation plus carry-forward.
pub fn allowed_pto(base: Decimal, carry_forward: Decimal) -> Decimal {
    base + carry_forward
}

/// Computes unpaid leave and carry-forward PTO from injected reads.
pub struct LeaveLedger<'a> {
    leaves: &'a dyn LeaveProvider,
    prior: &'a dyn PriorPeriodLookup,
}

impl<'a> LeaveLedger<'a> {
    /// Creates a ledger reading leaves from `leaves` and prior-month
    /// records from `prior`.
    pub fn new(leaves: &'a dyn LeaveProvider, prior: &'a dyn PriorPeriodLookup) -> Self {
        Self { leaves, prior }
    }

    /// Total approved leave days falling within `month`.
    ///
    /// Each approved leave overlapping the month is clipped to the month's
    /// boundaries and counted inclusively (`to - from + 1` days).
    pub fn leave_days(&self, user_id: &str, month: MonthKey) -> EngineResult<Decimal> {
        let start = month.first_day();
        let end = month.last_day();
        let leaves = self
            .leaves
            .query(user_id, ApprovalStatus::Approved, start, end)?;

        let mut total = Decimal::ZERO;
        for leave in &leaves {
            let from = leave.from.max(start);
            let to = leave.to.min(end);
            if to >= from {
                total += Decimal::from((to - from).num_days() + 1);
            }
        }
        Ok(total)
    }

    /// Leave days beyond `allowed_pto`: `max(0, leave_days - allowed_pto)`.
    pub fn unpaid_leave_days(
        &self,
        user_id: &str,
        month: MonthKey,
        allowed_pto: Decimal,
    ) -> EngineResult<Decimal> {
        let total = self.leave_days(user_id, month)?;
        Ok((total - allowed_pto).max(Decimal::ZERO))
    }

    /// Unused PTO carried into `month` from the previous month's record:
    /// `max(0, prior.allowed_pto - prior.off_days)`, or zero when no prior
    /// record exists.
    ///
    /// A missing prior month is not an error; callers needing correctness
    /// across a full employment history must compute months in
    /// non-decreasing order.
    pub fn carry_forward_pto(&self, user_id: &str, month: MonthKey) -> EngineResult<Decimal> {
        match self.prior.record_for(user_id, month.prev())? {
            Some(record) => Ok((record.allowed_pto - record.off_days).max(Decimal::ZERO)),
            None => Ok(Decimal::ZERO),
        }
    }
}
