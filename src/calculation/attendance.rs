//! Attendance aggregation.
//!
//! This module sums approved attendance facts for a user over one month:
//! total worked hours, worked/off day counts, and the week-of-month hours
//! breakdown used for reporting. Pure aggregation over a point-in-time
//! read; no side effects.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{ApprovalStatus, AttendanceFact, MonthKey};
use crate::providers::AttendanceProvider;

/// The aggregated attendance of one user for one month.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttendanceSummary {
    /// Total approved worked hours.
    pub worked_hours: Decimal,
    /// Total approved worked days.
    pub worked_days: Decimal,
    /// Total approved off days.
    pub off_days: Decimal,
    /// Approved hours bucketed by week of month, in week order.
    /// Bucket keys have the form `YYYY-Ww`, derived from each fact's
    /// start date (`ceil(day_of_month / 7)`).
    pub weekly_hours: Vec<(String, Decimal)>,
}

/// Aggregates approved attendance facts read from an injected provider.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::AttendanceAggregator;
/// use payroll_engine::providers::MemoryAttendanceProvider;
/// use rust_decimal::Decimal;
///
/// let provider = MemoryAttendanceProvider::default();
/// let aggregator = AttendanceAggregator::new(&provider, Decimal::from(8));
/// let summary = aggregator.aggregate("user_001", "2025-03".parse().unwrap()).unwrap();
/// assert_eq!(summary.worked_hours, Decimal::ZERO);
/// ```
pub struct AttendanceAggregator<'a> {
    provider: &'a dyn AttendanceProvider,
    hours_per_day: Decimal,
}

impl<'a> AttendanceAggregator<'a> {
    /// Creates an aggregator over `provider`, converting day-flag facts to
    /// hours at `hours_per_day`.
    pub fn new(provider: &'a dyn AttendanceProvider, hours_per_day: Decimal) -> Self {
        Self {
            provider,
            hours_per_day,
        }
    }

    /// Aggregates all approved facts overlapping `month` in one read.
    pub fn aggregate(&self, user_id: &str, month: MonthKey) -> EngineResult<AttendanceSummary> {
        let start = month.first_day();
        let end = month.last_day();
        let facts = self
            .provider
            .query(user_id, start, end, ApprovalStatus::Approved)?;

        let mut summary = AttendanceSummary::default();
        let mut weekly: BTreeMap<String, Decimal> = BTreeMap::new();

        for fact in &facts {
            let days = clipped_days(fact, month);
            let hours = match (fact.hours, fact.worked) {
                (Some(hours), _) => hours,
                (None, Some(true)) => days * self.hours_per_day,
                _ => Decimal::ZERO,
            };

            if fact.worked == Some(false) {
                summary.off_days += days;
                continue;
            }

            summary.worked_hours += hours;
            summary.worked_days += days;
            if hours > Decimal::ZERO {
                *weekly.entry(week_bucket(fact)).or_default() += hours;
            }
        }

        summary.weekly_hours = weekly.into_iter().collect();
        Ok(summary)
    }

    /// Total approved worked hours in `month`.
    pub fn worked_hours(&self, user_id: &str, month: MonthKey) -> EngineResult<Decimal> {
        Ok(self.aggregate(user_id, month)?.worked_hours)
    }

    /// Total approved worked days in `month`.
    pub fn worked_days(&self, user_id: &str, month: MonthKey) -> EngineResult<Decimal> {
        Ok(self.aggregate(user_id, month)?.worked_days)
    }

    /// Total approved off days in `month`.
    pub fn off_days(&self, user_id: &str, month: MonthKey) -> EngineResult<Decimal> {
        Ok(self.aggregate(user_id, month)?.off_days)
    }
}

/// Inclusive day count of a fact's range clipped to the month.
fn clipped_days(fact: &AttendanceFact, month: MonthKey) -> Decimal {
    let from = fact.from.max(month.first_day());
    let to = fact.to.min(month.last_day());
    if to < from {
        return Decimal::ZERO;
    }
    Decimal::from((to - from).num_days() + 1)
}

/// Week-of-month bucket key from the fact's start date.
fn week_bucket(fact: &AttendanceFact) -> String {
    let week = (fact.from.day() + 6) / 7;
    format!("{}-W{}", fact.from.year(), week)
}
