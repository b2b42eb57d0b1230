//! Working-day calendar.
//!
//! This module enumerates the business days of a month: every date whose
//! weekday is Monday through Friday and which is not listed in the supplied
//! holiday set. Deterministic, no I/O.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::MonthKey;

/// The ordered business dates of one month.
///
/// Never persisted; recomputed on demand from the month and holiday set.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::working_days;
/// use std::collections::HashSet;
///
/// // March 2025 has 21 weekdays and no holidays here.
/// let set = working_days("2025-03".parse().unwrap(), &HashSet::new());
/// assert_eq!(set.count(), 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDaySet {
    dates: Vec<NaiveDate>,
}

impl WorkingDaySet {
    /// The number of business days.
    pub fn count(&self) -> u32 {
        self.dates.len() as u32
    }

    /// The business dates in calendar order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Whether `date` is a business day of this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        // dates is sorted ascending by construction
        self.dates.binary_search(&date).is_ok()
    }
}

/// Enumerates the business days of `month`, excluding weekends and every
/// date present in `holidays` (exact date match).
///
/// A month consisting entirely of weekends and holidays yields an empty
/// set, never an error.
pub fn working_days(month: MonthKey, holidays: &HashSet<NaiveDate>) -> WorkingDaySet {
    let mut dates = Vec::new();
    let mut date = month.first_day();
    while month.contains(date) {
        let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        if !is_weekend && !holidays.contains(&date) {
            dates.push(date);
        }
        date = date.succ_opt().expect("date within chrono range");
    }
    WorkingDaySet { dates }
}
