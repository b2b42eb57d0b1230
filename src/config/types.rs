//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

fn default_hours_per_day() -> Decimal {
    Decimal::from(8)
}

fn default_minimum_base_pay() -> Decimal {
    Decimal::from(1000)
}

fn default_pto_days() -> Decimal {
    Decimal::ONE
}

/// Payroll policy knobs loaded from `policy.yaml`.
///
/// These are the numbers the legacy system hard-coded in half a dozen
/// places: the length of a working day, the minimum acceptable base pay,
/// and the PTO allocation used when an employee has none configured.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollPolicy {
    /// Hours in a standard working day.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: Decimal,
    /// The smallest base pay accepted when creating a salary record.
    #[serde(default = "default_minimum_base_pay")]
    pub minimum_base_pay: Decimal,
    /// PTO days per month for employees without an explicit allocation.
    #[serde(default = "default_pto_days")]
    pub default_pto_days: Decimal,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            minimum_base_pay: default_minimum_base_pay(),
            default_pto_days: default_pto_days(),
        }
    }
}

/// The holiday calendar loaded from `holidays.yaml`.
///
/// A static mapping of ISO date to label, consumed by the working-day
/// calendar as a set of dates. Matching is by exact date.
///
/// # Example
///
/// ```
/// use payroll_engine::config::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let yaml = "2025-07-04: Independence Day\n2025-12-25: Christmas Day\n";
/// let calendar: HolidayCalendar = serde_yaml::from_str(yaml).unwrap();
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()));
/// assert_eq!(calendar.dates().len(), 2);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, String>,
}

impl HolidayCalendar {
    /// Builds a calendar from `(date, label)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (NaiveDate, String)>) -> Self {
        Self {
            holidays: entries.into_iter().collect(),
        }
    }

    /// Whether `date` is a listed holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// The label for a holiday date, if listed.
    pub fn label(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// The holiday dates as a set, for the working-day calendar.
    pub fn dates(&self) -> HashSet<NaiveDate> {
        self.holidays.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let policy = PayrollPolicy::default();
        assert_eq!(policy.hours_per_day, Decimal::from(8));
        assert_eq!(policy.minimum_base_pay, Decimal::from(1000));
        assert_eq!(policy.default_pto_days, Decimal::ONE);
    }

    #[test]
    fn test_policy_partial_yaml_uses_defaults() {
        let policy: PayrollPolicy = serde_yaml::from_str("minimum_base_pay: 2500\n").unwrap();
        assert_eq!(policy.minimum_base_pay, Decimal::from(2500));
        assert_eq!(policy.hours_per_day, Decimal::from(8));
    }

    #[test]
    fn test_holiday_calendar_lookup() {
        let yaml = "2025-01-01: New Year's Day\n2025-07-04: Independence Day\n";
        let calendar: HolidayCalendar = serde_yaml::from_str(yaml).unwrap();

        let independence = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert!(calendar.is_holiday(independence));
        assert_eq!(calendar.label(independence), Some("Independence Day"));

        let ordinary = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
        assert!(!calendar.is_holiday(ordinary));
        assert!(calendar.label(ordinary).is_none());
    }

    #[test]
    fn test_empty_calendar() {
        let calendar = HolidayCalendar::default();
        assert!(calendar.dates().is_empty());
        assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }
}
