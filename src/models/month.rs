//! Canonical month identifier.
//!
//! This module defines [`MonthKey`], the `YYYY-MM` identifier used to
//! address payroll months throughout the engine. Month keys order by
//! `(year, month)` and serialize as their canonical string form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// A calendar month identified as `YYYY-MM`.
///
/// `MonthKey` is the unit of payroll computation: salary records are keyed
/// by `(user, MonthKey)` and carry-forward PTO chains step one key at a
/// time. Keys are totally ordered by `(year, month)`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::MonthKey;
///
/// let march: MonthKey = "2025-03".parse().unwrap();
/// assert_eq!(march.to_string(), "2025-03");
/// assert_eq!(march.next(), "2025-04".parse().unwrap());
/// assert!(march < march.next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a month key, rejecting months outside `1..=12`.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidMonth {
                value: format!("{year:04}-{month:02}"),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the key for the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month key holds a valid year-month")
    }

    /// The last day of the month, accounting for month length and leap years.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().expect("date within range")
    }

    /// The immediately following month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The immediately preceding month.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The key `n` months after this one.
    pub fn add_months(&self, n: u32) -> Self {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) + n as i64;
        Self {
            year: (total.div_euclid(12)) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Whole months elapsed from the month containing `date` to this month.
    ///
    /// Negative when `date` lies in a later month. Counted at month
    /// granularity: the day-of-month of `date` is ignored.
    pub fn months_since(&self, date: NaiveDate) -> i64 {
        let this = self.year as i64 * 12 + self.month as i64;
        let that = date.year() as i64 * 12 + date.month() as i64;
        this - that
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidMonth {
            value: s.to_string(),
        };

        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
