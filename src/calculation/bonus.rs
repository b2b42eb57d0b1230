//! Bonus applicability.
//!
//! This module decides whether, and how much, bonus applies for a given
//! month. All comparisons happen at month granularity: the day-of-month of
//! the configured start and end dates is ignored. The amount is returned
//! unmodified; bonuses are never prorated by days worked.

use rust_decimal::Decimal;

use crate::models::{BonusConfig, BonusType, MonthKey};

/// The bonus amount applicable in `month`, or zero.
///
/// - A one-time bonus applies only in the month of its start date.
/// - A recurring bonus applies in every month from the start month through
///   the end month inclusive; a missing end date makes it open-ended.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::applicable_bonus;
/// use payroll_engine::models::{BonusConfig, BonusType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let bonus = BonusConfig {
///     amount: Decimal::from(500),
///     bonus_type: BonusType::OneTime,
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
///     end_date: None,
/// };
/// assert_eq!(
///     applicable_bonus(Some(&bonus), "2025-03".parse().unwrap()),
///     Decimal::from(500)
/// );
/// assert_eq!(
///     applicable_bonus(Some(&bonus), "2025-04".parse().unwrap()),
///     Decimal::ZERO
/// );
/// ```
pub fn applicable_bonus(config: Option<&BonusConfig>, month: MonthKey) -> Decimal {
    let Some(config) = config else {
        return Decimal::ZERO;
    };

    let start = MonthKey::from_date(config.start_date);
    let applies = match config.bonus_type {
        BonusType::OneTime => month == start,
        BonusType::Recurring => {
            let after_start = month >= start;
            let before_end = match config.end_date {
                Some(end) => month <= MonthKey::from_date(end),
                None => true,
            };
            after_start && before_end
        }
    };

    if applies { config.amount } else { Decimal::ZERO }
}
