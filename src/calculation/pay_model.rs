//! Pay-model dispatch.
//!
//! The legacy system decided how to pay someone with string role checks
//! duplicated across files. Here the decision is made exactly once per
//! computation: [`PayModel::resolve`] turns an employee and a target month
//! into a tagged variant, and everything downstream matches on the variant.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeRole, MonthKey, PayConfig};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// How gross pay is derived for one employee in one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayModel {
    /// A fixed monthly salary; the hourly rate is derived from expected hours.
    FixedSalary {
        /// Gross monthly salary.
        monthly: Decimal,
    },
    /// A fixed hourly rate paid per hour worked.
    HourlyFixed {
        /// The hourly rate.
        rate: Decimal,
    },
    /// A candidate's share of the hourly vendor bill rate.
    PercentageOfBillRate {
        /// The hourly rate billed to the vendor.
        bill_rate: Decimal,
        /// The candidate's share, in percent.
        share: Decimal,
    },
}

impl PayModel {
    /// Resolves the pay model for `employee` in `month`.
    ///
    /// Recruiters use an explicit hourly rate when configured, otherwise a
    /// fixed salary from the monthly or annual figure. Candidates start on
    /// a fixed salary and move to percentage-of-bill-rate once their
    /// transition trigger fires: either `percentage_pay_after_months`
    /// whole months after joining, or from `pay_cycle_change_month`
    /// onward. A candidate with neither trigger configured stays on fixed
    /// salary indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] when the fields the resolved
    /// variant needs are missing.
    pub fn resolve(employee: &Employee, month: MonthKey) -> EngineResult<PayModel> {
        let pay = &employee.pay;
        match employee.role {
            EmployeeRole::Recruiter => {
                if let Some(rate) = pay.hourly_rate {
                    return Ok(PayModel::HourlyFixed { rate });
                }
                Self::fixed_salary(pay, "recruiter")
            }
            EmployeeRole::Candidate => {
                if Self::has_transitioned(pay, month) {
                    let bill_rate = pay.vendor_bill_rate.ok_or_else(|| missing(
                        "vendor_bill_rate",
                        "required for a transitioned candidate",
                    ))?;
                    let share = pay.candidate_share.ok_or_else(|| missing(
                        "candidate_share",
                        "required for a transitioned candidate",
                    ))?;
                    Ok(PayModel::PercentageOfBillRate { bill_rate, share })
                } else {
                    Self::fixed_salary(pay, "candidate")
                }
            }
        }
    }

    fn fixed_salary(pay: &PayConfig, role: &str) -> EngineResult<PayModel> {
        if let Some(monthly) = pay.monthly_salary {
            return Ok(PayModel::FixedSalary { monthly });
        }
        if let Some(annual) = pay.annual_salary {
            return Ok(PayModel::FixedSalary {
                monthly: annual / MONTHS_PER_YEAR,
            });
        }
        Err(missing(
            "annual_salary",
            &format!("a fixed-salary {role} needs annual_salary or monthly_salary"),
        ))
    }

    fn has_transitioned(pay: &PayConfig, month: MonthKey) -> bool {
        if let Some(after_months) = pay.percentage_pay_after_months {
            return month.months_since(pay.joining_date) >= after_months as i64;
        }
        if let Some(change_month) = pay.pay_cycle_change_month {
            return month >= change_month;
        }
        false
    }

    /// The hourly rate under this model, given the month's expected hours.
    ///
    /// Zero expected hours resolve to a rate of zero for fixed salaries,
    /// which is the documented division-by-zero policy. Never an error.
    pub fn hourly_rate(&self, expected_hours: Decimal) -> Decimal {
        match self {
            PayModel::FixedSalary { monthly } => {
                if expected_hours > Decimal::ZERO {
                    monthly / expected_hours
                } else {
                    Decimal::ZERO
                }
            }
            PayModel::HourlyFixed { rate } => *rate,
            PayModel::PercentageOfBillRate { bill_rate, share } => {
                *bill_rate * (*share / PERCENT)
            }
        }
    }

    /// Gross base pay under this model before deductions and bonus.
    pub fn base_pay(
        &self,
        expected_hours: Decimal,
        worked_hours: Decimal,
        hourly_rate: Decimal,
    ) -> Decimal {
        match self {
            PayModel::FixedSalary { monthly } => *monthly,
            PayModel::HourlyFixed { rate } => *rate * expected_hours,
            PayModel::PercentageOfBillRate { .. } => worked_hours * hourly_rate,
        }
    }
}

fn missing(field: &str, message: &str) -> EngineError {
    EngineError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn month(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    fn base_pay_config() -> PayConfig {
        PayConfig {
            annual_salary: None,
            monthly_salary: None,
            hourly_rate: None,
            vendor_bill_rate: None,
            candidate_share: None,
            joining_date: NaiveDate::from_ymd_opt(2024, 11, 15).unwrap(),
            pay_cycle_change_month: None,
            percentage_pay_after_months: None,
            pto_days_allocated: Decimal::ONE,
            enable_pto: false,
            bonus: None,
            currency: "USD".to_string(),
        }
    }

    fn employee(role: EmployeeRole, pay: PayConfig) -> Employee {
        Employee {
            id: "user_001".to_string(),
            name: "Test Person".to_string(),
            role,
            pay,
        }
    }

    /// PM-001: recruiter with annual salary resolves to fixed salary
    #[test]
    fn test_recruiter_annual_salary() {
        let mut pay = base_pay_config();
        pay.annual_salary = Some(dec("120000"));
        let model = PayModel::resolve(&employee(EmployeeRole::Recruiter, pay), month("2025-03"))
            .unwrap();
        assert_eq!(model, PayModel::FixedSalary { monthly: dec("10000") });
    }

    /// PM-002: monthly salary takes precedence over annual
    #[test]
    fn test_monthly_salary_preferred() {
        let mut pay = base_pay_config();
        pay.annual_salary = Some(dec("120000"));
        pay.monthly_salary = Some(dec("9500"));
        let model = PayModel::resolve(&employee(EmployeeRole::Recruiter, pay), month("2025-03"))
            .unwrap();
        assert_eq!(model, PayModel::FixedSalary { monthly: dec("9500") });
    }

    /// PM-003: explicit hourly rate resolves to hourly fixed
    #[test]
    fn test_recruiter_hourly_rate() {
        let mut pay = base_pay_config();
        pay.hourly_rate = Some(dec("45"));
        pay.annual_salary = Some(dec("120000"));
        let model = PayModel::resolve(&employee(EmployeeRole::Recruiter, pay), month("2025-03"))
            .unwrap();
        assert_eq!(model, PayModel::HourlyFixed { rate: dec("45") });
    }

    /// PM-004: candidate before the month-count trigger stays fixed
    #[test]
    fn test_candidate_pre_transition_by_months() {
        let mut pay = base_pay_config();
        pay.annual_salary = Some(dec("60000"));
        pay.percentage_pay_after_months = Some(3);
        pay.vendor_bill_rate = Some(dec("80"));
        pay.candidate_share = Some(dec("70"));

        // Joined 2024-11-15; January 2025 is 2 months after joining.
        let model = PayModel::resolve(&employee(EmployeeRole::Candidate, pay), month("2025-01"))
            .unwrap();
        assert_eq!(model, PayModel::FixedSalary { monthly: dec("5000") });
    }

    /// PM-005: candidate past the month-count trigger is on percentage pay
    #[test]
    fn test_candidate_post_transition_by_months() {
        let mut pay = base_pay_config();
        pay.annual_salary = Some(dec("60000"));
        pay.percentage_pay_after_months = Some(3);
        pay.vendor_bill_rate = Some(dec("80"));
        pay.candidate_share = Some(dec("70"));

        // February 2025 is 3 months after joining.
        let model = PayModel::resolve(&employee(EmployeeRole::Candidate, pay), month("2025-02"))
            .unwrap();
        assert_eq!(
            model,
            PayModel::PercentageOfBillRate {
                bill_rate: dec("80"),
                share: dec("70"),
            }
        );
    }

    /// PM-006: calendar-threshold trigger compares month keys
    #[test]
    fn test_candidate_calendar_threshold() {
        let mut pay = base_pay_config();
        pay.annual_salary = Some(dec("60000"));
        pay.pay_cycle_change_month = Some(month("2025-04"));
        pay.vendor_bill_rate = Some(dec("80"));
        pay.candidate_share = Some(dec("70"));
        let candidate = employee(EmployeeRole::Candidate, pay);

        let before = PayModel::resolve(&candidate, month("2025-03")).unwrap();
        assert!(matches!(before, PayModel::FixedSalary { .. }));

        let at = PayModel::resolve(&candidate, month("2025-04")).unwrap();
        assert!(matches!(at, PayModel::PercentageOfBillRate { .. }));
    }

    /// PM-007: candidate without a trigger never transitions
    #[test]
    fn test_candidate_without_trigger_stays_fixed() {
        let mut pay = base_pay_config();
        pay.annual_salary = Some(dec("60000"));
        let model = PayModel::resolve(&employee(EmployeeRole::Candidate, pay), month("2030-01"))
            .unwrap();
        assert!(matches!(model, PayModel::FixedSalary { .. }));
    }

    /// PM-008: missing fields fail validation
    #[test]
    fn test_missing_fields_fail_validation() {
        let result = PayModel::resolve(
            &employee(EmployeeRole::Recruiter, base_pay_config()),
            month("2025-03"),
        );
        assert!(matches!(result, Err(EngineError::Validation { .. })));

        let mut pay = base_pay_config();
        pay.pay_cycle_change_month = Some(month("2025-01"));
        let result = PayModel::resolve(&employee(EmployeeRole::Candidate, pay), month("2025-03"));
        match result.unwrap_err() {
            EngineError::Validation { field, .. } => assert_eq!(field, "vendor_bill_rate"),
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    /// PM-009: zero expected hours means zero rate, not an error
    #[test]
    fn test_zero_expected_hours_policy() {
        let model = PayModel::FixedSalary { monthly: dec("10000") };
        assert_eq!(model.hourly_rate(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_hourly_rate_per_model() {
        let fixed = PayModel::FixedSalary { monthly: dec("10000") };
        assert_eq!(fixed.hourly_rate(dec("160")), dec("62.5"));

        let hourly = PayModel::HourlyFixed { rate: dec("45") };
        assert_eq!(hourly.hourly_rate(dec("160")), dec("45"));

        let percentage = PayModel::PercentageOfBillRate {
            bill_rate: dec("80"),
            share: dec("70"),
        };
        assert_eq!(percentage.hourly_rate(dec("160")), dec("56.0"));
    }

    #[test]
    fn test_base_pay_per_model() {
        let fixed = PayModel::FixedSalary { monthly: dec("10000") };
        assert_eq!(fixed.base_pay(dec("160"), dec("152"), dec("62.5")), dec("10000"));

        let hourly = PayModel::HourlyFixed { rate: dec("45") };
        assert_eq!(hourly.base_pay(dec("160"), dec("152"), dec("45")), dec("7200"));

        let percentage = PayModel::PercentageOfBillRate {
            bill_rate: dec("80"),
            share: dec("70"),
        };
        assert_eq!(
            percentage.base_pay(dec("160"), dec("150"), dec("56.0")),
            dec("8400.0")
        );
    }
}
