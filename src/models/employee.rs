//! Employee model and pay configuration.
//!
//! This module defines the [`Employee`] struct and the canonical
//! [`PayConfig`] schema that replaces the assorted per-role salary fields
//! scattered across the legacy back office.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonthKey;

/// The role an employee holds within the agency.
///
/// The role selects the pay-model family: recruiters are salaried staff,
/// candidates are placed workers whose pay may transition from a fixed
/// salary to a percentage of the vendor bill rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Internal recruiting staff on a fixed salary.
    Recruiter,
    /// A placed candidate, billed to a vendor.
    Candidate,
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeRole::Recruiter => write!(f, "recruiter"),
            EmployeeRole::Candidate => write!(f, "candidate"),
        }
    }
}

/// How a configured bonus repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BonusType {
    /// Paid once, in the month of the bonus start date.
    OneTime,
    /// Paid every month within the configured window.
    Recurring,
}

/// A bonus granted to an employee.
///
/// Applicability is decided at month granularity by the bonus evaluator;
/// the amount is never prorated by days worked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusConfig {
    /// The bonus amount per applicable month.
    pub amount: Decimal,
    /// Whether the bonus is one-time or recurring.
    pub bonus_type: BonusType,
    /// The date the bonus becomes payable.
    pub start_date: NaiveDate,
    /// The last date the bonus is payable; `None` means open-ended.
    pub end_date: Option<NaiveDate>,
}

/// Canonical pay configuration for an employee.
///
/// The legacy system carried these fields in half a dozen drifting shapes
/// (`base` vs `baseSalary`, `ptoType` vs `ptoDaysAllocated`); this struct is
/// the single schema every computation resolves against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayConfig {
    /// Gross annual salary, when salaried on an annual figure.
    #[serde(default)]
    pub annual_salary: Option<Decimal>,
    /// Gross monthly salary, when salaried on a monthly figure.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Direct hourly rate, when paid by the hour at a fixed rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Hourly rate billed to the vendor for a placed candidate.
    #[serde(default)]
    pub vendor_bill_rate: Option<Decimal>,
    /// The candidate's share of the vendor bill rate, in percent.
    #[serde(default)]
    pub candidate_share: Option<Decimal>,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
    /// Calendar month from which a candidate moves to percentage pay.
    #[serde(default)]
    pub pay_cycle_change_month: Option<MonthKey>,
    /// Months after joining at which a candidate moves to percentage pay.
    #[serde(default)]
    pub percentage_pay_after_months: Option<u32>,
    /// Base PTO days allocated per month.
    #[serde(default)]
    pub pto_days_allocated: Decimal,
    /// Whether PTO deduction applies to this employee's percentage pay.
    #[serde(default)]
    pub enable_pto: bool,
    /// Bonus configuration, when a bonus has been granted.
    #[serde(default)]
    pub bonus: Option<BonusConfig>,
    /// The currency salaries are denominated in (e.g. "USD", "INR").
    pub currency: String,
}

/// Caller-supplied pay fields that take precedence for one computation.
///
/// The back office lets an administrator submit corrected pay figures with
/// a salary request; those figures apply to that computation only and the
/// stored employee is never touched. Absent fields fall through to the
/// employee's own [`PayConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayOverride {
    /// Overrides [`PayConfig::annual_salary`].
    #[serde(default)]
    pub annual_salary: Option<Decimal>,
    /// Overrides [`PayConfig::monthly_salary`].
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Overrides [`PayConfig::hourly_rate`].
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Overrides [`PayConfig::vendor_bill_rate`].
    #[serde(default)]
    pub vendor_bill_rate: Option<Decimal>,
    /// Overrides [`PayConfig::candidate_share`].
    #[serde(default)]
    pub candidate_share: Option<Decimal>,
    /// Overrides [`PayConfig::pto_days_allocated`].
    #[serde(default)]
    pub pto_days_allocated: Option<Decimal>,
    /// Overrides [`PayConfig::bonus`].
    #[serde(default)]
    pub bonus: Option<BonusConfig>,
    /// Overrides [`PayConfig::currency`].
    #[serde(default)]
    pub currency: Option<String>,
}

impl PayOverride {
    /// Merges this override over `base`, yielding the effective config.
    pub fn apply(&self, base: &PayConfig) -> PayConfig {
        let mut effective = base.clone();
        if self.annual_salary.is_some() {
            effective.annual_salary = self.annual_salary;
        }
        if self.monthly_salary.is_some() {
            effective.monthly_salary = self.monthly_salary;
        }
        if self.hourly_rate.is_some() {
            effective.hourly_rate = self.hourly_rate;
        }
        if self.vendor_bill_rate.is_some() {
            effective.vendor_bill_rate = self.vendor_bill_rate;
        }
        if self.candidate_share.is_some() {
            effective.candidate_share = self.candidate_share;
        }
        if let Some(pto) = self.pto_days_allocated {
            effective.pto_days_allocated = pto;
        }
        if let Some(bonus) = &self.bonus {
            effective.bonus = Some(bonus.clone());
        }
        if let Some(currency) = &self.currency {
            effective.currency = currency.clone();
        }
        effective
    }
}

/// An employee as supplied by the employee-management collaborator.
///
/// The engine treats this as read-only input; it never mutates or persists
/// employee data.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, EmployeeRole, PayConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "user_001".to_string(),
///     name: "Avery Chen".to_string(),
///     role: EmployeeRole::Recruiter,
///     pay: PayConfig {
///         annual_salary: Some(Decimal::from(120_000)),
///         monthly_salary: None,
///         hourly_rate: None,
///         vendor_bill_rate: None,
///         candidate_share: None,
///         joining_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///         pay_cycle_change_month: None,
///         percentage_pay_after_months: None,
///         pto_days_allocated: Decimal::ONE,
///         enable_pto: false,
///         bonus: None,
///         currency: "USD".to_string(),
///     },
/// };
/// assert_eq!(employee.role, EmployeeRole::Recruiter);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's role, which selects the pay-model family.
    pub role: EmployeeRole,
    /// The employee's pay configuration.
    pub pay: PayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_recruiter() {
        let json = r#"{
            "id": "user_001",
            "name": "Avery Chen",
            "role": "recruiter",
            "pay": {
                "annual_salary": "120000",
                "joining_date": "2023-06-01",
                "pto_days_allocated": "1",
                "currency": "USD"
            }
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "user_001");
        assert_eq!(employee.role, EmployeeRole::Recruiter);
        assert_eq!(employee.pay.annual_salary, Some(Decimal::from(120_000)));
        assert_eq!(employee.pay.monthly_salary, None);
        assert!(!employee.pay.enable_pto);
        assert!(employee.pay.bonus.is_none());
    }

    #[test]
    fn test_deserialize_candidate_with_transition_and_bonus() {
        let json = r#"{
            "id": "user_002",
            "name": "Rae Okafor",
            "role": "candidate",
            "pay": {
                "annual_salary": "60000",
                "vendor_bill_rate": "80",
                "candidate_share": "70",
                "joining_date": "2024-11-15",
                "percentage_pay_after_months": 3,
                "pto_days_allocated": "1",
                "enable_pto": true,
                "bonus": {
                    "amount": "500",
                    "bonus_type": "one-time",
                    "start_date": "2025-03-01",
                    "end_date": null
                },
                "currency": "USD"
            }
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.role, EmployeeRole::Candidate);
        assert_eq!(employee.pay.percentage_pay_after_months, Some(3));
        assert_eq!(employee.pay.candidate_share, Some(Decimal::from(70)));
        assert!(employee.pay.enable_pto);

        let bonus = employee.pay.bonus.unwrap();
        assert_eq!(bonus.bonus_type, BonusType::OneTime);
        assert_eq!(bonus.amount, Decimal::from(500));
        assert!(bonus.end_date.is_none());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeRole::Recruiter).unwrap(),
            "\"recruiter\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeRole::Candidate).unwrap(),
            "\"candidate\""
        );
    }

    #[test]
    fn test_bonus_type_serialization() {
        assert_eq!(
            serde_json::to_string(&BonusType::OneTime).unwrap(),
            "\"one-time\""
        );
        assert_eq!(
            serde_json::to_string(&BonusType::Recurring).unwrap(),
            "\"recurring\""
        );
    }

    #[test]
    fn test_pay_override_merges_only_set_fields() {
        let base = PayConfig {
            annual_salary: Some(Decimal::from(120_000)),
            monthly_salary: None,
            hourly_rate: None,
            vendor_bill_rate: Some(Decimal::from(80)),
            candidate_share: Some(Decimal::from(70)),
            joining_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            pay_cycle_change_month: None,
            percentage_pay_after_months: None,
            pto_days_allocated: Decimal::ONE,
            enable_pto: false,
            bonus: None,
            currency: "USD".to_string(),
        };

        let override_config = PayOverride {
            monthly_salary: Some(Decimal::from(9_500)),
            currency: Some("INR".to_string()),
            ..PayOverride::default()
        };

        let effective = override_config.apply(&base);
        assert_eq!(effective.monthly_salary, Some(Decimal::from(9_500)));
        assert_eq!(effective.currency, "INR");
        // Untouched fields fall through to the base.
        assert_eq!(effective.annual_salary, Some(Decimal::from(120_000)));
        assert_eq!(effective.vendor_bill_rate, Some(Decimal::from(80)));
        assert_eq!(effective.pto_days_allocated, Decimal::ONE);
        // The base itself is never mutated.
        assert_eq!(base.currency, "USD");
        assert_eq!(base.monthly_salary, None);
    }

    #[test]
    fn test_pay_override_default_is_identity() {
        let base = PayConfig {
            annual_salary: None,
            monthly_salary: Some(Decimal::from(8_000)),
            hourly_rate: None,
            vendor_bill_rate: None,
            candidate_share: None,
            joining_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            pay_cycle_change_month: None,
            percentage_pay_after_months: None,
            pto_days_allocated: Decimal::ONE,
            enable_pto: true,
            bonus: None,
            currency: "USD".to_string(),
        };
        assert_eq!(PayOverride::default().apply(&base), base);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let json = r#"{
            "id": "user_003",
            "name": "Sam Ortiz",
            "role": "candidate",
            "pay": {
                "vendor_bill_rate": "90",
                "candidate_share": "65",
                "joining_date": "2025-01-01",
                "pay_cycle_change_month": "2025-04",
                "currency": "INR"
            }
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        let round_tripped: Employee =
            serde_json::from_str(&serde_json::to_string(&employee).unwrap()).unwrap();
        assert_eq!(employee, round_tripped);
        assert_eq!(
            employee.pay.pay_cycle_change_month,
            Some("2025-04".parse().unwrap())
        );
    }
}
