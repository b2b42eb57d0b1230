//! Salary record and computation result models.
//!
//! This module contains the persisted [`SalaryRecord`] snapshot, the
//! [`CompensationResult`] produced by the calculator, and the ephemeral
//! [`MonthProjection`] used for forecasts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeRole, MonthKey};

/// Hours and pay bucketed by week of month.
///
/// Weekly buckets are reporting-only; they never feed back into the final
/// amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    /// Bucket key of the form `YYYY-Www`, derived from each entry's start date.
    pub week: String,
    /// Approved hours in this bucket.
    pub hours: Decimal,
    /// Pay attributable to this bucket at the month's hourly rate.
    pub amount: Decimal,
}

/// The persisted snapshot of one month's compensation for one employee.
///
/// At most one record exists per `(user_id, month)` pair; the store enforces
/// this. A record is created by an explicit add-salary operation and is
/// mutable afterward only through an explicit update; a later computation
/// for the same month never silently overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Unique record id.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub user_id: String,
    /// The payroll month.
    pub month: MonthKey,
    /// The employee's role at computation time.
    pub role: EmployeeRole,
    /// Business days in the month.
    pub working_days: Decimal,
    /// Approved worked days.
    pub worked_days: Decimal,
    /// Approved worked hours.
    pub worked_hours: Decimal,
    /// Approved off days.
    pub off_days: Decimal,
    /// Leave days beyond the allowed PTO for the month.
    pub unpaid_days: Decimal,
    /// The hourly rate the month was paid at.
    pub hourly_rate: Decimal,
    /// Gross base pay before deductions and bonus.
    pub base_pay: Decimal,
    /// Bonus applied this month.
    pub bonus: Decimal,
    /// Deduction for unpaid leave.
    pub pto_deduction: Decimal,
    /// The amount owed after deductions and bonus.
    pub final_amount: Decimal,
    /// PTO carried into this month from the previous one.
    pub carry_forward_pto: Decimal,
    /// Base PTO allocation plus carry-forward.
    pub allowed_pto: Decimal,
    /// The currency the amounts are denominated in.
    pub currency: String,
    /// Human-readable summary, e.g. `"3 unpaid leave day(s)"`.
    pub remarks: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// The full output of one compensation computation.
///
/// Shaped like a [`SalaryRecord`] plus the reporting-only fields
/// (`expected_hours`, weekly breakdown) that are exposed to callers but
/// not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// The employee the computation is for.
    pub user_id: String,
    /// The computed month.
    pub month: MonthKey,
    /// The employee's role.
    pub role: EmployeeRole,
    /// Business days in the month.
    pub working_days: Decimal,
    /// Worked days (assumed in projection mode).
    pub worked_days: Decimal,
    /// Worked hours (assumed in projection mode).
    pub worked_hours: Decimal,
    /// Expected hours: working days times the policy hours per day.
    pub expected_hours: Decimal,
    /// Off days taken.
    pub off_days: Decimal,
    /// Unpaid leave days.
    pub unpaid_days: Decimal,
    /// The resolved hourly rate.
    pub hourly_rate: Decimal,
    /// Gross base pay.
    pub base_pay: Decimal,
    /// Applicable bonus.
    pub bonus: Decimal,
    /// Unpaid-leave deduction.
    pub pto_deduction: Decimal,
    /// Final amount owed.
    pub final_amount: Decimal,
    /// PTO carried forward from the prior month.
    pub carry_forward_pto: Decimal,
    /// Allowed PTO for the month.
    pub allowed_pto: Decimal,
    /// The currency of all monetary fields.
    pub currency: String,
    /// Human-readable summary.
    pub remarks: String,
    /// Hours bucketed by week of month, for reporting.
    pub weekly_breakdown: Vec<WeeklyHours>,
}

impl CompensationResult {
    /// Converts this computation into a persistable record, assigning a
    /// fresh id and creation timestamp.
    pub fn into_record(self) -> SalaryRecord {
        SalaryRecord {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            month: self.month,
            role: self.role,
            working_days: self.working_days,
            worked_days: self.worked_days,
            worked_hours: self.worked_hours,
            off_days: self.off_days,
            unpaid_days: self.unpaid_days,
            hourly_rate: self.hourly_rate,
            base_pay: self.base_pay,
            bonus: self.bonus,
            pto_deduction: self.pto_deduction,
            final_amount: self.final_amount,
            carry_forward_pto: self.carry_forward_pto,
            allowed_pto: self.allowed_pto,
            currency: self.currency,
            remarks: self.remarks,
            created_at: Utc::now(),
        }
    }
}

/// One month of a forward salary projection.
///
/// Projections are ephemeral: they are never persisted and never affect
/// carry-forward chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthProjection {
    /// The projected month.
    pub month: MonthKey,
    /// The projected final pay.
    pub final_pay: Decimal,
    /// Assumed worked hours.
    pub worked_hours: Decimal,
    /// Expected hours for the month.
    pub expected_hours: Decimal,
    /// Projected bonus.
    pub bonus: Decimal,
    /// Projected PTO deduction (always zero under optimistic assumptions).
    pub pto_deduction: Decimal,
}

impl From<CompensationResult> for MonthProjection {
    fn from(result: CompensationResult) -> Self {
        MonthProjection {
            month: result.month,
            final_pay: result.final_amount,
            worked_hours: result.worked_hours,
            expected_hours: result.expected_hours,
            bonus: result.bonus,
            pto_deduction: result.pto_deduction,
        }
    }
}
