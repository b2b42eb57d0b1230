//! Compensation orchestration.
//!
//! [`CompensationCalculator`] ties the working calendar, attendance
//! aggregation, leave ledger, bonus evaluation, and pay-model dispatch
//! together into one computation per `(employee, month)`.
//!
//! Rounding policy: intermediate rates and sums retain full precision;
//! every monetary field is rounded to two decimals exactly once, when the
//! result is assembled.

use rust_decimal::{Decimal, RoundingStrategy};

use std::borrow::Cow;

use crate::config::{HolidayCalendar, PayrollPolicy};
use crate::error::EngineResult;
use crate::models::{
    CompensationResult, Employee, EmployeeRole, MonthKey, PayOverride, WeeklyHours,
};
use crate::providers::{AttendanceProvider, LeaveProvider};

use super::attendance::{AttendanceAggregator, AttendanceSummary};
use super::bonus::applicable_bonus;
use super::leave_ledger::{LeaveLedger, NoHistory, PriorPeriodLookup, allowed_pto};
use super::pay_model::PayModel;
use super::working_calendar::working_days;

/// Whether a computation reads live attendance or assumes a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputationMode {
    /// Read approved attendance and leave, and the prior month's record.
    Live,
    /// Optimistic forecast: full attendance minus the PTO allocation, no
    /// unpaid leave, no carry-forward, no provider reads.
    Projection,
}

/// Computes one month's compensation for one employee.
///
/// All collaborators are injected, so the calculator is unit-testable
/// without a live data store. Repeated calls with identical inputs and an
/// unchanged prior-month record yield identical output.
pub struct CompensationCalculator<'a> {
    policy: &'a PayrollPolicy,
    holidays: &'a HolidayCalendar,
    attendance: &'a dyn AttendanceProvider,
    leaves: &'a dyn LeaveProvider,
    prior: &'a dyn PriorPeriodLookup,
}

impl<'a> CompensationCalculator<'a> {
    /// Creates a calculator over the given policy, holiday calendar, and
    /// external reads.
    pub fn new(
        policy: &'a PayrollPolicy,
        holidays: &'a HolidayCalendar,
        attendance: &'a dyn AttendanceProvider,
        leaves: &'a dyn LeaveProvider,
        prior: &'a dyn PriorPeriodLookup,
    ) -> Self {
        Self {
            policy,
            holidays,
            attendance,
            leaves,
            prior,
        }
    }

    /// Computes the compensation for `employee` in `month`.
    ///
    /// In [`ComputationMode::Projection`] no provider is read; attendance
    /// is assumed optimistically and carry-forward is zero.
    pub fn compute(
        &self,
        employee: &Employee,
        month: MonthKey,
        mode: ComputationMode,
    ) -> EngineResult<CompensationResult> {
        self.compute_with(employee, month, None, mode)
    }

    /// Computes the compensation for `employee` in `month`, with
    /// caller-supplied pay fields taking precedence over the employee's
    /// own configuration for this computation only.
    pub fn compute_with(
        &self,
        employee: &Employee,
        month: MonthKey,
        overrides: Option<&PayOverride>,
        mode: ComputationMode,
    ) -> EngineResult<CompensationResult> {
        let employee: Cow<'_, Employee> = match overrides {
            Some(overrides) => Cow::Owned(Employee {
                pay: overrides.apply(&employee.pay),
                ..employee.clone()
            }),
            None => Cow::Borrowed(employee),
        };
        let employee = employee.as_ref();

        let model = PayModel::resolve(employee, month)?;

        let calendar = working_days(month, &self.holidays.dates());
        let working = Decimal::from(calendar.count());
        let expected_hours = working * self.policy.hours_per_day;

        let pay = &employee.pay;
        let base_pto = if pay.pto_days_allocated > Decimal::ZERO {
            pay.pto_days_allocated
        } else {
            self.policy.default_pto_days
        };

        let (summary, carry_forward, allowed, unpaid_days) = match mode {
            ComputationMode::Live => {
                let aggregator =
                    AttendanceAggregator::new(self.attendance, self.policy.hours_per_day);
                let summary = aggregator.aggregate(&employee.id, month)?;

                let ledger = LeaveLedger::new(self.leaves, self.prior);
                let carry = ledger.carry_forward_pto(&employee.id, month)?;
                let allowed = allowed_pto(base_pto, carry);
                let unpaid = ledger.unpaid_leave_days(&employee.id, month, allowed)?;
                (summary, carry, allowed, unpaid)
            }
            ComputationMode::Projection => {
                let worked_days = (working - base_pto).max(Decimal::ZERO);
                let summary = AttendanceSummary {
                    worked_hours: worked_days * self.policy.hours_per_day,
                    worked_days,
                    off_days: base_pto,
                    weekly_hours: Vec::new(),
                };
                let ledger = LeaveLedger::new(self.leaves, &NoHistory);
                let carry = ledger.carry_forward_pto(&employee.id, month)?;
                (summary, carry, allowed_pto(base_pto, carry), Decimal::ZERO)
            }
        };

        let hourly_rate = model.hourly_rate(expected_hours);
        let base_pay = model.base_pay(expected_hours, summary.worked_hours, hourly_rate);

        let deducts_pto = match employee.role {
            EmployeeRole::Recruiter => true,
            EmployeeRole::Candidate => pay.enable_pto,
        };
        let pto_deduction = if deducts_pto {
            unpaid_days * self.policy.hours_per_day * hourly_rate
        } else {
            Decimal::ZERO
        };

        let bonus = applicable_bonus(pay.bonus.as_ref(), month);
        let final_amount = summary.worked_hours * hourly_rate - pto_deduction + bonus;

        let remarks = if unpaid_days > Decimal::ZERO {
            format!("{unpaid_days} unpaid leave day(s)")
        } else {
            "Full salary".to_string()
        };

        let weekly_breakdown = summary
            .weekly_hours
            .iter()
            .map(|(week, hours)| WeeklyHours {
                week: week.clone(),
                hours: *hours,
                amount: round_money(*hours * hourly_rate),
            })
            .collect();

        Ok(CompensationResult {
            user_id: employee.id.clone(),
            month,
            role: employee.role,
            working_days: working,
            worked_days: summary.worked_days,
            worked_hours: summary.worked_hours,
            expected_hours,
            off_days: summary.off_days,
            unpaid_days,
            hourly_rate: round_money(hourly_rate),
            base_pay: round_money(base_pay),
            bonus: round_money(bonus),
            pto_deduction: round_money(pto_deduction),
            final_amount: round_money(final_amount),
            carry_forward_pto: carry_forward,
            allowed_pto: allowed,
            currency: pay.currency.clone(),
            remarks,
            weekly_breakdown,
        })
    }
}

/// Rounds a monetary value to two decimals, midpoints away from zero.
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
