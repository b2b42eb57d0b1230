//! Payroll orchestration service.
//!
//! [`PayrollService`] is the surface the (out-of-scope) HTTP and reporting
//! layers call into: it validates inputs, runs the compensation
//! calculator, and manages the salary record lifecycle against the store.
//! Validation happens before any external read, and creation is
//! all-or-nothing: no partial record is ever persisted on failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    CompensationCalculator, ComputationMode, PriorPeriodLookup, ProjectionEngine,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationResult, MonthKey, MonthProjection, PayOverride, SalaryRecord};
use crate::providers::{AttendanceProvider, EmployeeProvider, LeaveProvider};
use crate::store::{SalaryFilter, SalaryPatch, SalaryStore};

/// A salary store that can also answer prior-period lookups.
///
/// Implemented automatically for every store; the explicit accessor lets
/// the service hand the store to the leave ledger as a trait object.
pub trait PayrollStore: SalaryStore + PriorPeriodLookup {
    /// This store as a prior-period lookup.
    fn as_prior(&self) -> &dyn PriorPeriodLookup;
}

impl<T: SalaryStore + PriorPeriodLookup> PayrollStore for T {
    fn as_prior(&self) -> &dyn PriorPeriodLookup {
        self
    }
}

/// One recorded change to a salary record.
///
/// Every explicit update is journaled so payroll corrections stay
/// traceable after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryAudit {
    /// The record that was changed.
    pub salary_id: Uuid,
    /// The fields that were changed.
    pub changes: SalaryPatch,
    /// When the change was applied.
    pub timestamp: DateTime<Utc>,
}

/// Orchestrates payroll computation and record management.
pub struct PayrollService<'a> {
    config: &'a ConfigLoader,
    employees: &'a dyn EmployeeProvider,
    attendance: &'a dyn AttendanceProvider,
    leaves: &'a dyn LeaveProvider,
    store: &'a dyn PayrollStore,
    audit_log: Mutex<Vec<SalaryAudit>>,
}

impl<'a> PayrollService<'a> {
    /// Creates a service over the given configuration, providers, and store.
    pub fn new(
        config: &'a ConfigLoader,
        employees: &'a dyn EmployeeProvider,
        attendance: &'a dyn AttendanceProvider,
        leaves: &'a dyn LeaveProvider,
        store: &'a dyn PayrollStore,
    ) -> Self {
        Self {
            config,
            employees,
            attendance,
            leaves,
            store,
            audit_log: Mutex::new(Vec::new()),
        }
    }

    fn calculator(&self) -> CompensationCalculator<'a> {
        CompensationCalculator::new(
            self.config.policy(),
            self.config.holidays(),
            self.attendance,
            self.leaves,
            self.store.as_prior(),
        )
    }

    /// Computes and persists the salary record for `(user_id, month)`.
    ///
    /// The month string is validated before any external read. Fails with
    /// [`EngineError::DuplicateRecord`] when a record already exists for
    /// the pair (the existing record is never overwritten) and with
    /// [`EngineError::Validation`] when the computed base pay falls below
    /// the policy minimum.
    pub fn add_salary(&self, user_id: &str, month: &str) -> EngineResult<SalaryRecord> {
        self.add_salary_with(user_id, month, None)
    }

    /// Like [`PayrollService::add_salary`], with caller-supplied pay fields
    /// taking precedence over the employee's own configuration.
    ///
    /// The override applies to this computation only; the stored employee
    /// is never modified.
    pub fn add_salary_with(
        &self,
        user_id: &str,
        month: &str,
        overrides: Option<&PayOverride>,
    ) -> EngineResult<SalaryRecord> {
        let month: MonthKey = month.parse()?;
        let employee = self.employees.get(user_id)?;

        let result =
            self.calculator()
                .compute_with(&employee, month, overrides, ComputationMode::Live)?;

        let minimum = self.config.policy().minimum_base_pay;
        if result.base_pay < minimum {
            warn!(user_id, %month, base_pay = %result.base_pay, "base pay below policy minimum");
            return Err(EngineError::Validation {
                field: "base_pay".to_string(),
                message: format!(
                    "base pay {} is below the minimum {} {}",
                    result.base_pay, minimum, result.currency
                ),
            });
        }

        let record = self.store.create(result.into_record())?;
        info!(
            user_id,
            %month,
            final_amount = %record.final_amount,
            "salary record created"
        );
        Ok(record)
    }

    /// Computes the salary for `(user_id, month)` without persisting it.
    pub fn preview_salary(
        &self,
        user_id: &str,
        month: &str,
    ) -> EngineResult<CompensationResult> {
        let month: MonthKey = month.parse()?;
        let employee = self.employees.get(user_id)?;
        self.calculator()
            .compute(&employee, month, ComputationMode::Live)
    }

    /// Lists stored salary records matching `filter`.
    pub fn get_salaries(&self, filter: &SalaryFilter) -> EngineResult<Vec<SalaryRecord>> {
        self.store.find(filter)
    }

    /// Fetches the stored record for `(user_id, month)`, if any.
    pub fn get_salary(&self, user_id: &str, month: &str) -> EngineResult<Option<SalaryRecord>> {
        let month: MonthKey = month.parse()?;
        self.store.find_one(user_id, month)
    }

    /// Applies `patch` to an existing record and journals the change.
    pub fn update_salary(&self, id: Uuid, patch: SalaryPatch) -> EngineResult<SalaryRecord> {
        let record = self.store.update(id, &patch)?;
        let audit = SalaryAudit {
            salary_id: id,
            changes: patch,
            timestamp: Utc::now(),
        };
        self.audit_log
            .lock()
            .map_err(|_| EngineError::Persistence {
                message: "audit log lock poisoned".to_string(),
            })?
            .push(audit);
        info!(%id, final_amount = %record.final_amount, "salary record updated");
        Ok(record)
    }

    /// Deletes an existing record.
    pub fn delete_salary(&self, id: Uuid) -> EngineResult<()> {
        self.store.delete(id)?;
        info!(%id, "salary record deleted");
        Ok(())
    }

    /// The journal of updates applied through this service.
    pub fn audit_trail(&self) -> EngineResult<Vec<SalaryAudit>> {
        Ok(self
            .audit_log
            .lock()
            .map_err(|_| EngineError::Persistence {
                message: "audit log lock poisoned".to_string(),
            })?
            .clone())
    }

    /// Projects salaries for the `horizon` months after `start_month`.
    ///
    /// Pure and side-effect-free: nothing is persisted and carry-forward
    /// chains are never extended.
    pub fn project_salaries(
        &self,
        user_id: &str,
        start_month: &str,
        horizon: u32,
    ) -> EngineResult<Vec<MonthProjection>> {
        self.project_salaries_with(user_id, start_month, horizon, None)
    }

    /// Like [`PayrollService::project_salaries`], with caller-supplied pay
    /// fields taking precedence over the employee's own configuration for
    /// every projected month.
    pub fn project_salaries_with(
        &self,
        user_id: &str,
        start_month: &str,
        horizon: u32,
        overrides: Option<&PayOverride>,
    ) -> EngineResult<Vec<MonthProjection>> {
        let start: MonthKey = start_month.parse()?;
        let employee = self.employees.get(user_id)?;

        let calculator = self.calculator();
        let engine = ProjectionEngine::new(&calculator);
        engine
            .project_with(&employee, start, horizon, overrides)
            .collect()
    }
}
