//! Read interfaces to the external collaborators.
//!
//! The engine consumes employees, attendance facts, and leave facts from
//! the surrounding back office. Each collaborator is modelled as a trait so
//! the calculator can be unit-tested without a live data store, and so
//! projection mode can bypass live reads entirely.
//!
//! In-memory implementations are provided for composition in tests and
//! for deployments that feed the engine from already-fetched data.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{ApprovalStatus, AttendanceFact, Employee, LeaveFact};

/// Supplies employee records by id.
pub trait EmployeeProvider {
    /// Fetches an employee, failing with
    /// [`EngineError::EmployeeNotFound`] when the id is unknown.
    fn get(&self, user_id: &str) -> EngineResult<Employee>;
}

/// Supplies attendance facts by user, date range, and approval status.
pub trait AttendanceProvider {
    /// Returns the facts for `user_id` with the given `status` whose date
    /// range overlaps the inclusive `[from, to]` window.
    fn query(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        status: ApprovalStatus,
    ) -> EngineResult<Vec<AttendanceFact>>;
}

/// Supplies leave facts by user, approval status, and date range.
pub trait LeaveProvider {
    /// Returns the leaves for `user_id` with the given `status` that
    /// overlap the inclusive `[from, to]` window.
    fn query(
        &self,
        user_id: &str,
        status: ApprovalStatus,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<LeaveFact>>;
}

/// An in-memory employee provider backed by a map.
#[derive(Debug, Default, Clone)]
pub struct MemoryEmployeeProvider {
    employees: HashMap<String, Employee>,
}

impl MemoryEmployeeProvider {
    /// Creates a provider holding the given employees.
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            employees: employees.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// Adds or replaces an employee.
    pub fn insert(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }
}

impl EmployeeProvider for MemoryEmployeeProvider {
    fn get(&self, user_id: &str) -> EngineResult<Employee> {
        self.employees
            .get(user_id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound {
                user_id: user_id.to_string(),
            })
    }
}

/// An in-memory attendance provider backed by a list of facts.
#[derive(Debug, Default, Clone)]
pub struct MemoryAttendanceProvider {
    facts: Vec<AttendanceFact>,
}

impl MemoryAttendanceProvider {
    /// Creates a provider holding the given facts.
    pub fn new(facts: impl IntoIterator<Item = AttendanceFact>) -> Self {
        Self {
            facts: facts.into_iter().collect(),
        }
    }

    /// Adds a fact.
    pub fn insert(&mut self, fact: AttendanceFact) {
        self.facts.push(fact);
    }
}

impl AttendanceProvider for MemoryAttendanceProvider {
    fn query(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        status: ApprovalStatus,
    ) -> EngineResult<Vec<AttendanceFact>> {
        Ok(self
            .facts
            .iter()
            .filter(|f| f.user_id == user_id && f.status == status && f.overlaps(from, to))
            .cloned()
            .collect())
    }
}

/// An in-memory leave provider backed by a list of leave facts.
#[derive(Debug, Default, Clone)]
pub struct MemoryLeaveProvider {
    leaves: Vec<LeaveFact>,
}

impl MemoryLeaveProvider {
    /// Creates a provider holding the given leaves.
    pub fn new(leaves: impl IntoIterator<Item = LeaveFact>) -> Self {
        Self {
            leaves: leaves.into_iter().collect(),
        }
    }

    /// Adds a leave fact.
    pub fn insert(&mut self, leave: LeaveFact) {
        self.leaves.push(leave);
    }
}

impl LeaveProvider for MemoryLeaveProvider {
    fn query(
        &self,
        user_id: &str,
        status: ApprovalStatus,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<LeaveFact>> {
        Ok(self
            .leaves
            .iter()
            .filter(|l| l.user_id == user_id && l.status == status && l.overlaps(from, to))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRole, PayConfig};
    use rust_decimal::Decimal;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Test Person".to_string(),
            role: EmployeeRole::Recruiter,
            pay: PayConfig {
                annual_salary: Some(Decimal::from(120_000)),
                monthly_salary: None,
                hourly_rate: None,
                vendor_bill_rate: None,
                candidate_share: None,
                joining_date: day(2023, 6, 1),
                pay_cycle_change_month: None,
                percentage_pay_after_months: None,
                pto_days_allocated: Decimal::ONE,
                enable_pto: false,
                bonus: None,
                currency: "USD".to_string(),
            },
        }
    }

    #[test]
    fn test_employee_provider_returns_known_employee() {
        let provider = MemoryEmployeeProvider::new([sample_employee("user_001")]);
        let employee = provider.get("user_001").unwrap();
        assert_eq!(employee.id, "user_001");
    }

    #[test]
    fn test_employee_provider_unknown_id_is_not_found() {
        let provider = MemoryEmployeeProvider::default();
        match provider.get("ghost").unwrap_err() {
            EngineError::EmployeeNotFound { user_id } => assert_eq!(user_id, "ghost"),
            other => panic!("Expected EmployeeNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_attendance_query_filters_status_and_range() {
        let provider = MemoryAttendanceProvider::new([
            AttendanceFact {
                user_id: "user_001".to_string(),
                from: day(2025, 3, 3),
                to: day(2025, 3, 3),
                status: ApprovalStatus::Approved,
                hours: Some(Decimal::from(8)),
                worked: None,
            },
            AttendanceFact {
                user_id: "user_001".to_string(),
                from: day(2025, 3, 4),
                to: day(2025, 3, 4),
                status: ApprovalStatus::Pending,
                hours: Some(Decimal::from(8)),
                worked: None,
            },
            AttendanceFact {
                user_id: "user_001".to_string(),
                from: day(2025, 4, 1),
                to: day(2025, 4, 1),
                status: ApprovalStatus::Approved,
                hours: Some(Decimal::from(8)),
                worked: None,
            },
        ]);

        let facts = provider
            .query(
                "user_001",
                day(2025, 3, 1),
                day(2025, 3, 31),
                ApprovalStatus::Approved,
            )
            .unwrap();
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].from, day(2025, 3, 3));
    }

    #[test]
    fn test_leave_query_filters_user() {
        let provider = MemoryLeaveProvider::new([
            LeaveFact {
                user_id: "user_001".to_string(),
                from: day(2025, 3, 10),
                to: day(2025, 3, 11),
                status: ApprovalStatus::Approved,
            },
            LeaveFact {
                user_id: "user_002".to_string(),
                from: day(2025, 3, 10),
                to: day(2025, 3, 11),
                status: ApprovalStatus::Approved,
            },
        ]);

        let leaves = provider
            .query(
                "user_002",
                ApprovalStatus::Approved,
                day(2025, 3, 1),
                day(2025, 3, 31),
            )
            .unwrap();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].user_id, "user_002");
    }
}
