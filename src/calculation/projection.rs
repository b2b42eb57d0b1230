//! Forward salary projection.
//!
//! Runs the compensation calculator over the N months following a start
//! month, in projection mode: optimistic attendance, no unpaid leave, no
//! carry-forward, no provider reads, nothing persisted.

use crate::error::EngineResult;
use crate::models::{Employee, MonthKey, MonthProjection, PayOverride};

use super::compensation::{CompensationCalculator, ComputationMode};

/// Projects compensation forward over a horizon of months.
///
/// Each projected month is independent; the sequence is lazy, finite, and
/// restartable: iterating twice from the same inputs yields identical
/// results.
pub struct ProjectionEngine<'a> {
    calculator: &'a CompensationCalculator<'a>,
}

impl<'a> ProjectionEngine<'a> {
    /// Creates a projection engine over `calculator`.
    pub fn new(calculator: &'a CompensationCalculator<'a>) -> Self {
        Self { calculator }
    }

    /// Returns the projections for the `horizon` months following
    /// `start_month` (the start month itself is excluded).
    ///
    /// # Example
    ///
    /// A horizon of 3 starting at `2025-01` yields `2025-02`, `2025-03`,
    /// and `2025-04`, in order.
    pub fn project(
        &self,
        employee: &'a Employee,
        start_month: MonthKey,
        horizon: u32,
    ) -> Projections<'a> {
        self.project_with(employee, start_month, horizon, None)
    }

    /// Like [`ProjectionEngine::project`], with caller-supplied pay fields
    /// taking precedence over the employee's configuration for every
    /// projected month.
    pub fn project_with(
        &self,
        employee: &'a Employee,
        start_month: MonthKey,
        horizon: u32,
        overrides: Option<&'a PayOverride>,
    ) -> Projections<'a> {
        Projections {
            calculator: self.calculator,
            employee,
            overrides,
            start_month,
            horizon,
            offset: 0,
        }
    }
}

/// A lazy iterator over projected months.
#[derive(Clone)]
pub struct Projections<'a> {
    calculator: &'a CompensationCalculator<'a>,
    employee: &'a Employee,
    overrides: Option<&'a PayOverride>,
    start_month: MonthKey,
    horizon: u32,
    offset: u32,
}

impl Iterator for Projections<'_> {
    type Item = EngineResult<MonthProjection>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.horizon {
            return None;
        }
        self.offset += 1;
        let month = self.start_month.add_months(self.offset);
        let result = self
            .calculator
            .compute_with(
                self.employee,
                month,
                self.overrides,
                ComputationMode::Projection,
            )
            .map(MonthProjection::from);
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.horizon - self.offset) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Projections<'_> {}
