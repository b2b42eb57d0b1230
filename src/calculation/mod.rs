//! Calculation logic for the Payroll Compensation Engine.
//!
//! This module contains the pure calculation services: working-day
//! enumeration, attendance aggregation, unpaid-leave and carry-forward PTO
//! accounting, bonus evaluation, pay-model dispatch, the compensation
//! calculator that orchestrates them, and the forward projection engine.

mod attendance;
mod bonus;
mod compensation;
mod leave_ledger;
mod pay_model;
mod projection;
mod working_calendar;

pub use attendance::{AttendanceAggregator, AttendanceSummary};
pub use bonus::applicable_bonus;
pub use compensation::{CompensationCalculator, ComputationMode};
pub use leave_ledger::{LeaveLedger, NoHistory, PriorPeriodLookup, allowed_pto};
pub use pay_model::PayModel;
pub use projection::{ProjectionEngine, Projections};
pub use working_calendar::{WorkingDaySet, working_days};
