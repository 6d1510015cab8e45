//! Data types for the payroll event service
//!
//! This module contains the stored event record and the report shapes
//! derived from it.

mod event;
mod report;

pub use event::{EmployeeEvent, EventKind, UnknownEventKind};
pub use report::{
    EmployeeFinancialReport, ExitDetail, JoinDetail, MonthlyAmountReleasedReport,
    MonthlySalaryReport, YearlyFinancialEntry,
};
