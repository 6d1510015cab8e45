//! Reports over the full event set
//!
//! Every report is a pure function of a slice of events. `Reporter` pairs
//! them with a store: one `scan_all` per call, then in-memory grouping.
//!
//! - headcount: distinct employee ids across all events
//! - monthly joins / exits, keyed `YYYY-MM`
//! - monthly salary totals and monthly amount released
//! - per-employee totals paid
//! - all events grouped by year

mod financial;
mod monthly;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use thiserror::Error;

use crate::event_store::{EventStore, StoreError};
use crate::types::{
    EmployeeEvent, EmployeeFinancialReport, EventKind, ExitDetail, JoinDetail,
    MonthlyAmountReleasedReport, MonthlySalaryReport, YearlyFinancialEntry,
};

pub use financial::{employee_financial_report, yearly_financial_report};
pub use monthly::{monthly_amount_released, monthly_exits, monthly_joins, monthly_salary_report};

/// Errors raised while computing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("event for employee {emp_id} has non-numeric amount {value:?}")]
    InvalidAmount {
        emp_id: String,
        value: Option<String>,
    },
}

/// Result type for report computations
pub type ReportResult<T> = Result<T, ReportError>;

/// Monetary amount of an event, or an error naming the offending record
pub(crate) fn amount_of(event: &EmployeeEvent) -> ReportResult<f64> {
    event.amount().ok_or_else(|| ReportError::InvalidAmount {
        emp_id: event.emp_id.clone(),
        value: event.value.clone(),
    })
}

/// Index of ONBOARD records by employee id
///
/// If an id onboards more than once, the last one scanned wins.
pub fn onboard_index(events: &[EmployeeEvent]) -> HashMap<&str, &EmployeeEvent> {
    events
        .iter()
        .filter(|e| e.event == EventKind::Onboard)
        .map(|e| (e.emp_id.as_str(), e))
        .collect()
}

/// Number of distinct employee ids across all events
pub fn count_employees(events: &[EmployeeEvent]) -> usize {
    events
        .iter()
        .map(|e| e.emp_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Report service backed by an event store
#[derive(Clone)]
pub struct Reporter {
    store: Arc<dyn EventStore>,
}

impl Reporter {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    fn snapshot(&self, report: &'static str) -> ReportResult<Vec<EmployeeEvent>> {
        let events = self.store.scan_all()?;
        tracing::debug!(report, events = events.len(), "computing report");
        Ok(events)
    }

    /// Every stored event
    pub fn all_events(&self) -> ReportResult<Vec<EmployeeEvent>> {
        self.snapshot("all_events")
    }

    pub fn employee_count(&self) -> ReportResult<usize> {
        Ok(count_employees(&self.snapshot("count")?))
    }

    pub fn monthly_joins(&self) -> ReportResult<BTreeMap<String, Vec<JoinDetail>>> {
        Ok(monthly_joins(&self.snapshot("monthly_joins")?))
    }

    pub fn monthly_exits(&self) -> ReportResult<BTreeMap<String, Vec<Option<ExitDetail>>>> {
        Ok(monthly_exits(&self.snapshot("monthly_exits")?))
    }

    pub fn monthly_salary_report(&self) -> ReportResult<BTreeMap<String, MonthlySalaryReport>> {
        monthly_salary_report(&self.snapshot("monthly_salary")?)
    }

    pub fn employee_financial_report(
        &self,
    ) -> ReportResult<BTreeMap<String, EmployeeFinancialReport>> {
        employee_financial_report(&self.snapshot("employee_financial")?)
    }

    pub fn monthly_amount_released(
        &self,
    ) -> ReportResult<BTreeMap<String, MonthlyAmountReleasedReport>> {
        monthly_amount_released(&self.snapshot("monthly_amount_released")?)
    }

    pub fn yearly_financial_report(&self) -> ReportResult<BTreeMap<i32, Vec<YearlyFinancialEntry>>> {
        Ok(yearly_financial_report(&self.snapshot("yearly_financial")?))
    }
}
