//! Employee event types
//!
//! An `EmployeeEvent` is the single stored shape for all five row layouts
//! of the input file. Name and designation fields are only populated for
//! ONBOARD rows; `value` holds a date string for ONBOARD/EXIT and a decimal
//! amount for the monetary kinds.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of lifecycle or payroll event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// Employee joined; the row carries first name, last name and designation
    Onboard,
    /// Monthly salary payment
    Salary,
    /// One-off bonus payment
    Bonus,
    /// Expense reimbursement
    Reimbursement,
    /// Employee left
    Exit,
}

impl EventKind {
    /// All kinds, in declaration order
    pub const ALL: [EventKind; 5] = [
        EventKind::Onboard,
        EventKind::Salary,
        EventKind::Bonus,
        EventKind::Reimbursement,
        EventKind::Exit,
    ];

    /// Tag name as it appears in input files and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Onboard => "ONBOARD",
            EventKind::Salary => "SALARY",
            EventKind::Bonus => "BONUS",
            EventKind::Reimbursement => "REIMBURSEMENT",
            EventKind::Exit => "EXIT",
        }
    }

    /// Whether `value` carries a monetary amount for this kind
    pub fn is_monetary(&self) -> bool {
        matches!(
            self,
            EventKind::Salary | EventKind::Bonus | EventKind::Reimbursement
        )
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token does not name an `EventKind`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    /// Case-sensitive match against the tag names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

/// A single persisted employee event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEvent {
    /// Surrogate key, assigned by the store on insert
    #[serde(default)]
    pub id: Option<u64>,
    /// Ordering hint from the first column of the row
    pub sequence_no: i64,
    pub emp_id: String,
    #[serde(default)]
    pub emp_f_name: Option<String>,
    #[serde(default)]
    pub emp_l_name: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    pub event: EventKind,
    #[serde(default)]
    pub value: Option<String>,
    /// Authoritative date used by every report
    pub event_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EmployeeEvent {
    /// Create a non-ONBOARD event without an id
    pub fn new(
        sequence_no: i64,
        emp_id: impl Into<String>,
        event: EventKind,
        value: Option<String>,
        event_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            sequence_no,
            emp_id: emp_id.into(),
            emp_f_name: None,
            emp_l_name: None,
            designation: None,
            event,
            value,
            event_date,
            notes: None,
        }
    }

    /// Create an ONBOARD event carrying the employee's identifying fields
    pub fn onboard(
        sequence_no: i64,
        emp_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        designation: impl Into<String>,
        event_date: NaiveDate,
    ) -> Self {
        Self {
            emp_f_name: Some(first_name.into()),
            emp_l_name: Some(last_name.into()),
            designation: Some(designation.into()),
            ..Self::new(sequence_no, emp_id, EventKind::Onboard, None, event_date)
        }
    }

    /// Attach free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Parse `value` as a monetary amount
    ///
    /// Returns `None` when the value is absent or not a finite number.
    pub fn amount(&self) -> Option<f64> {
        self.value
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|amount| amount.is_finite())
    }
}
