//! Report shapes returned by the reporting endpoints

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee who joined in a given month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinDetail {
    pub emp_id: String,
    pub emp_f_name: Option<String>,
    pub emp_l_name: Option<String>,
    pub designation: Option<String>,
}

/// An employee who left in a given month, named from their ONBOARD record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitDetail {
    pub emp_id: String,
    pub emp_f_name: Option<String>,
    pub emp_l_name: Option<String>,
}

/// Salary totals for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalaryReport {
    pub month_year: String,
    pub total_salary: f64,
    /// Number of SALARY events in the month, not distinct employees
    pub total_employees: usize,
}

/// Everything paid to one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFinancialReport {
    pub emp_id: String,
    pub emp_f_name: String,
    pub emp_l_name: String,
    pub total_amount_paid: f64,
}

/// Salary, bonus and reimbursement totals for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAmountReleasedReport {
    pub month_year: String,
    pub total_amount: f64,
    /// Distinct employees paid in the month
    pub total_employees: usize,
}

/// Projection of a raw event for the yearly listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyFinancialEntry {
    pub event: String,
    pub emp_id: String,
    pub event_date: NaiveDate,
    pub event_value: Option<String>,
}
