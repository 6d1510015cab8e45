//! Month-keyed reports

use std::collections::{BTreeMap, HashSet};

use crate::types::{
    EmployeeEvent, EventKind, ExitDetail, JoinDetail, MonthlyAmountReleasedReport,
    MonthlySalaryReport,
};
use crate::utils::month_year_key;

use super::{amount_of, onboard_index, ReportResult};

/// Employees who onboarded, grouped by month of the ONBOARD event
pub fn monthly_joins(events: &[EmployeeEvent]) -> BTreeMap<String, Vec<JoinDetail>> {
    let mut joins: BTreeMap<String, Vec<JoinDetail>> = BTreeMap::new();

    for event in events.iter().filter(|e| e.event == EventKind::Onboard) {
        joins
            .entry(month_year_key(event.event_date))
            .or_default()
            .push(JoinDetail {
                emp_id: event.emp_id.clone(),
                emp_f_name: event.emp_f_name.clone(),
                emp_l_name: event.emp_l_name.clone(),
                designation: event.designation.clone(),
            });
    }

    joins
}

/// Employees who exited, grouped by month of the EXIT event
///
/// Names come from the ONBOARD record. An exit with no ONBOARD record is
/// kept as `None` so each month's list length equals its exit count.
pub fn monthly_exits(events: &[EmployeeEvent]) -> BTreeMap<String, Vec<Option<ExitDetail>>> {
    let onboarded = onboard_index(events);
    let mut exits: BTreeMap<String, Vec<Option<ExitDetail>>> = BTreeMap::new();

    for event in events.iter().filter(|e| e.event == EventKind::Exit) {
        let detail = onboarded.get(event.emp_id.as_str()).map(|onboard| ExitDetail {
            emp_id: onboard.emp_id.clone(),
            emp_f_name: onboard.emp_f_name.clone(),
            emp_l_name: onboard.emp_l_name.clone(),
        });
        exits
            .entry(month_year_key(event.event_date))
            .or_default()
            .push(detail);
    }

    exits
}

/// Salary totals per month
///
/// `total_employees` counts SALARY events, so an employee paid twice in a
/// month is counted twice.
pub fn monthly_salary_report(
    events: &[EmployeeEvent],
) -> ReportResult<BTreeMap<String, MonthlySalaryReport>> {
    let mut reports: BTreeMap<String, MonthlySalaryReport> = BTreeMap::new();

    for event in events.iter().filter(|e| e.event == EventKind::Salary) {
        let salary = amount_of(event)?;
        let month_year = month_year_key(event.event_date);

        let report = reports
            .entry(month_year.clone())
            .or_insert_with(|| MonthlySalaryReport {
                month_year,
                total_salary: 0.0,
                total_employees: 0,
            });
        report.total_salary += salary;
        report.total_employees += 1;
    }

    Ok(reports)
}

/// Salary, bonus and reimbursement totals per month, with distinct payees
pub fn monthly_amount_released(
    events: &[EmployeeEvent],
) -> ReportResult<BTreeMap<String, MonthlyAmountReleasedReport>> {
    let mut totals: BTreeMap<String, (f64, HashSet<&str>)> = BTreeMap::new();

    for event in events.iter().filter(|e| e.event.is_monetary()) {
        let amount = amount_of(event)?;
        let (total, payees) = totals.entry(month_year_key(event.event_date)).or_default();
        *total += amount;
        payees.insert(event.emp_id.as_str());
    }

    Ok(totals
        .into_iter()
        .map(|(month_year, (total_amount, payees))| {
            let report = MonthlyAmountReleasedReport {
                month_year: month_year.clone(),
                total_amount,
                total_employees: payees.len(),
            };
            (month_year, report)
        })
        .collect())
}
