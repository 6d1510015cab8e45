//! Per-employee and per-year financial reports

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::types::{EmployeeEvent, EmployeeFinancialReport, YearlyFinancialEntry};

use super::{amount_of, onboard_index, ReportResult};

/// Name used when an employee has no ONBOARD record
pub const UNKNOWN_NAME: &str = "Unknown";

/// Total salary, bonus and reimbursement paid to each employee
pub fn employee_financial_report(
    events: &[EmployeeEvent],
) -> ReportResult<BTreeMap<String, EmployeeFinancialReport>> {
    let onboarded = onboard_index(events);
    let mut reports: BTreeMap<String, EmployeeFinancialReport> = BTreeMap::new();

    for event in events.iter().filter(|e| e.event.is_monetary()) {
        let amount = amount_of(event)?;

        let report = reports.entry(event.emp_id.clone()).or_insert_with(|| {
            let (emp_f_name, emp_l_name) = match onboarded.get(event.emp_id.as_str()) {
                Some(onboard) => (
                    onboard.emp_f_name.clone().unwrap_or_default(),
                    onboard.emp_l_name.clone().unwrap_or_default(),
                ),
                None => (UNKNOWN_NAME.to_string(), UNKNOWN_NAME.to_string()),
            };
            EmployeeFinancialReport {
                emp_id: event.emp_id.clone(),
                emp_f_name,
                emp_l_name,
                total_amount_paid: 0.0,
            }
        });
        report.total_amount_paid += amount;
    }

    Ok(reports)
}

/// Every event, grouped by calendar year of its event date
pub fn yearly_financial_report(
    events: &[EmployeeEvent],
) -> BTreeMap<i32, Vec<YearlyFinancialEntry>> {
    let mut years: BTreeMap<i32, Vec<YearlyFinancialEntry>> = BTreeMap::new();

    for event in events {
        years
            .entry(event.event_date.year())
            .or_default()
            .push(YearlyFinancialEntry {
                event: event.event.as_str().to_string(),
                emp_id: event.emp_id.clone(),
                event_date: event.event_date,
                event_value: event.value.clone(),
            });
    }

    years
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::EventKind;

    #[test]
    fn test_employee_financial_report_sums_and_names() {
        let events = vec![
            onboard("EMP001", "John", "Doe", date(2023, 1, 10)),
            paid("EMP001", EventKind::Salary, "5000", date(2023, 2, 10)),
            paid("EMP001", EventKind::Bonus, "1000", date(2023, 3, 10)),
        ];

        let report = employee_financial_report(&events).unwrap();

        assert_eq!(report.len(), 1);
        let emp = &report["EMP001"];
        assert_eq!(emp.total_amount_paid, 6000.0);
        assert_eq!(emp.emp_f_name, "John");
        assert_eq!(emp.emp_l_name, "Doe");
    }

    #[test]
    fn test_employee_without_onboard_is_unknown() {
        let events = vec![
            paid("EMP404", EventKind::Reimbursement, "75.5", date(2023, 5, 1)),
            exit("EMP404", date(2023, 6, 1)),
        ];

        let report = employee_financial_report(&events).unwrap();

        let emp = &report["EMP404"];
        assert_eq!(emp.emp_f_name, UNKNOWN_NAME);
        assert_eq!(emp.emp_l_name, UNKNOWN_NAME);
        assert_eq!(emp.total_amount_paid, 75.5);
    }

    #[test]
    fn test_onboard_after_payment_still_names_employee() {
        let events = vec![
            paid("EMP001", EventKind::Salary, "10", date(2022, 12, 31)),
            onboard("EMP001", "John", "Doe", date(2023, 1, 10)),
        ];

        let report = employee_financial_report(&events).unwrap();

        assert_eq!(report["EMP001"].emp_f_name, "John");
    }

    #[test]
    fn test_yearly_report_partitions_all_events() {
        let events = vec![
            onboard("EMP001", "John", "Doe", date(2022, 12, 1)),
            paid("EMP001", EventKind::Salary, "5000", date(2022, 12, 31)),
            paid("EMP001", EventKind::Salary, "5100", date(2023, 1, 31)),
            exit("EMP001", date(2023, 6, 30)),
        ];

        let report = yearly_financial_report(&events);

        assert_eq!(report.len(), 2);
        assert_eq!(report[&2022].len(), 2);
        assert_eq!(report[&2023].len(), 2);
        let total: usize = report.values().map(Vec::len).sum();
        assert_eq!(total, events.len());

        let exit_entry = report[&2023].iter().find(|e| e.event == "EXIT").unwrap();
        assert_eq!(exit_entry.event_value.as_deref(), Some("2023-06-30"));
    }
}
