//! Row parser
//!
//! Turns one line of an upload into an `EmployeeEvent`. ONBOARD rows carry
//! three extra columns (first name, last name, designation), which shifts the
//! event-kind token from column 2 to column 5:
//!
//! ```text
//! ONBOARD:  seq, empId, fName, lName, designation, ONBOARD, onboardDate, eventDate, notes
//! others:   seq, empId, KIND, value, eventDate, notes
//! ```

use thiserror::Error;

use crate::types::{EmployeeEvent, EventKind};
use crate::utils::parse_event_date;

/// Rows wider than this carry the event kind at `ONBOARD_KIND_INDEX`
const WIDE_ROW_THRESHOLD: usize = 6;
const ONBOARD_KIND_INDEX: usize = 5;
const KIND_INDEX: usize = 2;

/// Why a single row was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown event type: {0}")]
    UnknownEventKind(String),
    #[error("Malformed row: {0}")]
    MalformedRow(String),
    #[error("Malformed date '{0}': expected d-M-yyyy")]
    MalformedDate(String),
}

/// Split a row on commas that are not inside a double-quoted segment
///
/// Fields are trimmed; quotes are kept so that only `notes` is unquoted.
/// Trailing empty fields are dropped, so a dangling comma does not widen
/// the row.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(line[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(line[start..].trim());

    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Strip one leading and one trailing double quote
fn unquote(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

fn required<'a>(fields: &[&'a str], index: usize, name: &str) -> Result<&'a str, ParseError> {
    match fields.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ParseError::MalformedRow(format!(
            "missing {} (column {})",
            name,
            index + 1
        ))),
    }
}

fn notes_at(fields: &[&str], index: usize) -> Option<String> {
    fields
        .get(index)
        .map(|raw| unquote(raw))
        .filter(|notes| !notes.is_empty())
        .map(str::to_string)
}

fn date_at(fields: &[&str], index: usize) -> Result<chrono::NaiveDate, ParseError> {
    let raw = required(fields, index, "event date")?;
    parse_event_date(raw).ok_or_else(|| ParseError::MalformedDate(raw.to_string()))
}

fn amount_at(fields: &[&str], index: usize) -> Result<String, ParseError> {
    let raw = required(fields, index, "amount")?;
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(raw.to_string()),
        _ => Err(ParseError::MalformedRow(format!(
            "amount '{}' is not a non-negative number",
            raw
        ))),
    }
}

/// Locate and resolve the event-kind token
pub fn event_kind_of(fields: &[&str]) -> Result<EventKind, ParseError> {
    let index = if fields.len() > WIDE_ROW_THRESHOLD {
        ONBOARD_KIND_INDEX
    } else {
        KIND_INDEX
    };
    let token = fields.get(index).copied().unwrap_or("");
    token
        .parse::<EventKind>()
        .map_err(|e| ParseError::UnknownEventKind(e.0))
}

/// Parse one line into an event (id unassigned)
pub fn parse_line(line: &str) -> Result<EmployeeEvent, ParseError> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(ParseError::MalformedRow(format!(
            "expected at least 3 columns, found {}",
            fields.len()
        )));
    }

    let sequence_no = fields[0].parse::<i64>().map_err(|_| {
        ParseError::MalformedRow(format!("sequence number '{}' is not an integer", fields[0]))
    })?;
    let emp_id = required(&fields, 1, "employee id")?;
    let kind = event_kind_of(&fields)?;

    let event = match kind {
        EventKind::Onboard => {
            let first_name = required(&fields, 2, "first name")?;
            let last_name = required(&fields, 3, "last name")?;
            let designation = required(&fields, 4, "designation")?;
            let onboard_date = required(&fields, 6, "onboarding date")?;
            EmployeeEvent {
                value: Some(onboard_date.to_string()),
                notes: notes_at(&fields, 8),
                ..EmployeeEvent::onboard(
                    sequence_no,
                    emp_id,
                    first_name,
                    last_name,
                    designation,
                    date_at(&fields, 7)?,
                )
            }
        }
        EventKind::Salary | EventKind::Bonus | EventKind::Reimbursement => {
            let amount = amount_at(&fields, 3)?;
            EmployeeEvent {
                notes: notes_at(&fields, 5),
                ..EmployeeEvent::new(sequence_no, emp_id, kind, Some(amount), date_at(&fields, 4)?)
            }
        }
        EventKind::Exit => {
            let exit_date = required(&fields, 3, "exit date")?;
            EmployeeEvent {
                notes: notes_at(&fields, 5),
                ..EmployeeEvent::new(
                    sequence_no,
                    emp_id,
                    kind,
                    Some(exit_date.to_string()),
                    date_at(&fields, 4)?,
                )
            }
        }
    };

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_split_fields_respects_quotes() {
        let fields = split_fields(r#"1, EMP001 ,SALARY,5000,10-01-2023,"Paid, on time""#);
        assert_eq!(
            fields,
            vec!["1", "EMP001", "SALARY", "5000", "10-01-2023", "\"Paid, on time\""]
        );
    }

    #[test]
    fn test_split_fields_drops_trailing_empties() {
        assert_eq!(
            split_fields("1,EMP001,SALARY,5000,10-01-2023,notes,,"),
            vec!["1", "EMP001", "SALARY", "5000", "10-01-2023", "notes"]
        );
        assert_eq!(split_fields("1,,x"), vec!["1", "", "x"]);
    }

    #[test]
    fn test_parse_onboard_row() {
        let event = parse_line("1,EMP001,John,Doe,Developer,ONBOARD,1000,01-01-2023,Notes").unwrap();

        assert_eq!(event.id, None);
        assert_eq!(event.sequence_no, 1);
        assert_eq!(event.emp_id, "EMP001");
        assert_eq!(event.emp_f_name.as_deref(), Some("John"));
        assert_eq!(event.emp_l_name.as_deref(), Some("Doe"));
        assert_eq!(event.designation.as_deref(), Some("Developer"));
        assert_eq!(event.event, EventKind::Onboard);
        assert_eq!(event.value.as_deref(), Some("1000"));
        assert_eq!(event.event_date, date(2023, 1, 1));
        assert_eq!(event.notes.as_deref(), Some("Notes"));
    }

    #[test]
    fn test_parse_monetary_rows() {
        let salary = parse_line("2,EMP001,SALARY,5000,10-1-2023,\"January, regular\"").unwrap();
        assert_eq!(salary.event, EventKind::Salary);
        assert_eq!(salary.value.as_deref(), Some("5000"));
        assert_eq!(salary.event_date, date(2023, 1, 10));
        assert_eq!(salary.notes.as_deref(), Some("January, regular"));
        assert_eq!(salary.emp_f_name, None);

        let bonus = parse_line("3,EMP002,BONUS,250.75,5-3-2023,Q1").unwrap();
        assert_eq!(bonus.event, EventKind::Bonus);
        assert_eq!(bonus.amount(), Some(250.75));

        let reimbursement = parse_line("4,EMP002,REIMBURSEMENT,99,6-3-2023,Travel").unwrap();
        assert_eq!(reimbursement.event, EventKind::Reimbursement);
    }

    #[test]
    fn test_parse_exit_row() {
        let exit = parse_line("5,EMP003,EXIT,30-06-2023,30-06-2023,Resigned").unwrap();
        assert_eq!(exit.event, EventKind::Exit);
        assert_eq!(exit.value.as_deref(), Some("30-06-2023"));
        assert_eq!(exit.event_date, date(2023, 6, 30));
    }

    #[test]
    fn test_notes_are_optional() {
        let event = parse_line("6,EMP001,SALARY,5000,10-01-2023").unwrap();
        assert_eq!(event.notes, None);

        let event = parse_line("6,EMP001,SALARY,5000,10-01-2023,\"\"").unwrap();
        assert_eq!(event.notes, None);
    }

    #[test]
    fn test_unknown_event_kind() {
        let err = parse_line("1,EMP001,John,Doe,Developer,INVALID_TYPE,1000,01-01-2023,Notes")
            .unwrap_err();
        assert_eq!(err, ParseError::UnknownEventKind("INVALID_TYPE".to_string()));
        assert_eq!(err.to_string(), "Unknown event type: INVALID_TYPE");

        let err = parse_line("1,EMP001,salary,5000,01-01-2023,x").unwrap_err();
        assert_eq!(err, ParseError::UnknownEventKind("salary".to_string()));
    }

    #[test]
    fn test_malformed_rows() {
        assert!(matches!(
            parse_line("1,EMP001").unwrap_err(),
            ParseError::MalformedRow(_)
        ));
        assert!(matches!(
            parse_line("x,EMP001,SALARY,5000,01-01-2023,n").unwrap_err(),
            ParseError::MalformedRow(_)
        ));
        assert!(matches!(
            parse_line("1,EMP001,SALARY,abc,01-01-2023,n").unwrap_err(),
            ParseError::MalformedRow(_)
        ));
        assert!(matches!(
            parse_line("1,EMP001,SALARY,-10,01-01-2023,n").unwrap_err(),
            ParseError::MalformedRow(_)
        ));
        assert!(matches!(
            parse_line("1,EMP001,SALARY,5000").unwrap_err(),
            ParseError::MalformedRow(_)
        ));
        assert!(matches!(
            parse_line("1,EMP001,,Doe,Developer,ONBOARD,1000,01-01-2023,n").unwrap_err(),
            ParseError::MalformedRow(_)
        ));
    }

    #[test]
    fn test_malformed_date() {
        let err = parse_line("1,EMP001,SALARY,5000,2023-01-10,n").unwrap_err();
        assert_eq!(err, ParseError::MalformedDate("2023-01-10".to_string()));

        let err = parse_line("1,EMP001,John,Doe,Dev,ONBOARD,x,32-02-2023,n").unwrap_err();
        assert_eq!(err, ParseError::MalformedDate("32-02-2023".to_string()));

        let err = parse_line("1,EMP001,SALARY,5000,15-13-2023,n").unwrap_err();
        assert_eq!(err, ParseError::MalformedDate("15-13-2023".to_string()));
    }

    #[test]
    fn test_day_past_month_end_is_clamped() {
        let salary = parse_line("1,EMP001,SALARY,5000,31-02-2023,n").unwrap();
        assert_eq!(salary.event_date, date(2023, 2, 28));

        let onboard = parse_line("1,EMP001,John,Doe,Dev,ONBOARD,x,31-02-2023,n").unwrap();
        assert_eq!(onboard.event_date, date(2023, 2, 28));

        let exit = parse_line("2,EMP001,EXIT,31-04-2023,31-04-2023,Left").unwrap();
        assert_eq!(exit.event_date, date(2023, 4, 30));
        assert_eq!(exit.value.as_deref(), Some("31-04-2023"));
    }

    #[test]
    fn test_quoted_non_notes_column_keeps_quotes() {
        let event =
            parse_line("1,EMP001,John,Doe,\"Lead, Platform\",ONBOARD,1-1-2023,1-1-2023,\"n\"")
                .unwrap();

        assert_eq!(event.event, EventKind::Onboard);
        assert_eq!(event.designation.as_deref(), Some("\"Lead, Platform\""));
        assert_eq!(event.emp_l_name.as_deref(), Some("Doe"));
        assert_eq!(event.notes.as_deref(), Some("n"));
    }

    #[test]
    fn test_empty_kind_is_unknown() {
        let err = parse_line("1,EMP001,,5000,1-1-2023,n").unwrap_err();
        assert_eq!(err, ParseError::UnknownEventKind(String::new()));
        assert_eq!(err.to_string(), "Unknown event type: ");

        let err = parse_line("1,EMP001,John,Doe,Dev,,1-1-2023,1-1-2023,n").unwrap_err();
        assert_eq!(err, ParseError::UnknownEventKind(String::new()));
    }
}
