//! Date parsing and report keys

use chrono::{Datelike, NaiveDate};

/// Parse a `d-M-yyyy` date: one or two digit day and month, four digit year
///
/// Returns `None` for any other shape, for month 0 or above 12, and for day 0
/// or above 31. A day past the end of its month, such as `31-02-2023`, is
/// clamped to the month's last day.
pub fn parse_event_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(day, 1, 2) || !digits(month, 1, 2) || !digits(year, 4, 4) {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    if year < 1 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    // Day 29-31 past the end of a short month resolves to its last day.
    (28.min(day)..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
}

/// `YYYY-MM` key for monthly reports
pub fn month_year_key(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}
