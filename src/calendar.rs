//! UTC calendar-month helpers shared by the dashboard and export presets.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// First day of the month following the one containing `date`.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let probe = first_of_month(date) + Duration::days(32);
    first_of_month(probe)
}

/// First day of the month before the one containing `date`.
pub fn first_of_previous_month(date: NaiveDate) -> NaiveDate {
    first_of_month(first_of_month(date) - Duration::days(1))
}

/// Inclusive instant bounds of the calendar month containing `now`.
///
/// The upper bound is the last millisecond of the month.
pub fn month_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let first = first_of_month(now.date_naive());
    let next = first_of_next_month(first);
    let start = first.and_time(NaiveTime::MIN).and_utc();
    let end = next.and_time(NaiveTime::MIN).and_utc() - Duration::milliseconds(1);
    (start, end)
}

/// The trailing `count` month starts ending at the month of `now`, oldest first.
pub fn trailing_months(now: DateTime<Utc>, count: usize) -> Vec<NaiveDate> {
    let mut months = Vec::with_capacity(count);
    let mut cursor = first_of_month(now.date_naive());
    for _ in 0..count {
        months.push(cursor);
        cursor = first_of_previous_month(cursor);
    }
    months.reverse();
    months
}

/// `YYYY-MM` bucket key.
pub fn month_key<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Short pt-BR label, e.g. `jun/24`.
pub fn month_label<D: Datelike>(date: &D) -> String {
    format!(
        "{}/{:02}",
        MONTH_ABBREVIATIONS[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}
