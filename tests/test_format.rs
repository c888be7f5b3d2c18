//! pt-BR formatting and calendar helper tests.

mod common;

use chrono::NaiveDate;
use jurisync_engine::calendar::{
    first_of_next_month, first_of_previous_month, month_key, month_label, trailing_months,
};
use jurisync_engine::format::{escape_html, format_currency, format_date};

// ---------------------------------------------------------------------------
// format
// ---------------------------------------------------------------------------

#[test]
fn currency_groups_thousands_with_dots() {
    assert_eq!(format_currency(1234.56), "R$ 1.234,56");
    assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
    assert_eq!(format_currency(999.0), "R$ 999,00");
}

#[test]
fn currency_zero_and_negative() {
    assert_eq!(format_currency(0.0), "R$ 0,00");
    assert_eq!(format_currency(-50.5), "-R$ 50,50");
}

#[test]
fn currency_rounds_to_cents() {
    assert_eq!(format_currency(1.999), "R$ 2,00");
    assert_eq!(format_currency(0.004), "R$ 0,00");
}

#[test]
fn date_is_day_month_year() {
    assert_eq!(format_date(common::at(2024, 6, 8)), "08/06/2024");
    assert_eq!(format_date(common::at(2023, 12, 31)), "31/12/2023");
}

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">O'Brien & Cia</a>"#),
        "&lt;a href=&quot;x&quot;&gt;O&#39;Brien &amp; Cia&lt;/a&gt;"
    );
    assert_eq!(escape_html("Locação"), "Locação");
}

// ---------------------------------------------------------------------------
// calendar
// ---------------------------------------------------------------------------

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn month_navigation_crosses_years() {
    assert_eq!(first_of_next_month(ymd(2023, 12, 31)), ymd(2024, 1, 1));
    assert_eq!(first_of_next_month(ymd(2024, 1, 31)), ymd(2024, 2, 1));
    assert_eq!(first_of_previous_month(ymd(2024, 1, 15)), ymd(2023, 12, 1));
    assert_eq!(first_of_previous_month(ymd(2024, 3, 31)), ymd(2024, 2, 1));
}

#[test]
fn trailing_months_are_oldest_first() {
    let months = trailing_months(common::now(), 3);
    assert_eq!(months, vec![ymd(2024, 4, 1), ymd(2024, 5, 1), ymd(2024, 6, 1)]);
}

#[test]
fn month_key_and_label() {
    assert_eq!(month_key(&ymd(2024, 2, 1)), "2024-02");
    assert_eq!(month_label(&ymd(2024, 2, 1)), "fev/24");
    assert_eq!(month_label(&ymd(2009, 12, 1)), "dez/09");
}
