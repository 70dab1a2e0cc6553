use super::*;
use time::macros::{date, datetime};

// =============================================================
// Age derivation
// =============================================================

#[test]
fn age_counts_full_years_on_birthday() {
    assert_eq!(age_in_years(date!(2020 - 10 - 16), date!(2026 - 10 - 16)), 6);
}

#[test]
fn age_is_one_less_before_birthday_this_year() {
    assert_eq!(age_in_years(date!(2020 - 12 - 01), date!(2026 - 10 - 16)), 5);
    assert_eq!(age_in_years(date!(2020 - 10 - 17), date!(2026 - 10 - 16)), 5);
}

#[test]
fn age_after_birthday_this_year() {
    assert_eq!(age_in_years(date!(2020 - 01 - 31), date!(2026 - 10 - 16)), 6);
}

#[test]
fn age_is_zero_for_newborn() {
    assert_eq!(age_in_years(date!(2026 - 03 - 01), date!(2026 - 10 - 16)), 0);
}

#[test]
fn display_age_falls_back_to_placeholder() {
    let today = date!(2026 - 10 - 16);
    assert_eq!(display_age(Some("2019-10-16"), today), "7");
    assert_eq!(display_age(None, today), "?");
    assert_eq!(display_age(Some("not a date"), today), "?");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_datetime_ignores_seconds_and_fraction() {
    assert_eq!(parse_datetime("2026-03-05T14:30:00.123456"), Some(datetime!(2026-03-05 14:30)));
    assert_eq!(parse_datetime("2026-03-05 14:30"), Some(datetime!(2026-03-05 14:30)));
}

#[test]
fn parse_datetime_rejects_short_input() {
    assert_eq!(parse_datetime("2026-03-05"), None);
}

#[test]
fn parse_date_accepts_datetime_prefix() {
    assert_eq!(parse_date("2026-03-05T14:30:00"), Some(date!(2026 - 03 - 05)));
}

// =============================================================
// Display
// =============================================================

#[test]
fn display_date_uses_short_month() {
    assert_eq!(display_date(Some("2026-03-05")), "Mar 5, 2026");
    assert_eq!(display_date(None), "?");
}

#[test]
fn display_datetime_uses_twelve_hour_clock() {
    assert_eq!(display_datetime("2026-03-05T14:30:00"), "Mar 5, 2026, 02:30 PM");
    assert_eq!(display_datetime("2026-11-20T09:05"), "Nov 20, 2026, 09:05 AM");
    assert_eq!(display_datetime(""), "?");
}

#[test]
fn min_booking_input_is_one_day_ahead() {
    assert_eq!(min_booking_input(datetime!(2026-12-31 23:15)), "2027-01-01T23:15");
}
