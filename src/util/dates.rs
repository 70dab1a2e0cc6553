//! Date parsing, age derivation, and display formatting.
//!
//! The backend sends dates of birth as `YYYY-MM-DD` and appointment times as
//! naive ISO-8601 (`YYYY-MM-DDTHH:MM[:SS[.ffffff]]`). Times are displayed as
//! sent; no timezone conversion is applied.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, PrimitiveDateTime};

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const ISO_MINUTE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]T[hour]:[minute]");
const DISPLAY_DATE: &[BorrowedFormatItem<'_>] = format_description!("[month repr:short] [day padding:none], [year]");
const DISPLAY_DATETIME: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]");

/// Placeholder shown for missing or unparsable values.
pub const UNKNOWN: &str = "?";

/// Parse the leading `YYYY-MM-DD` of `raw`.
pub fn parse_date(raw: &str) -> Option<Date> {
    let head = raw.trim().get(..10)?;
    Date::parse(head, ISO_DATE).ok()
}

/// Parse the leading `YYYY-MM-DDTHH:MM` of `raw`; seconds and offsets are ignored.
/// A space separator is accepted in place of `T`.
pub fn parse_datetime(raw: &str) -> Option<PrimitiveDateTime> {
    let head = raw.trim().get(..16)?;
    let normalized = head.replacen(' ', "T", 1);
    PrimitiveDateTime::parse(&normalized, ISO_MINUTE).ok()
}

/// Whole years elapsed between `dob` and `today`.
pub fn age_in_years(dob: Date, today: Date) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month() as u8, today.day()) < (dob.month() as u8, dob.day()) {
        age -= 1;
    }
    age
}

/// Age label for a raw dob, `?` when absent or unparsable.
pub fn display_age(dob: Option<&str>, today: Date) -> String {
    dob.and_then(parse_date)
        .map_or_else(|| UNKNOWN.to_owned(), |d| age_in_years(d, today).to_string())
}

/// `Mar 5, 2026`, or `?`.
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .and_then(|d| d.format(DISPLAY_DATE).ok())
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

/// `Mar 5, 2026` for the date part of an appointment datetime, or `?`.
pub fn display_day_of(raw: &str) -> String {
    display_date(Some(raw))
}

/// `Mar 5, 2026, 02:30 PM`, or `?`.
pub fn display_datetime(raw: &str) -> String {
    parse_datetime(raw)
        .and_then(|dt| dt.format(DISPLAY_DATETIME).ok())
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

/// `datetime-local` input `min` value: one day after `now`.
pub fn min_booking_input(now: PrimitiveDateTime) -> String {
    let tomorrow = now.checked_add(Duration::DAY).unwrap_or(now);
    tomorrow.format(ISO_MINUTE).unwrap_or_default()
}
