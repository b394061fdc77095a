//! Appointment date parsing and display.
//!
//! The schedule form's `datetime-local` input is labelled UTC and read as
//! such. Backend timestamps arrive either as RFC 3339 or as naive ISO
//! strings without an offset, which are also taken as UTC.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a form or wire timestamp as UTC.
#[must_use]
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// ISO-8601 UTC with millisecond precision, e.g. `2030-01-02T09:30:00.000Z`.
#[must_use]
pub fn to_iso_utc(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Human-readable rendering for appointment lists; unparseable input is
/// shown as-is.
#[must_use]
pub fn display(raw: &str) -> String {
    parse_utc(raw).map_or_else(|| raw.to_owned(), |at| at.format("%Y-%m-%d %H:%M UTC").to_string())
}

/// Current instant.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
