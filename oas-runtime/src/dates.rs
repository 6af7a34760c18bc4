//! Date parsing for the `date` and `datetime` tags.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Values this short carry no time component (`2024-03-01`).
const DATE_ONLY_MAX_LEN: usize = 12;

/// Calendar date of a raw `date` value.
///
/// A bare date is taken as written. A value with a time component keeps the
/// date in its own offset, so the result never depends on the host time zone.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.len() <= DATE_ONLY_MAX_LEN {
        return NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();
    }
    parse_date_time(raw).map(|value| value.date_naive())
}

/// Instant of a raw `datetime` value.
///
/// Accepts RFC 3339, offset-less timestamps (read as UTC) and bare dates
/// (UTC midnight).
pub fn parse_date_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Instant of a numeric `datetime` value, in milliseconds since the epoch.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(millis).map(|value| value.fixed_offset())
}
