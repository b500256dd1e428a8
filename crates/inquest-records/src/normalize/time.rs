//! Timestamp coercion.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Date-time layouts accepted, tried in order.
const DATETIME_FORMATS: [&str; 9] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d %B %Y %H:%M",
];

/// Date-only layouts; these resolve to midnight.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d %B %Y", "%B %d, %Y"];

/// Coerce a timestamp-like value into a wall-clock date-time.
///
/// Offsets in RFC 3339 input are dropped and the local wall-clock time is
/// kept, since investigation timelines are read in the time zone of the
/// occurrence. Integers are read as Unix seconds.
pub(crate) fn parse_timestamp(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(raw) => parse_timestamp_str(raw),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(dt);
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
