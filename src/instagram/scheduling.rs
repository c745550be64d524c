//! Parsing of caller-supplied schedule times.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::InstagramError;

const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Rewrites the shorthands ISO-8601 allows into forms the chrono formats accept:
/// a trailing `Z` becomes `+00:00` and an hour-only time gains `:00` minutes.
fn normalize(value: &str) -> String {
    let mut normalized = value.trim().to_string();
    if normalized.len() > 10 && (normalized.ends_with('Z') || normalized.ends_with('z')) {
        normalized.truncate(normalized.len() - 1);
        normalized.push_str("+00:00");
    }

    // "YYYY-MM-DDTHH" optionally followed by an offset
    if normalized.len() >= 13 && normalized.is_char_boundary(13) {
        let (head, rest) = normalized.split_at(13);
        let bytes = head.as_bytes();
        let hour_only = (bytes[10] == b'T' || bytes[10] == b' ')
            && bytes[11..].iter().all(u8::is_ascii_digit)
            && (rest.is_empty() || rest.starts_with('+') || rest.starts_with('-'));
        if hour_only {
            return format!("{}:00{}", head, rest);
        }
    }

    normalized
}

/// Parses an ISO-8601 timestamp into a UTC instant.
///
/// A trailing `Z` and explicit offsets are honored, and seconds or minutes may be
/// omitted. Timestamps without an offset, and bare dates (midnight), are taken as UTC.
///
/// # Example
///
/// ```rust
/// use ig_autopost::parse_scheduled_time;
///
/// let at = parse_scheduled_time("2025-01-01T00:00:00Z").unwrap();
/// assert_eq!(at.timestamp(), 1735689600);
/// ```
pub fn parse_scheduled_time(value: &str) -> Result<DateTime<Utc>, InstagramError> {
    let normalized = normalize(value);
    let trimmed = normalized.as_str();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(InstagramError::InvalidScheduledTime {
        value: value.to_string(),
        reason: "expected an ISO-8601 date or date-time".to_string(),
    })
}

/// Converts an ISO-8601 schedule time into the integer Unix seconds the Graph API expects.
pub fn scheduled_publish_timestamp(value: &str) -> Result<i64, InstagramError> {
    parse_scheduled_time(value).map(|dt| dt.timestamp())
}
