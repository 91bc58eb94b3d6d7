//! Target-instant parsing.
//!
//! Callers may hand us an already-parsed instant or a textual timestamp.
//! Malformed text is rejected with [`ParseError`] rather than flowing
//! through as an invalid temporal value -- absence of a target (`None`)
//! and a bad target (`Err`) stay distinguishable.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::ParseError;

/// Naive formats accepted in addition to RFC 3339; all assumed UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a textual target timestamp into a UTC instant.
///
/// Accepts RFC 3339 (offset-aware), a handful of naive datetime formats
/// (assumed UTC), and a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_target(input: &str) -> Result<DateTime<Utc>, ParseError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        // Unwrap is safe: midnight exists for every calendar date.
        return Ok(date.and_hms_opt(0, 0, 0).unwrap().and_utc());
    }

    Err(ParseError::UnrecognizedTarget {
        input: trimmed.to_string(),
    })
}
