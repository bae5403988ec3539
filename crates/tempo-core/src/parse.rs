//! Free-form date/time classification.
//!
//! [`parse_flexible`] recognizes the input shapes accepted by the clock's
//! free-form paths and returns a [`Parsed`] classification; turning that into
//! an instant is creator business since it may need a zone and a time source.
//! Every failure is surfaced as a [`ClockError`] result, never through
//! ambient state.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ClockError;

/// Date-and-time patterns tried for free-form input, canonical first.
const DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

/// Date-only patterns tried for free-form input.
const DATE_PATTERNS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Time-of-day patterns tried for free-form input.
const TIME_PATTERNS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// The classified form of a free-form input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed {
    /// A `@`-marked Unix epoch offset.
    Epoch {
        /// Whole seconds since the epoch.
        secs: i64,
        /// Fractional part, in nanoseconds.
        nanos: u32,
    },
    /// An absolute instant carrying its own offset (RFC 3339 / RFC 2822).
    Instant(DateTime<FixedOffset>),
    /// Naive local date and time, to be interpreted in a zone.
    Local(NaiveDateTime),
    /// Naive local date, midnight implied.
    Date(NaiveDate),
    /// Time of day on the current date.
    Time(NaiveTime),
    /// The literal `now` keyword.
    Now,
    /// Midnight of the current date shifted by whole days
    /// (`today`, `tomorrow`, `yesterday`).
    DayStart {
        /// Day shift relative to the current date.
        offset_days: i64,
    },
}

/// Classifies a free-form time string.
///
/// # Errors
///
/// Returns [`ClockError::Parse`] with the underlying diagnostic when the
/// input matches no accepted shape, and [`ClockError::Unrecognized`] for a
/// malformed `@` epoch marker.
pub fn parse_flexible(input: &str) -> Result<Parsed, ClockError> {
    let trimmed = input.trim();

    match trimmed.to_ascii_lowercase().as_str() {
        "now" => return Ok(Parsed::Now),
        "today" => return Ok(Parsed::DayStart { offset_days: 0 }),
        "tomorrow" => return Ok(Parsed::DayStart { offset_days: 1 }),
        "yesterday" => return Ok(Parsed::DayStart { offset_days: -1 }),
        _ => {}
    }

    if let Some(rest) = trimmed.strip_prefix('@') {
        return parse_epoch(rest);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Parsed::Instant(instant));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(Parsed::Instant(instant));
    }
    for pattern in DATETIME_PATTERNS {
        if let Ok(local) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(Parsed::Local(local));
        }
    }
    for pattern in DATE_PATTERNS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, pattern) {
            return Ok(Parsed::Date(date));
        }
    }
    for pattern in TIME_PATTERNS {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, pattern) {
            return Ok(Parsed::Time(time));
        }
    }

    // Surface the canonical pattern's diagnostic for the whole attempt.
    match NaiveDateTime::parse_from_str(trimmed, DATETIME_PATTERNS[0]) {
        Ok(local) => Ok(Parsed::Local(local)),
        Err(err) => Err(err.into()),
    }
}

/// Probes whether a value is timestamp-like by prepending the `@` epoch
/// marker and reclassifying.
///
/// # Errors
///
/// Returns the classification error when the marked input does not parse as
/// an epoch offset.
pub fn probe_timestamp(value: &str) -> Result<i64, ClockError> {
    match parse_flexible(&format!("@{}", value.trim()))? {
        Parsed::Epoch { secs, .. } => Ok(secs),
        _ => Err(ClockError::Unrecognized {
            input: value.to_owned(),
        }),
    }
}

fn parse_epoch(rest: &str) -> Result<Parsed, ClockError> {
    if let Ok(secs) = rest.parse::<i64>() {
        return Ok(Parsed::Epoch { secs, nanos: 0 });
    }
    if let Ok(fractional) = rest.parse::<f64>() {
        if fractional.is_finite() {
            // Floor keeps the nanos additive for negative offsets:
            // -1.5 is second -2 plus half a second forward.
            #[allow(clippy::cast_possible_truncation)]
            let secs = fractional.floor() as i64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let nanos = ((fractional - fractional.floor()) * 1e9).round() as u32;
            return Ok(Parsed::Epoch {
                secs,
                nanos: nanos.min(999_999_999),
            });
        }
    }
    Err(ClockError::Unrecognized {
        input: format!("@{rest}"),
    })
}
