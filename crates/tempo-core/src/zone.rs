//! Time zone handling.
//!
//! A [`Zone`] is either a named IANA zone backed by the chrono-tz database or
//! a fixed UTC offset. The environment default is discovered through
//! iana-time-zone and falls back to UTC when discovery fails.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ClockError;

/// A time zone usable for interpreting and rendering local date/time fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// A named zone from the IANA database, e.g. `Europe/Moscow`.
    Named(chrono_tz::Tz),
    /// A fixed offset from UTC, e.g. `+03:00`.
    Fixed(FixedOffset),
}

impl Zone {
    /// Returns the UTC zone.
    #[must_use]
    pub fn utc() -> Self {
        Zone::Named(chrono_tz::Tz::UTC)
    }

    /// Returns the environment's default zone.
    ///
    /// Looks up the host zone via iana-time-zone; when the lookup fails or
    /// reports a name missing from the zone database, falls back to UTC.
    #[must_use]
    pub fn environment() -> Self {
        match iana_time_zone::get_timezone() {
            Ok(name) => match name.parse() {
                Ok(zone) => zone,
                Err(_) => {
                    tracing::debug!(name, "environment zone not in database, using UTC");
                    Zone::utc()
                }
            },
            Err(err) => {
                tracing::debug!(error = %err, "environment zone lookup failed, using UTC");
                Zone::utc()
            }
        }
    }

    /// Parses a zone from an IANA name or a `±HH:MM` / `±HHMM` offset.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::UnknownZone`] when the input is neither.
    pub fn parse(input: &str) -> Result<Self, ClockError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("z") {
            return Ok(Zone::utc());
        }
        if let Some(offset) = parse_offset(trimmed) {
            return Ok(Zone::Fixed(offset));
        }
        trimmed
            .parse::<chrono_tz::Tz>()
            .map(Zone::Named)
            .map_err(|_| ClockError::UnknownZone {
                name: trimmed.to_owned(),
            })
    }

    /// Returns the normalized zone name, e.g. `Europe/Moscow` or `+03:00`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Zone::Named(tz) => tz.name().to_owned(),
            Zone::Fixed(offset) => offset.to_string(),
        }
    }

    /// Renders a UTC instant as local date/time fields in this zone.
    #[must_use]
    pub fn to_local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::Named(tz) => instant.with_timezone(tz).fixed_offset(),
            Zone::Fixed(offset) => instant.with_timezone(offset),
        }
    }

    /// Interprets naive local date/time fields in this zone as a UTC instant.
    ///
    /// Ambiguous local times (backward DST transitions) resolve to the
    /// earlier instant.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for local times skipped by a
    /// forward DST transition.
    pub fn to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>, ClockError> {
        let resolved = match self {
            Zone::Named(tz) => tz
                .from_local_datetime(&local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Fixed(offset) => offset
                .from_local_datetime(&local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        };
        resolved.ok_or_else(|| ClockError::OutOfRange {
            what: format!("local time {local} in zone {}", self.name()),
        })
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Zone {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::parse(s)
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Zone::parse(&name).map_err(D::Error::custom)
    }
}

/// Parses `±HH:MM` or `±HHMM` into a fixed offset.
fn parse_offset(input: &str) -> Option<FixedOffset> {
    let bytes = input.as_bytes();
    let sign = match bytes.first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let rest = &input[1..];
    // Indexed with get: non-ASCII input must fall through, not panic.
    let (hours, minutes) = match rest.len() {
        5 if rest.as_bytes()[2] == b':' => (rest.get(..2)?, rest.get(3..)?),
        4 => (rest.get(..2)?, rest.get(2..)?),
        _ => return None,
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_zone_parse_resolves_iana_name() {
        let zone = Zone::parse("Europe/Moscow").unwrap();

        assert_eq!(zone, Zone::Named(chrono_tz::Tz::Europe__Moscow));
        assert_eq!(zone.name(), "Europe/Moscow");
    }

    #[test]
    fn test_zone_parse_resolves_fixed_offset() {
        let with_colon = Zone::parse("+03:00").unwrap();
        let without_colon = Zone::parse("-0530").unwrap();

        assert_eq!(with_colon.name(), "+03:00");
        assert_eq!(without_colon.name(), "-05:30");
    }

    #[test]
    fn test_zone_parse_rejects_non_ascii_offset_like_input() {
        for input in ["+a\u{e9}b", "+\u{e9}:30", "-0\u{e9}3"] {
            let err = Zone::parse(input).unwrap_err();
            assert!(
                matches!(err, ClockError::UnknownZone { .. }),
                "expected rejection of {input:?}"
            );
        }
    }

    #[test]
    fn test_zone_to_utc_interprets_fixed_offset_fields() {
        let zone = Zone::parse("+03:00").unwrap();
        let local = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();

        let instant = zone.to_utc(local).unwrap();

        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_zone_parse_rejects_unknown_name() {
        let err = Zone::parse("Atlantis/Capital").unwrap_err();

        assert!(matches!(err, ClockError::UnknownZone { name } if name == "Atlantis/Capital"));
    }

    #[test]
    fn test_zone_round_trips_instant_through_local_fields() {
        let zone = Zone::parse("Europe/Berlin").unwrap();
        let instant = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();

        let local = zone.to_local(instant);
        let back = zone.to_utc(local.naive_local()).unwrap();

        assert_eq!(back, instant);
        assert_eq!(local.naive_local().to_string(), "2026-01-15 11:00:00");
    }

    #[test]
    fn test_zone_rejects_local_time_skipped_by_dst() {
        // Europe/Berlin jumps 02:00 -> 03:00 on 2026-03-29.
        let zone = Zone::parse("Europe/Berlin").unwrap();
        let skipped = NaiveDate::from_ymd_opt(2026, 3, 29)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();

        let err = zone.to_utc(skipped).unwrap_err();

        assert!(matches!(err, ClockError::OutOfRange { .. }));
    }

    #[test]
    fn test_zone_environment_resolves_to_some_zone() {
        let zone = Zone::environment();

        assert!(!zone.name().is_empty());
    }

    #[test]
    fn test_zone_serde_round_trips_as_name() {
        let zone = Zone::parse("Asia/Tokyo").unwrap();

        let json = serde_json::to_string(&zone).unwrap();
        let back: Zone = serde_json::from_str(&json).unwrap();

        assert_eq!(json, "\"Asia/Tokyo\"");
        assert_eq!(back, zone);
    }
}
