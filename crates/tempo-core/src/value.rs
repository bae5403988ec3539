//! The date-time value snapshot type.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClockError;
use crate::locale::LocaleTag;
use crate::zone::Zone;

/// Whether a value (or the creator producing it) follows the in-place or the
/// copy-on-write mutation protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutability {
    /// `set_*` operations mutate the value in place.
    Mutable,
    /// `set_*` operations are rejected; `with_*` operations return new
    /// values.
    Immutable,
}

/// An owned snapshot of an instant together with the zone and locale used to
/// render it.
///
/// Values are independent of the clock that produced them: configuration
/// changes after construction never affect an existing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTimeValue {
    instant: DateTime<Utc>,
    zone: Zone,
    locale: LocaleTag,
    mutability: Mutability,
}

impl DateTimeValue {
    /// Builds a snapshot from its parts.
    #[must_use]
    pub fn new(
        instant: DateTime<Utc>,
        zone: Zone,
        locale: LocaleTag,
        mutability: Mutability,
    ) -> Self {
        Self {
            instant,
            zone,
            locale,
            mutability,
        }
    }

    /// The instant as Unix seconds.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.instant.timestamp()
    }

    /// The instant as Unix milliseconds.
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    /// The instant, independent of zone and locale.
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The instant rendered as local fields in the value's zone.
    #[must_use]
    pub fn to_local(&self) -> DateTime<FixedOffset> {
        self.zone.to_local(self.instant)
    }

    /// The zone this value renders in.
    #[must_use]
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// The locale this value formats with.
    #[must_use]
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// Which mutation protocol this value follows.
    #[must_use]
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Replaces the locale in place.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::ImmutableValue`] on an immutable value.
    pub fn set_locale(&mut self, locale: LocaleTag) -> Result<(), ClockError> {
        self.ensure_mutable("set_locale")?;
        self.locale = locale;
        Ok(())
    }

    /// Returns a copy with the given locale.
    #[must_use]
    pub fn with_locale(&self, locale: LocaleTag) -> Self {
        Self {
            locale,
            ..self.clone()
        }
    }

    /// Replaces the rendering zone in place, preserving the instant.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::ImmutableValue`] on an immutable value.
    pub fn set_zone(&mut self, zone: Zone) -> Result<(), ClockError> {
        self.ensure_mutable("set_zone")?;
        self.zone = zone;
        Ok(())
    }

    /// Returns a copy rendering in the given zone, preserving the instant.
    #[must_use]
    pub fn with_zone(&self, zone: Zone) -> Self {
        Self {
            zone,
            ..self.clone()
        }
    }

    /// Replaces the instant in place from Unix seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::ImmutableValue`] on an immutable value and
    /// [`ClockError::OutOfRange`] for unrepresentable timestamps.
    pub fn set_timestamp(&mut self, secs: i64) -> Result<(), ClockError> {
        self.ensure_mutable("set_timestamp")?;
        self.instant = instant_from_secs(secs)?;
        Ok(())
    }

    /// Returns a copy at the given Unix second.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for unrepresentable timestamps.
    pub fn with_timestamp(&self, secs: i64) -> Result<Self, ClockError> {
        Ok(Self {
            instant: instant_from_secs(secs)?,
            ..self.clone()
        })
    }

    /// Formats the value with a strftime pattern, localized to the value's
    /// locale and rendered in its zone.
    #[must_use]
    pub fn format(&self, pattern: &str) -> String {
        self.to_local()
            .format_localized(pattern, self.locale.chrono_locale())
            .to_string()
    }

    fn ensure_mutable(&self, operation: &'static str) -> Result<(), ClockError> {
        match self.mutability {
            Mutability::Mutable => Ok(()),
            Mutability::Immutable => Err(ClockError::ImmutableValue { operation }),
        }
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_local().to_rfc3339())
    }
}

fn instant_from_secs(secs: i64) -> Result<DateTime<Utc>, ClockError> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| ClockError::OutOfRange {
        what: format!("timestamp {secs}"),
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample(mutability: Mutability) -> DateTimeValue {
        DateTimeValue::new(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            Zone::utc(),
            LocaleTag::default(),
            mutability,
        )
    }

    #[test]
    fn test_mutable_value_sets_fields_in_place() {
        let mut value = sample(Mutability::Mutable);

        value.set_timestamp(1_700_000_000).unwrap();
        value.set_locale(LocaleTag::parse("en").unwrap()).unwrap();
        value.set_zone(Zone::parse("Europe/Moscow").unwrap()).unwrap();

        assert_eq!(value.timestamp(), 1_700_000_000);
        assert_eq!(value.locale().as_str(), "en");
        assert_eq!(value.zone().name(), "Europe/Moscow");
    }

    #[test]
    fn test_immutable_value_rejects_in_place_mutation() {
        let mut value = sample(Mutability::Immutable);

        let err = value.set_timestamp(0).unwrap_err();

        assert!(matches!(
            err,
            ClockError::ImmutableValue {
                operation: "set_timestamp"
            }
        ));
        assert_eq!(value, sample(Mutability::Immutable));
    }

    #[test]
    fn test_with_operations_leave_original_untouched() {
        let value = sample(Mutability::Immutable);

        let shifted = value.with_timestamp(0).unwrap();
        let rezoned = value.with_zone(Zone::parse("+03:00").unwrap());

        assert_eq!(shifted.timestamp(), 0);
        assert_eq!(rezoned.zone().name(), "+03:00");
        assert_eq!(value.timestamp(), sample(Mutability::Immutable).timestamp());
        assert_eq!(value.zone().name(), "UTC");
    }

    #[test]
    fn test_zone_change_preserves_instant() {
        let value = sample(Mutability::Immutable);

        let rezoned = value.with_zone(Zone::parse("Asia/Tokyo").unwrap());

        assert_eq!(rezoned.timestamp(), value.timestamp());
        assert_eq!(rezoned.to_local().naive_local().to_string(), "2026-01-15 19:00:00");
    }

    #[test]
    fn test_format_uses_the_value_locale() {
        let value = sample(Mutability::Immutable);

        let russian = value.format("%B");
        let english = value
            .with_locale(LocaleTag::parse("en").unwrap())
            .format("%B");

        assert!(russian.to_lowercase().contains("янв"), "got {russian}");
        assert_eq!(english.to_lowercase(), "january");
    }

    #[test]
    fn test_display_renders_rfc3339_in_zone() {
        let value = sample(Mutability::Immutable).with_zone(Zone::parse("+03:00").unwrap());

        assert_eq!(value.to_string(), "2026-01-15T13:00:00+03:00");
    }
}
