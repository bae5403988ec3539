//! Distinguishable `Creator` double for configuration tests.

use chrono::Duration;
use tempo_core::creator::{Creator, DateTimeParts, StandardCreator};
use tempo_core::error::ClockError;
use tempo_core::time_source::TimeSource;
use tempo_core::value::{DateTimeValue, Mutability};
use tempo_core::zone::Zone;

/// A creator that reports "now" shifted by a fixed offset, so tests can
/// observe which creator a clock slot holds. Every other operation delegates
/// to the standard creator.
#[derive(Debug)]
pub struct OffsetCreator {
    inner: StandardCreator,
    shift: Duration,
}

impl OffsetCreator {
    /// A shifted creator producing in-place values.
    #[must_use]
    pub fn mutable(shift: Duration) -> Self {
        Self {
            inner: StandardCreator::mutable(),
            shift,
        }
    }

    /// A shifted creator producing copy-on-write values.
    #[must_use]
    pub fn immutable(shift: Duration) -> Self {
        Self {
            inner: StandardCreator::immutable(),
            shift,
        }
    }
}

impl Creator for OffsetCreator {
    fn mutability(&self) -> Mutability {
        self.inner.mutability()
    }

    fn now(&self, zone: &Zone, source: &dyn TimeSource) -> DateTimeValue {
        let value = self.inner.now(zone, source);
        value
            .with_timestamp(value.timestamp() + self.shift.num_seconds())
            .expect("shifted instant out of range")
    }

    fn from_timestamp(&self, secs: i64, zone: &Zone) -> Result<DateTimeValue, ClockError> {
        self.inner.from_timestamp(secs, zone)
    }

    fn from_timestamp_millis(
        &self,
        millis: i64,
        zone: &Zone,
    ) -> Result<DateTimeValue, ClockError> {
        self.inner.from_timestamp_millis(millis, zone)
    }

    fn from_format(
        &self,
        pattern: &str,
        input: &str,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError> {
        self.inner.from_format(pattern, input, zone, source)
    }

    fn from_time_string(
        &self,
        input: &str,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError> {
        self.inner.from_time_string(input, zone, source)
    }

    fn from_components(
        &self,
        parts: &DateTimeParts,
        zone: &Zone,
    ) -> Result<DateTimeValue, ClockError> {
        self.inner.from_components(parts, zone)
    }

    fn from_time(
        &self,
        hour: u32,
        minute: u32,
        second: u32,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError> {
        self.inner.from_time(hour, minute, second, zone, source)
    }

    fn from_mutable(&self, value: &DateTimeValue) -> DateTimeValue {
        self.inner.from_mutable(value)
    }

    fn from_immutable(&self, value: &DateTimeValue) -> DateTimeValue {
        self.inner.from_immutable(value)
    }
}
