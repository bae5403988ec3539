//! The construction protocol and its standard implementations.
//!
//! A [`Creator`] is the full set of construction capabilities a clock slot
//! must provide. The two standard creators cover the built-in mutable and
//! immutable variants; alternative creators can be plugged into a clock as
//! long as they declare the mutability their slot requires.

use std::fmt;

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::ClockError;
use crate::locale::LocaleTag;
use crate::parse::{self, Parsed};
use crate::time_source::TimeSource;
use crate::value::{DateTimeValue, Mutability};
use crate::zone::Zone;

/// Partial year-through-second components for calendar construction.
///
/// Trailing components are optional and default to the start of their range:
/// month and day to 1, time-of-day fields to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeParts {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: Option<u32>,
    /// Day of month, 1-31.
    pub day: Option<u32>,
    /// Hour, 0-23.
    pub hour: Option<u32>,
    /// Minute, 0-59.
    pub minute: Option<u32>,
    /// Second, 0-59.
    pub second: Option<u32>,
}

impl DateTimeParts {
    /// Parts with only the year set.
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
            hour: None,
            minute: None,
            second: None,
        }
    }

    /// Parts with a full calendar date.
    #[must_use]
    pub fn with_date(year: i32, month: u32, day: u32) -> Self {
        Self {
            month: Some(month),
            day: Some(day),
            ..Self::new(year)
        }
    }

    /// Adds a time of day to the parts.
    #[must_use]
    pub fn and_time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self.second = Some(second);
        self
    }

    /// Builds parts from a year..second integer sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidComponentCount`] for sequences of 0 or
    /// more than 6 elements and [`ClockError::OutOfRange`] for negative
    /// month-through-second components.
    pub fn from_slice(components: &[i32]) -> Result<Self, ClockError> {
        if components.is_empty() || components.len() > 6 {
            return Err(ClockError::InvalidComponentCount {
                len: components.len(),
            });
        }
        Ok(Self {
            year: components[0],
            month: component(components, 1, "month")?,
            day: component(components, 2, "day")?,
            hour: component(components, 3, "hour")?,
            minute: component(components, 4, "minute")?,
            second: component(components, 5, "second")?,
        })
    }
}

fn component(components: &[i32], index: usize, what: &str) -> Result<Option<u32>, ClockError> {
    components
        .get(index)
        .map(|&raw| {
            u32::try_from(raw).map_err(|_| ClockError::OutOfRange {
                what: format!("{what} {raw}"),
            })
        })
        .transpose()
}

/// The construction capability set required of a clock's creator slot.
///
/// Operations that are relative to the current instant take the clock's
/// [`TimeSource`] so they stay deterministic under test.
pub trait Creator: fmt::Debug + Send + Sync {
    /// The mutation protocol of the values this creator produces.
    fn mutability(&self) -> Mutability;

    /// The current instant in the given zone.
    fn now(&self, zone: &Zone, source: &dyn TimeSource) -> DateTimeValue;

    /// A value at the given Unix second.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for unrepresentable timestamps.
    fn from_timestamp(&self, secs: i64, zone: &Zone) -> Result<DateTimeValue, ClockError>;

    /// A value at the given Unix millisecond.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for unrepresentable timestamps.
    fn from_timestamp_millis(&self, millis: i64, zone: &Zone)
    -> Result<DateTimeValue, ClockError>;

    /// Strict parse of `input` against a strftime `pattern`, interpreted in
    /// the given zone unless the pattern carries its own offset.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Parse`] with the parser's diagnostic.
    fn from_format(
        &self,
        pattern: &str,
        input: &str,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError>;

    /// Free-form parse of a time string in the given zone.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Parse`] when the input matches no accepted
    /// shape.
    fn from_time_string(
        &self,
        input: &str,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError>;

    /// Calendar construction from partial year..second components.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for components outside the
    /// calendar.
    fn from_components(
        &self,
        parts: &DateTimeParts,
        zone: &Zone,
    ) -> Result<DateTimeValue, ClockError>;

    /// Time-of-day construction on the current date in the given zone.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for an invalid time of day.
    fn from_time(
        &self,
        hour: u32,
        minute: u32,
        second: u32,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError>;

    /// Conversion from a value produced by a mutable creator, preserving the
    /// instant.
    fn from_mutable(&self, value: &DateTimeValue) -> DateTimeValue;

    /// Conversion from a value produced by an immutable creator, preserving
    /// the instant.
    fn from_immutable(&self, value: &DateTimeValue) -> DateTimeValue;
}

/// The built-in creator, parameterized over the variant it produces.
#[derive(Debug, Clone, Copy)]
pub struct StandardCreator {
    mutability: Mutability,
}

impl StandardCreator {
    /// The creator for the in-place mutation variant.
    #[must_use]
    pub fn mutable() -> Self {
        Self {
            mutability: Mutability::Mutable,
        }
    }

    /// The creator for the copy-on-write variant.
    #[must_use]
    pub fn immutable() -> Self {
        Self {
            mutability: Mutability::Immutable,
        }
    }

    fn value(&self, instant: DateTime<Utc>, zone: &Zone) -> DateTimeValue {
        DateTimeValue::new(instant, *zone, LocaleTag::default(), self.mutability)
    }

    fn today(&self, zone: &Zone, source: &dyn TimeSource) -> NaiveDate {
        zone.to_local(source.now_utc()).date_naive()
    }

    /// Snapshot conversion: same instant, zone and locale, this creator's
    /// mutability tag.
    fn retag(&self, value: &DateTimeValue) -> DateTimeValue {
        DateTimeValue::new(
            value.to_utc(),
            *value.zone(),
            value.locale().clone(),
            self.mutability,
        )
    }

    fn resolve(
        &self,
        parsed: Parsed,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError> {
        let instant = match parsed {
            Parsed::Epoch { secs, nanos } => DateTime::from_timestamp(secs, nanos)
                .ok_or_else(|| ClockError::OutOfRange {
                    what: format!("timestamp {secs}"),
                })?,
            Parsed::Instant(instant) => instant.with_timezone(&Utc),
            Parsed::Local(local) => zone.to_utc(local)?,
            Parsed::Date(date) => zone.to_utc(date.and_time(NaiveTime::MIN))?,
            Parsed::Time(time) => zone.to_utc(self.today(zone, source).and_time(time))?,
            Parsed::Now => source.now_utc(),
            Parsed::DayStart { offset_days } => {
                let today = self.today(zone, source);
                let date = if offset_days >= 0 {
                    today.checked_add_days(Days::new(offset_days.unsigned_abs()))
                } else {
                    today.checked_sub_days(Days::new(offset_days.unsigned_abs()))
                }
                .ok_or_else(|| ClockError::OutOfRange {
                    what: format!("day offset {offset_days}"),
                })?;
                zone.to_utc(date.and_time(NaiveTime::MIN))?
            }
        };
        Ok(self.value(instant, zone))
    }
}

/// Whether a strftime pattern carries a UTC-offset specifier (`%z`, `%:z`,
/// `%::z`, `%:::z`, `%#z`, `%Z`). Escaped `%%` sequences are skipped so a
/// literal `%z` in the pattern does not count.
fn has_offset_specifier(pattern: &str) -> bool {
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        match chars.next() {
            Some('%') => {}
            Some('z' | 'Z') => return true,
            Some(':' | '#') => {
                let mut next = chars.next();
                while next == Some(':') {
                    next = chars.next();
                }
                if next == Some('z') {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

impl Creator for StandardCreator {
    fn mutability(&self) -> Mutability {
        self.mutability
    }

    fn now(&self, zone: &Zone, source: &dyn TimeSource) -> DateTimeValue {
        self.value(source.now_utc(), zone)
    }

    fn from_timestamp(&self, secs: i64, zone: &Zone) -> Result<DateTimeValue, ClockError> {
        let instant = DateTime::from_timestamp(secs, 0).ok_or_else(|| ClockError::OutOfRange {
            what: format!("timestamp {secs}"),
        })?;
        Ok(self.value(instant, zone))
    }

    fn from_timestamp_millis(
        &self,
        millis: i64,
        zone: &Zone,
    ) -> Result<DateTimeValue, ClockError> {
        let instant =
            DateTime::from_timestamp_millis(millis).ok_or_else(|| ClockError::OutOfRange {
                what: format!("timestamp {millis}ms"),
            })?;
        Ok(self.value(instant, zone))
    }

    fn from_format(
        &self,
        pattern: &str,
        input: &str,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError> {
        if has_offset_specifier(pattern) {
            let instant = DateTime::parse_from_str(input, pattern)?;
            return Ok(self.value(instant.with_timezone(&Utc), zone));
        }

        let datetime_err = match NaiveDateTime::parse_from_str(input, pattern) {
            Ok(local) => return self.resolve(Parsed::Local(local), zone, source),
            Err(err) => err,
        };
        if let Ok(date) = NaiveDate::parse_from_str(input, pattern) {
            return self.resolve(Parsed::Date(date), zone, source);
        }
        if let Ok(time) = NaiveTime::parse_from_str(input, pattern) {
            return self.resolve(Parsed::Time(time), zone, source);
        }
        Err(datetime_err.into())
    }

    fn from_time_string(
        &self,
        input: &str,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError> {
        let parsed = parse::parse_flexible(input)?;
        self.resolve(parsed, zone, source)
    }

    fn from_components(
        &self,
        parts: &DateTimeParts,
        zone: &Zone,
    ) -> Result<DateTimeValue, ClockError> {
        let (month, day) = (parts.month.unwrap_or(1), parts.day.unwrap_or(1));
        let date = NaiveDate::from_ymd_opt(parts.year, month, day).ok_or_else(|| {
            ClockError::OutOfRange {
                what: format!("date {}-{month}-{day}", parts.year),
            }
        })?;
        let (hour, minute, second) = (
            parts.hour.unwrap_or(0),
            parts.minute.unwrap_or(0),
            parts.second.unwrap_or(0),
        );
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            ClockError::OutOfRange {
                what: format!("time {hour}:{minute}:{second}"),
            }
        })?;
        let instant = zone.to_utc(date.and_time(time))?;
        Ok(self.value(instant, zone))
    }

    fn from_time(
        &self,
        hour: u32,
        minute: u32,
        second: u32,
        zone: &Zone,
        source: &dyn TimeSource,
    ) -> Result<DateTimeValue, ClockError> {
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            ClockError::OutOfRange {
                what: format!("time {hour}:{minute}:{second}"),
            }
        })?;
        let instant = zone.to_utc(self.today(zone, source).and_time(time))?;
        Ok(self.value(instant, zone))
    }

    fn from_mutable(&self, value: &DateTimeValue) -> DateTimeValue {
        self.retag(value)
    }

    fn from_immutable(&self, value: &DateTimeValue) -> DateTimeValue {
        self.retag(value)
    }
}
