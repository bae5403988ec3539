//! The clock facade: explicit configuration plus the factory surface.

use std::mem;
use std::sync::Arc;

use tempo_core::creator::{Creator, DateTimeParts, StandardCreator};
use tempo_core::error::ClockError;
use tempo_core::locale::LocaleTag;
use tempo_core::parse;
use tempo_core::time_source::{SystemTimeSource, TimeSource};
use tempo_core::translate::{TableTranslator, Translator};
use tempo_core::value::{DateTimeValue, Mutability};
use tempo_core::zone::Zone;

use crate::input::TimeInput;

/// The facade configuration: creator slots, default locale, default zone and
/// the time source.
///
/// A `Clock` is an explicit value rather than process-wide state; construct
/// one per component (or per test) and share it by cloning. Values it
/// produces are snapshots: reconfiguring a clock never affects values it
/// already created.
#[derive(Debug, Clone)]
pub struct Clock {
    creator: Arc<dyn Creator>,
    immutable_creator: Arc<dyn Creator>,
    locale: LocaleTag,
    time_zone: Option<Zone>,
    time_source: Arc<dyn TimeSource>,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            creator: Arc::new(StandardCreator::mutable()),
            immutable_creator: Arc::new(StandardCreator::immutable()),
            locale: LocaleTag::default(),
            time_zone: None,
            time_source: Arc::new(SystemTimeSource),
        }
    }
}

impl Clock {
    /// A clock with the standard creators, the default locale and no
    /// explicit zone (the environment default applies).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the time source, for deterministic "now" in tests.
    #[must_use]
    pub fn with_time_source(mut self, source: Arc<dyn TimeSource>) -> Self {
        self.time_source = source;
        self
    }

    /// Replaces the creator slots. `None` leaves a slot untouched.
    ///
    /// The mutable slot must be given a creator producing in-place values
    /// and the immutable slot one producing copy-on-write values. The call
    /// is atomic: when either candidate is rejected, neither slot changes.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfiguration`] when a candidate's
    /// declared mutability does not match its slot.
    pub fn set_creators(
        &mut self,
        mutable: Option<Arc<dyn Creator>>,
        immutable: Option<Arc<dyn Creator>>,
    ) -> Result<(), ClockError> {
        if let Some(candidate) = &mutable {
            if candidate.mutability() != Mutability::Mutable {
                return Err(ClockError::InvalidConfiguration {
                    reason: "mutable slot requires a creator producing in-place values"
                        .to_owned(),
                });
            }
        }
        if let Some(candidate) = &immutable {
            if candidate.mutability() != Mutability::Immutable {
                return Err(ClockError::InvalidConfiguration {
                    reason: "immutable slot requires a creator producing copy-on-write values"
                        .to_owned(),
                });
            }
        }
        if let Some(candidate) = mutable {
            tracing::debug!(creator = ?candidate, "replacing mutable creator");
            self.creator = candidate;
        }
        if let Some(candidate) = immutable {
            tracing::debug!(creator = ?candidate, "replacing immutable creator");
            self.immutable_creator = candidate;
        }
        Ok(())
    }

    /// The default locale applied to produced values.
    #[must_use]
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// Replaces the default locale, returning the previous one.
    pub fn set_locale(&mut self, locale: LocaleTag) -> LocaleTag {
        tracing::debug!(locale = %locale, "replacing default locale");
        mem::replace(&mut self.locale, locale)
    }

    /// The default zone: the configured one, or the environment default
    /// when none was set.
    #[must_use]
    pub fn time_zone(&self) -> Zone {
        self.time_zone.unwrap_or_else(Zone::environment)
    }

    /// Replaces the default zone, returning the previously resolved default
    /// (configured, or environment when none was set).
    pub fn set_time_zone(&mut self, zone: Zone) -> Zone {
        tracing::debug!(zone = %zone, "replacing default zone");
        let previous = self.time_zone();
        self.time_zone = Some(zone);
        previous
    }

    fn resolve_zone(&self, explicit: Option<&Zone>) -> Zone {
        explicit.copied().unwrap_or_else(|| self.time_zone())
    }

    fn slot(&self, mutability: Mutability) -> &dyn Creator {
        match mutability {
            Mutability::Mutable => self.creator.as_ref(),
            Mutability::Immutable => self.immutable_creator.as_ref(),
        }
    }

    fn localized(&self, value: DateTimeValue) -> DateTimeValue {
        value.with_locale(self.locale.clone())
    }

    /// Builds a value from any accepted input shape.
    ///
    /// Dispatch, in order: existing values convert preserving their instant
    /// (with the conversion path keyed on the source's mutability, while the
    /// result's mutability follows `mutability` alone); timestamps, and text
    /// passing the timestamp probe, become epoch-based values; remaining
    /// text goes through the explicit `pattern` when given, the `now`
    /// keyword, or the free-form parser; component sequences of 1-6 integers
    /// are year..second calendar fields. The default locale is applied to
    /// every result.
    ///
    /// Note that the timestamp probe runs before the explicit pattern, so
    /// timestamp-like text is interpreted as an epoch offset even when a
    /// pattern is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidComponentCount`] for component sequences
    /// of 0 or more than 6 elements and propagates the underlying
    /// parse/range error from every other path.
    pub fn create(
        &self,
        input: impl Into<TimeInput>,
        zone: Option<&Zone>,
        mutability: Mutability,
        pattern: Option<&str>,
    ) -> Result<DateTimeValue, ClockError> {
        let input = input.into();
        let zone = self.resolve_zone(zone);
        let creator = self.slot(mutability);
        let source = self.time_source.as_ref();

        let value = match input {
            TimeInput::Value(source_value) => {
                tracing::trace!(path = "value", "create dispatch");
                match source_value.mutability() {
                    Mutability::Immutable => creator.from_immutable(&source_value),
                    Mutability::Mutable => creator.from_mutable(&source_value),
                }
            }
            TimeInput::Timestamp(secs) => {
                tracing::trace!(path = "timestamp", "create dispatch");
                creator.from_timestamp(secs, &zone)?
            }
            TimeInput::Text(text) => {
                if let Ok(secs) = parse::probe_timestamp(&text) {
                    tracing::trace!(path = "timestamp-text", "create dispatch");
                    creator.from_timestamp(secs, &zone)?
                } else if let Some(pattern) = pattern {
                    tracing::trace!(path = "pattern", "create dispatch");
                    creator.from_format(pattern, &text, &zone, source)?
                } else if text.trim().eq_ignore_ascii_case("now") {
                    tracing::trace!(path = "now", "create dispatch");
                    creator.now(&zone, source)
                } else {
                    tracing::trace!(path = "free-form", "create dispatch");
                    creator.from_time_string(&text, &zone, source)?
                }
            }
            TimeInput::Components(components) => {
                tracing::trace!(path = "components", "create dispatch");
                let parts = DateTimeParts::from_slice(&components)?;
                creator.from_components(&parts, &zone)?
            }
            TimeInput::Now => {
                tracing::trace!(path = "now", "create dispatch");
                creator.now(&zone, source)
            }
        };
        Ok(self.localized(value))
    }

    /// The current instant in the given or default zone.
    #[must_use]
    pub fn now(&self, zone: Option<&Zone>, mutability: Mutability) -> DateTimeValue {
        let zone = self.resolve_zone(zone);
        let value = self.slot(mutability).now(&zone, self.time_source.as_ref());
        self.localized(value)
    }

    /// The Unix timestamp (seconds) of any accepted input; existing values
    /// report their own instant, strings go through the free-form parser.
    ///
    /// # Errors
    ///
    /// Propagates the parse error, with the parser's diagnostic, when a
    /// string input matches no accepted shape.
    pub fn timestamp(&self, input: impl Into<TimeInput>) -> Result<i64, ClockError> {
        self.create(input, None, Mutability::Immutable, None)
            .map(|value| value.timestamp())
    }

    /// Whether the input parses as some date/time shape. All failure kinds
    /// are swallowed into `false`.
    #[must_use]
    pub fn is_date(&self, input: &str) -> bool {
        match self
            .immutable_creator
            .from_time_string(input, &self.time_zone(), self.time_source.as_ref())
        {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(input, error = %err, "date probe failed");
                false
            }
        }
    }

    /// Whether the input is timestamp-like, via the `@` epoch-marker probe.
    #[must_use]
    pub fn is_timestamp(&self, value: impl std::fmt::Display) -> bool {
        match parse::probe_timestamp(&value.to_string()) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(error = %err, "timestamp probe failed");
                false
            }
        }
    }

    /// A value at the given Unix second in the given or default zone.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for unrepresentable timestamps.
    pub fn from_timestamp(
        &self,
        secs: i64,
        zone: Option<&Zone>,
        mutability: Mutability,
    ) -> Result<DateTimeValue, ClockError> {
        let zone = self.resolve_zone(zone);
        let value = self.slot(mutability).from_timestamp(secs, &zone)?;
        Ok(self.localized(value))
    }

    /// A value at the given Unix second, rendered in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for unrepresentable timestamps.
    pub fn from_timestamp_utc(
        &self,
        secs: i64,
        mutability: Mutability,
    ) -> Result<DateTimeValue, ClockError> {
        let zone = Zone::utc();
        let value = self.slot(mutability).from_timestamp(secs, &zone)?;
        Ok(self.localized(value))
    }

    /// A value at the given Unix millisecond in the given or default zone.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for unrepresentable timestamps.
    pub fn from_timestamp_millis(
        &self,
        millis: i64,
        zone: Option<&Zone>,
        mutability: Mutability,
    ) -> Result<DateTimeValue, ClockError> {
        let zone = self.resolve_zone(zone);
        let value = self.slot(mutability).from_timestamp_millis(millis, &zone)?;
        Ok(self.localized(value))
    }

    /// A value at the given Unix millisecond, rendered in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for unrepresentable timestamps.
    pub fn from_timestamp_millis_utc(
        &self,
        millis: i64,
        mutability: Mutability,
    ) -> Result<DateTimeValue, ClockError> {
        let zone = Zone::utc();
        let value = self.slot(mutability).from_timestamp_millis(millis, &zone)?;
        Ok(self.localized(value))
    }

    /// Converts an existing value, preserving its instant. The conversion
    /// path is keyed on the source's mutability; the result's mutability
    /// follows `mutability` alone.
    #[must_use]
    pub fn from_object(&self, value: &DateTimeValue, mutability: Mutability) -> DateTimeValue {
        let creator = self.slot(mutability);
        let converted = match value.mutability() {
            Mutability::Immutable => creator.from_immutable(value),
            Mutability::Mutable => creator.from_mutable(value),
        };
        self.localized(converted)
    }

    /// Strict parse of `input` against a strftime `pattern` in the given or
    /// default zone.
    ///
    /// # Errors
    ///
    /// Propagates the parser's diagnostic unwrapped.
    pub fn from_format(
        &self,
        pattern: &str,
        input: &str,
        zone: Option<&Zone>,
        mutability: Mutability,
    ) -> Result<DateTimeValue, ClockError> {
        let zone = self.resolve_zone(zone);
        let value =
            self.slot(mutability)
                .from_format(pattern, input, &zone, self.time_source.as_ref())?;
        Ok(self.localized(value))
    }

    /// Calendar construction from partial year..second components in the
    /// given or default zone.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for components outside the
    /// calendar.
    pub fn from_date_time(
        &self,
        parts: DateTimeParts,
        zone: Option<&Zone>,
        mutability: Mutability,
    ) -> Result<DateTimeValue, ClockError> {
        let zone = self.resolve_zone(zone);
        let value = self.slot(mutability).from_components(&parts, &zone)?;
        Ok(self.localized(value))
    }

    /// Time-of-day construction on the current date in the given or default
    /// zone.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] for an invalid time of day.
    pub fn from_time(
        &self,
        hour: u32,
        minute: u32,
        second: u32,
        zone: Option<&Zone>,
        mutability: Mutability,
    ) -> Result<DateTimeValue, ClockError> {
        let zone = self.resolve_zone(zone);
        let value = self.slot(mutability).from_time(
            hour,
            minute,
            second,
            &zone,
            self.time_source.as_ref(),
        )?;
        Ok(self.localized(value))
    }

    /// Parse of `input` rendered under `locale` rules against a strftime
    /// `pattern`, in the configured/default zone.
    ///
    /// The input is first rewritten into strict-parseable form by the given
    /// [`Translator`], or by the bundled table translator when none is
    /// supplied. `locale` governs the rewrite only and defaults to English;
    /// the result carries the clock's default locale like every other
    /// factory product.
    ///
    /// # Errors
    ///
    /// Propagates the parser's diagnostic unwrapped.
    pub fn from_locale_format(
        &self,
        pattern: &str,
        input: &str,
        locale: Option<&LocaleTag>,
        translator: Option<&dyn Translator>,
        mutability: Mutability,
    ) -> Result<DateTimeValue, ClockError> {
        let zone = self.time_zone();
        let english = LocaleTag::english();
        let locale = locale.unwrap_or(&english);
        let bundled = TableTranslator;
        let translator = translator.unwrap_or(&bundled);
        let rewritten = translator.translate(input, locale);
        let value = self.slot(mutability).from_format(
            pattern,
            &rewritten,
            &zone,
            self.time_source.as_ref(),
        )?;
        Ok(self.localized(value))
    }
}
