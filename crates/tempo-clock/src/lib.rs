//! Tempo Clock — a configurable factory facade for date-time values.
//!
//! The facade normalizes heterogeneous inputs (timestamps, strings,
//! component sequences, existing values) into calls against a configured
//! pair of creators, one per mutation protocol, and applies a default locale
//! and zone to everything it produces.
//!
//! ```
//! use tempo_clock::{Clock, Mutability};
//!
//! let clock = Clock::new();
//! let value = clock.create(1_700_000_000_i64, None, Mutability::Immutable, None)?;
//! assert_eq!(value.timestamp(), 1_700_000_000);
//! assert_eq!(value.locale().as_str(), "ru");
//! # Ok::<(), tempo_clock::ClockError>(())
//! ```

pub mod clock;
pub mod input;

pub use clock::Clock;
pub use input::TimeInput;
pub use tempo_core::creator::{Creator, DateTimeParts, StandardCreator};
pub use tempo_core::error::ClockError;
pub use tempo_core::locale::LocaleTag;
pub use tempo_core::parse::probe_timestamp;
pub use tempo_core::time_source::{SystemTimeSource, TimeSource};
pub use tempo_core::translate::{IdentityTranslator, TableTranslator, Translator};
pub use tempo_core::value::{DateTimeValue, Mutability};
pub use tempo_core::zone::Zone;

/// The current instant in the given or default zone, from a default-configured
/// clock.
#[must_use]
pub fn now(zone: Option<&Zone>, mutability: Mutability) -> DateTimeValue {
    Clock::new().now(zone, mutability)
}

/// The Unix timestamp (seconds) of any accepted input, from a
/// default-configured clock. [`TimeInput::Now`] (the `Default`) reports the
/// current instant.
///
/// # Errors
///
/// Propagates the parse error when a string input matches no accepted shape.
pub fn timestamp(input: impl Into<TimeInput>) -> Result<i64, ClockError> {
    Clock::new().timestamp(input)
}
