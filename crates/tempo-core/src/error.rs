//! Error types shared across the workspace.

use thiserror::Error;

/// Top-level error type for all fallible clock operations.
#[derive(Debug, Error)]
pub enum ClockError {
    /// A creator slot was offered a creator that does not satisfy the
    /// requirements of that slot.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the rejected configuration.
        reason: String,
    },

    /// A component sequence had an unsupported length.
    #[error("component sequence must contain 1-6 integers, got {len}")]
    InvalidComponentCount {
        /// The offending length.
        len: usize,
    },

    /// The underlying parser rejected the input. Propagated unwrapped so the
    /// caller sees the original diagnostic.
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    /// Input did not match any accepted date/time shape.
    #[error("unrecognized date/time input: {input}")]
    Unrecognized {
        /// The input that failed classification.
        input: String,
    },

    /// A time zone name was not found in the zone database.
    #[error("unknown time zone: {name}")]
    UnknownZone {
        /// The name that failed to resolve.
        name: String,
    },

    /// A locale tag was not of the `ll` / `ll_RR` shape.
    #[error("malformed locale tag: {tag}")]
    InvalidLocale {
        /// The rejected tag.
        tag: String,
    },

    /// A field value fell outside the calendar or representable range.
    #[error("{what} is out of range")]
    OutOfRange {
        /// Description of the offending field and value.
        what: String,
    },

    /// An in-place mutation was attempted on an immutable value.
    #[error("cannot {operation} in place on an immutable value")]
    ImmutableValue {
        /// The rejected operation.
        operation: &'static str,
    },
}
