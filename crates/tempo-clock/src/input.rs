//! The tagged input union for [`crate::clock::Clock::create`].

use tempo_core::value::DateTimeValue;

/// Every input shape `create` accepts, made explicit so dispatch is a single
/// exhaustive match.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeInput {
    /// The current instant.
    Now,
    /// A Unix timestamp in seconds.
    Timestamp(i64),
    /// Free text: an explicit-format input, the `now` keyword, a
    /// timestamp-like string, or a free-form time string.
    Text(String),
    /// A year..second integer sequence of 1-6 elements.
    Components(Vec<i32>),
    /// An existing value to convert, preserving its instant.
    Value(DateTimeValue),
}

impl Default for TimeInput {
    fn default() -> Self {
        TimeInput::Now
    }
}

impl From<i64> for TimeInput {
    fn from(secs: i64) -> Self {
        TimeInput::Timestamp(secs)
    }
}

impl From<i32> for TimeInput {
    fn from(secs: i32) -> Self {
        TimeInput::Timestamp(i64::from(secs))
    }
}

impl From<&str> for TimeInput {
    fn from(text: &str) -> Self {
        TimeInput::Text(text.to_owned())
    }
}

impl From<String> for TimeInput {
    fn from(text: String) -> Self {
        TimeInput::Text(text)
    }
}

impl From<Vec<i32>> for TimeInput {
    fn from(components: Vec<i32>) -> Self {
        TimeInput::Components(components)
    }
}

impl From<&[i32]> for TimeInput {
    fn from(components: &[i32]) -> Self {
        TimeInput::Components(components.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for TimeInput {
    fn from(components: [i32; N]) -> Self {
        TimeInput::Components(components.to_vec())
    }
}

impl From<DateTimeValue> for TimeInput {
    fn from(value: DateTimeValue) -> Self {
        TimeInput::Value(value)
    }
}

impl From<&DateTimeValue> for TimeInput {
    fn from(value: &DateTimeValue) -> Self {
        TimeInput::Value(value.clone())
    }
}
