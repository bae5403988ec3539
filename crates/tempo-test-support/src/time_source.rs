//! Deterministic `TimeSource` implementations for tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use tempo_core::time_source::TimeSource;

/// A time source that always returns a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub DateTime<Utc>);

impl TimeSource for FixedTimeSource {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A time source that advances by a fixed step on every reading.
#[derive(Debug)]
pub struct SteppingTimeSource {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingTimeSource {
    /// A source starting at `start` and advancing by `step` per reading.
    #[must_use]
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }
}

impl TimeSource for SteppingTimeSource {
    fn now_utc(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().expect("time source lock poisoned");
        let reading = *current;
        *current = reading + self.step;
        reading
    }
}
