//! Time source abstraction for determinism.

use std::fmt;

use chrono::{DateTime, Utc};

/// Abstraction over system time so "now"-relative construction can be made
/// deterministic in tests.
pub trait TimeSource: fmt::Debug + Send + Sync {
    /// Returns the current instant.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production time source that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
