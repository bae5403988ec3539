//! Shared helpers for the facade integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tempo_clock::Clock;
use tempo_test_support::FixedTimeSource;

/// The instant every fixed test clock reports as "now".
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// A default-configured clock frozen at [`fixed_instant`].
pub fn fixed_clock() -> Clock {
    Clock::new().with_time_source(Arc::new(FixedTimeSource(fixed_instant())))
}
