//! Integration tests for clock configuration.

mod common;

use std::sync::Arc;

use chrono::Duration;
use tempo_clock::{Clock, ClockError, LocaleTag, Mutability, StandardCreator, Zone};
use tempo_test_support::OffsetCreator;

#[test]
fn test_set_locale_returns_previous_value() {
    let mut clock = Clock::new();

    let previous = clock.set_locale(LocaleTag::parse("en").unwrap());

    assert_eq!(previous.as_str(), "ru");
    assert_eq!(clock.locale().as_str(), "en");
}

#[test]
fn test_set_time_zone_round_trips_normalized_name() {
    let mut clock = Clock::new();
    let environment_default = clock.time_zone();

    let previous = clock.set_time_zone(Zone::parse("Europe/Moscow").unwrap());

    assert_eq!(previous, environment_default);
    assert_eq!(clock.time_zone().name(), "Europe/Moscow");

    let replaced = clock.set_time_zone(Zone::parse("Asia/Tokyo").unwrap());
    assert_eq!(replaced.name(), "Europe/Moscow");
}

#[test]
fn test_set_creators_replaces_slots() {
    let mut clock = common::fixed_clock();
    let shift = Duration::hours(1);

    clock
        .set_creators(
            Some(Arc::new(OffsetCreator::mutable(shift))),
            Some(Arc::new(OffsetCreator::immutable(shift))),
        )
        .unwrap();

    let now = clock.now(None, Mutability::Immutable);
    assert_eq!(
        now.to_utc(),
        common::fixed_instant() + shift,
        "replaced creator should produce the shifted instant"
    );
}

#[test]
fn test_set_creators_rejects_mismatched_mutability() {
    let mut clock = common::fixed_clock();

    let err = clock
        .set_creators(None, Some(Arc::new(StandardCreator::mutable())))
        .unwrap_err();

    assert!(matches!(err, ClockError::InvalidConfiguration { .. }));
    // Prior configuration stays active.
    let now = clock.now(None, Mutability::Immutable);
    assert_eq!(now.to_utc(), common::fixed_instant());
    assert_eq!(now.mutability(), Mutability::Immutable);
}

#[test]
fn test_set_creators_failure_is_atomic_across_both_slots() {
    let mut clock = common::fixed_clock();
    let shift = Duration::hours(1);

    // Valid mutable candidate paired with an invalid immutable one: neither
    // slot may change.
    let err = clock
        .set_creators(
            Some(Arc::new(OffsetCreator::mutable(shift))),
            Some(Arc::new(StandardCreator::mutable())),
        )
        .unwrap_err();

    assert!(matches!(err, ClockError::InvalidConfiguration { .. }));
    let now = clock.now(None, Mutability::Mutable);
    assert_eq!(now.to_utc(), common::fixed_instant());
}

#[test]
fn test_reconfiguration_does_not_affect_existing_values() {
    let mut clock = common::fixed_clock();
    let zone = Zone::utc();
    let value = clock
        .create(1_700_000_000_i64, Some(&zone), Mutability::Immutable, None)
        .unwrap();

    clock.set_locale(LocaleTag::parse("en").unwrap());
    clock.set_time_zone(Zone::parse("Asia/Tokyo").unwrap());

    assert_eq!(value.locale().as_str(), "ru");
    assert_eq!(value.zone().name(), "UTC");
    assert_eq!(value.timestamp(), 1_700_000_000);
}

#[test]
fn test_cloned_clocks_are_independent() {
    let mut original = Clock::new();
    let clone = original.clone();

    original.set_locale(LocaleTag::parse("en").unwrap());

    assert_eq!(original.locale().as_str(), "en");
    assert_eq!(clone.locale().as_str(), "ru");
}
