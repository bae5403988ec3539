//! Integration tests for the `create` dispatch.

mod common;

use tempo_clock::{ClockError, Mutability, Zone};

#[test]
fn test_create_from_timestamp_round_trips() {
    let clock = common::fixed_clock();

    for secs in [0_i64, 1_700_000_000, -1, 86_400] {
        let value = clock
            .create(secs, None, Mutability::Immutable, None)
            .unwrap();
        assert_eq!(value.timestamp(), secs);
    }
}

#[test]
fn test_create_probes_timestamp_like_text() {
    let clock = common::fixed_clock();

    let value = clock
        .create("1700000000", None, Mutability::Immutable, None)
        .unwrap();

    assert_eq!(value.timestamp(), 1_700_000_000);
}

#[test]
fn test_create_timestamp_probe_wins_over_explicit_pattern() {
    let clock = common::fixed_clock();

    // Timestamp-like text is epoch-interpreted even when a pattern is given.
    let value = clock
        .create("20240101", None, Mutability::Immutable, Some("%Y%m%d"))
        .unwrap();

    assert_eq!(value.timestamp(), 20_240_101);
}

#[test]
fn test_create_now_keyword_is_case_insensitive() {
    let clock = common::fixed_clock();

    let lower = clock.create("now", None, Mutability::Immutable, None).unwrap();
    let upper = clock.create("NOW", None, Mutability::Mutable, None).unwrap();

    assert_eq!(lower.to_utc(), common::fixed_instant());
    assert_eq!(upper.to_utc(), common::fixed_instant());
}

#[test]
fn test_create_parses_free_form_text_in_explicit_zone() {
    let clock = common::fixed_clock();
    let zone = Zone::parse("+03:00").unwrap();

    let value = clock
        .create("2024-01-01 12:30:00", Some(&zone), Mutability::Immutable, None)
        .unwrap();

    assert_eq!(value.timestamp(), 1_704_101_400);
    assert_eq!(value.zone().name(), "+03:00");
}

#[test]
fn test_create_parses_text_against_explicit_pattern() {
    let clock = common::fixed_clock();
    let zone = Zone::utc();

    let value = clock
        .create(
            "15/01/2024 09:45",
            Some(&zone),
            Mutability::Immutable,
            Some("%d/%m/%Y %H:%M"),
        )
        .unwrap();

    assert_eq!(
        value.to_local().naive_local().to_string(),
        "2024-01-15 09:45:00"
    );
}

#[test]
fn test_create_from_three_and_six_components_succeeds() {
    let clock = common::fixed_clock();
    let zone = Zone::utc();

    let date_only = clock
        .create([2024, 3, 10], Some(&zone), Mutability::Immutable, None)
        .unwrap();
    let full = clock
        .create(
            [2024, 3, 10, 12, 30, 45],
            Some(&zone),
            Mutability::Immutable,
            None,
        )
        .unwrap();

    assert_eq!(
        date_only.to_local().naive_local().to_string(),
        "2024-03-10 00:00:00"
    );
    assert_eq!(
        full.to_local().naive_local().to_string(),
        "2024-03-10 12:30:45"
    );
}

#[test]
fn test_create_rejects_empty_and_oversized_component_sequences() {
    let clock = common::fixed_clock();

    let empty = clock
        .create(Vec::<i32>::new(), None, Mutability::Immutable, None)
        .unwrap_err();
    let oversized = clock
        .create([1, 2, 3, 4, 5, 6, 7], None, Mutability::Immutable, None)
        .unwrap_err();

    assert!(matches!(empty, ClockError::InvalidComponentCount { len: 0 }));
    assert!(matches!(
        oversized,
        ClockError::InvalidComponentCount { len: 7 }
    ));
}

#[test]
fn test_create_converts_existing_values_preserving_instant() {
    let clock = common::fixed_clock();

    let mutable = clock
        .create(1_700_000_000_i64, None, Mutability::Mutable, None)
        .unwrap();
    let frozen = clock
        .create(&mutable, None, Mutability::Immutable, None)
        .unwrap();
    let thawed = clock.create(&frozen, None, Mutability::Mutable, None).unwrap();

    assert_eq!(mutable.mutability(), Mutability::Mutable);
    assert_eq!(frozen.mutability(), Mutability::Immutable);
    assert_eq!(thawed.mutability(), Mutability::Mutable);
    assert_eq!(frozen.timestamp(), 1_700_000_000);
    assert_eq!(thawed.timestamp(), 1_700_000_000);
}

#[test]
fn test_create_applies_default_locale_to_every_result() {
    let clock = common::fixed_clock();

    let from_timestamp = clock
        .create(1_700_000_000_i64, None, Mutability::Immutable, None)
        .unwrap();
    let from_text = clock.create("now", None, Mutability::Mutable, None).unwrap();

    assert_eq!(from_timestamp.locale().as_str(), "ru");
    assert_eq!(from_text.locale().as_str(), "ru");
}

#[test]
fn test_create_free_form_parse_failure_propagates_diagnostic() {
    let clock = common::fixed_clock();

    let err = clock
        .create("certainly not a date", None, Mutability::Immutable, None)
        .unwrap_err();

    assert!(matches!(err, ClockError::Parse(_)));
    assert!(!err.to_string().is_empty());
}
