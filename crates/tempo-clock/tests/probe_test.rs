//! Integration tests for the boolean probes.

mod common;

use tempo_clock::probe_timestamp;

#[test]
fn test_is_date_accepts_recognized_shapes() {
    let clock = common::fixed_clock();

    for input in ["2024-01-01", "2024-01-01 12:30:00", "12:30", "now", "tomorrow", "@0"] {
        assert!(clock.is_date(input), "expected {input:?} to be a date");
    }
}

#[test]
fn test_is_date_swallows_every_failure_into_false() {
    let clock = common::fixed_clock();

    for input in ["not a date", "", "2024-13-45", "@nope"] {
        assert!(!clock.is_date(input), "expected {input:?} to be rejected");
    }
}

#[test]
fn test_is_timestamp_accepts_numeric_input() {
    let clock = common::fixed_clock();

    assert!(clock.is_timestamp("1700000000"));
    assert!(clock.is_timestamp(1_700_000_000_i64));
    assert!(clock.is_timestamp(-1));
    assert!(clock.is_timestamp(3.14));
}

#[test]
fn test_is_timestamp_rejects_non_numeric_input() {
    let clock = common::fixed_clock();

    assert!(!clock.is_timestamp("hello"));
    assert!(!clock.is_timestamp("2024-01-01"));
    assert!(!clock.is_timestamp(""));
}

#[test]
fn test_probe_timestamp_reports_the_parsed_seconds() {
    assert_eq!(probe_timestamp("1700000000").unwrap(), 1_700_000_000);
    assert!(probe_timestamp("hello").is_err());
}
