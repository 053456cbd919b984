//! Unit tests for the brew decision engine

use chrono::{DateTime, FixedOffset};
use coffee_machine_barista::{decide, BrewOutcome};
use coffee_machine_core::HOT_COFFEE_MESSAGE;

fn ts(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

#[test]
fn teapot_on_april_first_regardless_of_counter() {
    let april_firsts = [
        "2025-04-01T12:00:00+00:00",
        "2025-04-01T00:00:00-11:00",
        "1999-04-01T23:59:59+13:45",
    ];
    for now in april_firsts {
        for call in [1, 4, 5, 100] {
            assert_eq!(
                decide(ts(now), call, 5),
                BrewOutcome::Teapot,
                "April 1 must win for {now} at call {call}"
            );
        }
    }
}

#[test]
fn every_fifth_call_is_unavailable() {
    let now = ts("2025-03-15T12:00:00+00:00");
    for call in [5, 10, 15, 100, 1_000_000_000] {
        assert_eq!(decide(now, call, 5), BrewOutcome::Unavailable);
    }
}

#[test]
fn other_calls_brew_successfully() {
    let now = ts("2025-03-15T12:00:00+00:00");
    for call in [1, 2, 3, 4, 6, 7, 8, 9, 11, 101] {
        match decide(now, call, 5) {
            BrewOutcome::Success { message, prepared } => {
                assert_eq!(message, HOT_COFFEE_MESSAGE);
                assert_eq!(prepared, "2025-03-15T12:00:00+0000");
            }
            other => panic!("call {call} must brew coffee, got {other:?}"),
        }
    }
}

#[test]
fn date_check_wins_over_counter_check() {
    // call 5 would be unavailable on any other day
    assert_eq!(
        decide(ts("2025-04-01T08:30:00+02:00"), 5, 5),
        BrewOutcome::Teapot
    );
}

#[test]
fn prepared_keeps_the_timestamps_own_offset() {
    let cases = [
        ("2025-03-15T12:00:00+01:00", "2025-03-15T12:00:00+0100"),
        ("2025-03-15T00:00:00-05:30", "2025-03-15T00:00:00-0530"),
        ("2025-12-31T23:59:59+00:00", "2025-12-31T23:59:59+0000"),
    ];
    for (now, expected) in cases {
        match decide(ts(now), 1, 5) {
            BrewOutcome::Success { prepared, .. } => assert_eq!(prepared, expected),
            other => panic!("call 1 must brew coffee, got {other:?}"),
        }
    }
}

#[test]
fn april_days_other_than_the_first_are_ordinary() {
    for now in ["2025-04-02T00:00:00+00:00", "2025-04-30T12:00:00+00:00"] {
        assert!(matches!(
            decide(ts(now), 1, 5),
            BrewOutcome::Success { .. }
        ));
        assert_eq!(decide(ts(now), 5, 5), BrewOutcome::Unavailable);
    }
}
