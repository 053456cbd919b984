//! Tests for the atomic call counter

use std::thread;

use coffee_machine_barista::CallCounter;
use coffee_machine_core::BrewCounter;

#[test]
fn sequential_increments_count_from_one() {
    let counter = CallCounter::new();
    for expected in 1..=20 {
        assert_eq!(counter.increment_and_get(), expected);
    }
}

#[test]
fn reset_starts_the_sequence_over() {
    let counter = CallCounter::new();
    for _ in 0..7 {
        counter.increment_and_get();
    }
    counter.reset();
    assert_eq!(counter.increment_and_get(), 1);
}

#[test]
fn concurrent_increments_never_repeat_or_skip() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 1_000;

    let counter = CallCounter::new();
    let mut seen = Vec::with_capacity(THREADS * PER_THREAD);

    thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| counter.increment_and_get())
                        .collect::<Vec<u64>>()
                })
            })
            .collect();
        for handle in handles {
            seen.extend(handle.join().unwrap());
        }
    });

    seen.sort_unstable();
    let expected: Vec<u64> = (1..=(THREADS * PER_THREAD) as u64).collect();
    assert_eq!(
        seen, expected,
        "the granted sequence must be exactly 1..=k, no duplicates, no gaps"
    );
}
