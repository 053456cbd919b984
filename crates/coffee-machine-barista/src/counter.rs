use std::sync::atomic::{AtomicU64, Ordering};

use coffee_machine_core::BrewCounter;

/// Process-wide call counter backed by a single atomic cell
///
/// The atomic read-modify-write alone guarantees that every value is handed
/// out exactly once, so no lock is needed.
#[derive(Debug, Default)]
pub struct CallCounter(AtomicU64);

impl CallCounter {
    /// Create a fresh counter starting at 0
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }
}

impl BrewCounter for CallCounter {
    fn increment_and_get(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
