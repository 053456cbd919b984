//! Fake collaborators for deterministic tests

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use coffee_machine_core::Clock;
use parking_lot::Mutex;

/// Clock returning a programmable timestamp
///
/// Cloned handles share the same cell, so a test can keep one handle and
/// move the time of an already launched coffee machine.
#[derive(Clone, Debug)]
pub struct FakeClock {
    now: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl FakeClock {
    /// Create a fake clock pinned to `now`
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Create a fake clock pinned to an RFC 3339 timestamp
    ///
    /// Panics if `rfc3339` does not parse; test setup only.
    pub fn at(rfc3339: &str) -> Self {
        Self::new(
            DateTime::parse_from_rfc3339(rfc3339)
                .expect("FakeClock::at takes an RFC 3339 timestamp"),
        )
    }

    /// Move the clock to a new timestamp
    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.now.lock() = now;
    }

    /// Move the clock to an RFC 3339 timestamp
    pub fn set_rfc3339(&self, rfc3339: &str) {
        self.set(
            DateTime::parse_from_rfc3339(rfc3339)
                .expect("FakeClock::set_rfc3339 takes an RFC 3339 timestamp"),
        );
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock()
    }
}
