use chrono::{DateTime, FixedOffset, Local};
use coffee_machine_core::Clock;

/// Clock backed by the system's local time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
