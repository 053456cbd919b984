use chrono::{DateTime, FixedOffset};

/// Source of the current time
///
/// The decision logic never reads the system clock on its own; it is handed a
/// timestamp through this interface, so tests can substitute a fixed one. The
/// timestamp keeps whatever UTC offset the implementation runs under; no
/// normalization happens anywhere downstream.
pub trait Clock: Send + Sync {
    /// Get the current timestamp, including the UTC offset
    fn now(&self) -> DateTime<FixedOffset>;
}
