/// Counter of brew requests processed since the last reset
///
/// Implementations must hand out every value exactly once: the sequence of
/// returned values is 1, 2, 3, … with no duplicates or gaps, even when
/// called from multiple threads at once.
pub trait BrewCounter: Send + Sync {
    /// Atomically advance the counter and return the new value
    ///
    /// The first call on a fresh (or freshly reset) counter returns 1.
    fn increment_and_get(&self) -> u64;

    /// Reset the counter to 0
    ///
    /// Administrative operation; it is never triggered by the public
    /// endpoint.
    fn reset(&self);
}
