//! The brew decision engine

use chrono::{DateTime, Datelike, FixedOffset};
use coffee_machine_core::HOT_COFFEE_MESSAGE;

/// Outcome of a single brew decision
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrewOutcome {
    /// It is April 1; the machine refuses to brew coffee
    Teapot,
    /// The machine is periodically out of coffee
    Unavailable,
    /// Coffee is ready
    Success {
        /// The fixed success message
        message: &'static str,
        /// Preparation timestamp, `YYYY-MM-DDTHH:MM:SS±HHMM`
        prepared: String,
    },
}

/// `%z` renders the offset as `±HHMM`, without a colon
const PREPARED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Decide the outcome of a single brew request
///
/// `call_number` is the counter value already incremented for this call;
/// `unavailable_every` must be greater than 0. The date check wins over the
/// counter check; the calendar date is taken in whatever offset `now`
/// carries.
pub fn decide(now: DateTime<FixedOffset>, call_number: u64, unavailable_every: u64) -> BrewOutcome {
    if now.month() == 4 && now.day() == 1 {
        return BrewOutcome::Teapot;
    }
    if call_number % unavailable_every == 0 {
        return BrewOutcome::Unavailable;
    }
    BrewOutcome::Success {
        message: HOT_COFFEE_MESSAGE,
        prepared: now.format(PREPARED_FORMAT).to_string(),
    }
}
