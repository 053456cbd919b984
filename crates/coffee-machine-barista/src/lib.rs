//! ☕ The barista: the brew decision engine together with its production
//! collaborators (system clock and atomic call counter).

use coffee_machine_core::Config;

mod barista;
mod clock;
mod counter;
mod engine;

pub use barista::Barista;
pub use clock::SystemClock;
pub use counter::CallCounter;
pub use engine::{decide, BrewOutcome};

/// Construct a [`Barista`] wired with the system clock and a fresh counter
pub fn launch(config: &Config) -> Barista {
    Barista::new(Box::new(SystemClock), Box::new(CallCounter::new()), config)
}
