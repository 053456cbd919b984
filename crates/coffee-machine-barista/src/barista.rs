//! The request handler wiring the engine to its collaborators

use coffee_machine_core::{
    BrewCounter, Clock, CoffeeReady, Config, Request, RequestHandler, RequestKind,
};
use tracing::debug;

use crate::engine::{self, BrewOutcome};

/// Handles brew requests using a clock and a call counter
///
/// The barista owns no threads and keeps no state of its own; the counter is
/// the only shared state, so a single instance can be driven from any number
/// of transport threads.
pub struct Barista {
    clock: Box<dyn Clock>,
    counter: Box<dyn BrewCounter>,
    unavailable_every: u64,
}

impl Barista {
    /// Create a new [`Barista`] with the given collaborators
    pub fn new(clock: Box<dyn Clock>, counter: Box<dyn BrewCounter>, config: &Config) -> Self {
        Self {
            clock,
            counter,
            unavailable_every: config.unavailable_every,
        }
    }

    /// Reset the call counter to 0
    ///
    /// Operator action; the public endpoint never triggers this.
    pub fn reset_counter(&self) {
        self.counter.reset();
    }
}

impl RequestHandler for Barista {
    fn handle(&self, rq: Request) {
        match rq.kind() {
            RequestKind::BrewCoffee => {
                // the timestamp must be read before the counter advances;
                // the counter advances on every call, April 1 included
                let now = self.clock.now();
                let call = self.counter.increment_and_get();
                let outcome = engine::decide(now, call, self.unavailable_every);
                debug!(request_id = %rq.request_id(), call, ?outcome, "brew decided");
                match outcome {
                    BrewOutcome::Teapot => rq.respond_with_teapot(),
                    BrewOutcome::Unavailable => rq.respond_with_unavailable(),
                    BrewOutcome::Success { message, prepared } => {
                        rq.respond_with_coffee(CoffeeReady {
                            message: message.into(),
                            prepared,
                        })
                    }
                }
            }
        }
    }
}
