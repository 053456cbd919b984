use chrono::{DateTime, FixedOffset};
use eyre::Result;

mod api;
mod fakes;

pub use api::{Api, ApiError, ApiResponse, ApiResult, Brew};
pub use fakes::FakeClock;

/// Timestamp the fake clock starts at unless a test overrides it
pub const DEFAULT_NOW: &str = "2025-03-15T12:00:00+00:00";

pub struct TestCtxBuilder {
    /// Cadence of the periodic 503
    pub unavailable_every: u64,
    /// Count of handler threads
    pub handler_threads: u16,
    /// Timestamp the machine's clock starts at
    pub now: DateTime<FixedOffset>,
}

impl TestCtxBuilder {
    /// Create a new test context builder initialized with defaults
    pub fn new() -> Self {
        TestCtxBuilder {
            unavailable_every: 5,
            handler_threads: 2,
            now: DateTime::parse_from_rfc3339(DEFAULT_NOW).unwrap(),
        }
    }

    /// Set the cadence of the periodic 503
    pub fn with_unavailable_every(mut self, every: u64) -> Self {
        assert_ne!(every, 0);
        self.unavailable_every = every;
        self
    }

    /// Set the number of handler threads to use
    pub fn with_handler_threads(mut self, threads: u16) -> Self {
        assert_ne!(threads, 0);
        self.handler_threads = threads;
        self
    }

    /// Set the timestamp the machine's clock starts at (RFC 3339)
    pub fn with_now(mut self, rfc3339: &str) -> Self {
        self.now = DateTime::parse_from_rfc3339(rfc3339)
            .expect("with_now takes an RFC 3339 timestamp");
        self
    }

    /// Get the [`coffee_machine_core::Config`] for launching the machine
    fn config(&self) -> coffee_machine_core::Config {
        coffee_machine_core::Config {
            unavailable_every: self.unavailable_every,
        }
    }

    /// Build the test context
    pub async fn build(self) -> Result<TestCtx> {
        let clock = FakeClock::new(self.now);
        let (machine, api) =
            api::mock::start(self.handler_threads, self.config(), clock.clone()).await;

        Ok(TestCtx {
            api,
            clock,
            machine,
            unavailable_every: self.unavailable_every,
            handler_threads: self.handler_threads,
            drop_bomb: DropBomb,
        })
    }
}

impl Default for TestCtxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Test context
pub struct TestCtx {
    /// API allowing to interact with the coffee machine
    pub api: Api,
    /// Handle to the machine's clock; move it to steer the date checks
    pub clock: FakeClock,
    machine: api::mock::MockMachine,
    /// Cadence of the periodic 503
    pub unavailable_every: u64,
    /// Number of handler threads
    pub handler_threads: u16,

    drop_bomb: DropBomb,
}

impl TestCtx {
    /// Reset the call counter, as an operator would
    pub fn reset_counter(&self) {
        self.machine.reset_counter();
    }

    /// Shut down the coffee machine and finish the test
    pub async fn finish(self) {
        std::mem::forget(self.drop_bomb);
        drop(self.api);
        self.machine.shutdown().await;
    }
}

struct DropBomb;

impl Drop for DropBomb {
    fn drop(&mut self) {
        eprintln!("@TestAuthor: You should call `ctx.finish().await` to shut the coffee machine down");
    }
}
