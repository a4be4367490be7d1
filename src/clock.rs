//! Time sources for animation pacing.
//!
//! The solver never reads the wall clock itself; it asks a [`Clock`] instead, so the same state
//! machine can be paced by the real time of a terminal session or stepped by hand.

use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

/// Source of monotonic time readings.
pub trait Clock {
    /// Returns the current reading.
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`].
#[expect(
    clippy::module_name_repetitions,
    reason = "Reads better than `clock::System` at call sites importing the type alone."
)]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same reading, so one handle can be given to a maze while another one is kept
/// around to advance time.
#[expect(
    clippy::module_name_repetitions,
    reason = "Reads better than `clock::Manual` at call sites importing the type alone."
)]
#[derive(Clone, Debug)]
pub struct ManualClock {
    /// Reading taken when the clock was created.
    origin: Instant,
    /// Time advanced since [`origin`](ManualClock::origin).
    elapsed: Rc<Cell<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Moves every handle of this clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get().saturating_add(by));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}
