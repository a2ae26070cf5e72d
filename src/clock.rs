use std::time::{Duration, Instant};

/// Fixed-interval tick source for the cooperative main loop.
///
/// The loop asks [`poll`](Self::poll) with its own notion of "now", so the
/// game can be driven through simulated time in tests. Ticks never overlap:
/// one `poll` reports at most one due tick and then re-arms.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    last_tick: Instant,
}

impl TickClock {
    /// Creates a clock whose first tick is due one `interval` from `start`.
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_tick: start,
        }
    }

    /// Returns true when a tick is due at `now`, re-arming for the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            return true;
        }

        false
    }

    /// Returns the configured tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
