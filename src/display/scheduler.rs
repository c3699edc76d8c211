//! Fixed-interval scheduling with a cooperative stop flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Longest single sleep while waiting for the next tick, so a stop request
/// is noticed promptly.
pub const WAIT_SLICE: Duration = Duration::from_millis(100);

/// Shared "keep running" flag. Clearing it is permanent.
#[derive(Debug, Clone)]
pub struct RunFlag(Arc<AtomicBool>);

impl RunFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Deadline tracker for a repeating tick.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    /// A ticker whose first tick is due immediately.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self) -> bool {
        Instant::now() >= self.next_due
    }

    /// Time left until the next tick, zero if overdue.
    pub fn remaining(&self) -> Duration {
        self.next_due.saturating_duration_since(Instant::now())
    }

    /// Mark a tick as done; the next one is due one interval from now.
    pub fn reset(&mut self) {
        self.next_due = Instant::now() + self.interval;
    }

    /// Sleep until the next tick is due or `flag` is cleared.
    ///
    /// Returns `true` if the tick is due, `false` if the flag stopped the wait.
    pub fn wait(&self, flag: &RunFlag) -> bool {
        while flag.is_running() {
            let remaining = self.remaining();
            if remaining.is_zero() {
                return true;
            }
            std::thread::sleep(remaining.min(WAIT_SLICE));
        }
        false
    }
}
