//! Trailing-edge throttle for lookup requests

use std::time::{Duration, Instant};

/// Fixed throttle window between lookups
pub const THROTTLE_WINDOW: Duration = Duration::from_millis(300);

/// Trailing-edge throttle driven by explicit timestamps
///
/// The first call opens a window of fixed length. Calls inside the window
/// only replace the pending value; once the window has elapsed the most
/// recent value fires. Nothing fires on the leading edge, and a call after
/// a firing opens a new window.
#[derive(Debug)]
pub struct Throttle<T> {
    window: Duration,
    deadline: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a call made at `now`
    pub fn call(&mut self, value: T, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.window);
        }
        self.pending = Some(value);
    }

    /// When the pending value will fire, if anything is pending
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its window has elapsed by `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Drop the pending value without firing it
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.pending = None;
    }
}

impl<T> Default for Throttle<T> {
    fn default() -> Self {
        Self::new(THROTTLE_WINDOW)
    }
}

#[cfg(test)]
#[path = "throttle_tests.rs"]
mod throttle_tests;
