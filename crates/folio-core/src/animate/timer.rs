//! Cancellable one-shot deadlines
//!
//! The animation timers never read the clock themselves; every entry point
//! takes an explicit `now` so tests can drive a synthetic timeline.

use std::time::{Duration, Instant};

/// A cancellable one-shot timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `after` the given instant.
    /// Re-arming replaces any previous deadline.
    pub fn schedule(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it is due: returns true and disarms when
    /// `now` has reached it, otherwise leaves the timer armed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
