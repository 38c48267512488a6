//! Fixed-cadence frame clock.
//!
//! Stands in for a display refresh callback: one tick per interval, never a
//! burst of catch-up ticks after a stall.

use std::time::{Duration, Instant};

pub const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    interval: Duration,
    next_due: Instant,
}

impl FrameClock {
    /// A clock ticking `fps` times per second; the first tick is due at `now`.
    ///
    /// `fps` of zero is treated as one.
    pub fn new(fps: u32, now: Instant) -> Self {
        let fps = fps.max(1);
        Self {
            interval: Duration::from_secs(1) / fps,
            next_due: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Make the next tick due immediately.
    pub fn reset(&mut self, now: Instant) {
        self.next_due = now;
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// How long to wait for input before the next tick is due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Schedule the tick after the one that just ran.
    ///
    /// Keeps a steady cadence while on time; after falling more than one
    /// interval behind the schedule restarts from `now`.
    pub fn advance(&mut self, now: Instant) {
        self.next_due += self.interval;
        if self.next_due + self.interval <= now {
            log::trace!("frame clock resync after stall");
            self.next_due = now + self.interval;
        } else if self.next_due < now {
            self.next_due = now;
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FPS, Instant::now())
    }
}
