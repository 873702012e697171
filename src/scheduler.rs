use std::time::{Duration, Instant};

use crate::speed::Speed;

/// Fixed-period tick deadline.
///
/// Holds exactly one pending deadline. The next deadline is only installed
/// once the current tick has completed, so ticks never overlap.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    fps: u32,
    speed: Speed,
    period: Duration,
    next_due: Instant,
}

impl TickScheduler {
    /// Schedules the first tick one period after `now`.
    #[must_use]
    pub fn new(fps: u32, speed: Speed, now: Instant) -> Self {
        let period = speed.tick_interval(fps);
        Self {
            fps,
            speed,
            period,
            next_due: now + period,
        }
    }

    #[must_use]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true when the pending deadline has passed.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Time left before the pending deadline, zero when already due.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Installs the next deadline after a finished tick.
    pub fn complete(&mut self, now: Instant) {
        self.next_due = now + self.period;
    }

    /// Replaces the period and the pending deadline in one step.
    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.speed = speed;
        self.period = speed.tick_interval(self.fps);
        self.next_due = now + self.period;
    }

    /// Advances to the next speed in the cycle and returns it.
    pub fn cycle_speed(&mut self, now: Instant) -> Speed {
        let next = self.speed.next();
        self.set_speed(next, now);
        next
    }
}
