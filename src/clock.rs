use std::time::{Duration, Instant};

/// Deadline-based tick scheduler.
///
/// Behaves like a re-armed one-shot timer: each fire schedules the next
/// deadline a full interval after the fire itself, so a late poll never
/// produces a catch-up burst. Changing the interval never touches an
/// armed deadline; it applies when the clock next fires or is re-armed.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    deadline: Instant,
}

impl TickClock {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now + interval,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Restarts the current tick from `now`. Used when the session resumes
    /// after a pause so the first tick takes a full interval again.
    pub fn rearm(&mut self, now: Instant) {
        self.deadline = now + self.interval;
    }

    /// Returns true when the deadline has passed, arming the next tick.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now + self.interval;
        true
    }
}
