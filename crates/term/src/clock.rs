//! Frame pacing and session timing.

use std::thread;
use std::time::{Duration, Instant};

/// Keeps each frame at least `budget` long.
#[derive(Debug, Clone)]
pub struct FrameClock {
    budget: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Restart the current frame at `now`.
    pub fn start(&mut self, now: Instant) {
        self.frame_start = now;
    }

    /// Time left in the current frame as of `now`. Zero once the budget is spent.
    pub fn remaining(&self, now: Instant) -> Duration {
        (self.frame_start + self.budget).saturating_duration_since(now)
    }

    /// Sleep until the frame budget has elapsed, then start the next frame.
    pub fn delay(&mut self) {
        let now = Instant::now();
        let remaining = self.remaining(now);
        if remaining.is_zero() {
            log::trace!(
                "frame overran budget by {:?}",
                now.saturating_duration_since(self.frame_start + self.budget)
            );
        } else {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

/// Logs how long it lived when dropped.
#[derive(Debug)]
pub struct SessionTimer {
    name: &'static str,
    start: Instant,
}

impl SessionTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        log::info!(
            "timer {} total={}ms",
            self.name,
            self.start.elapsed().as_millis()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut clock = FrameClock::new(Duration::from_millis(33));
        let t0 = Instant::now();
        clock.start(t0);

        assert_eq!(clock.remaining(t0), Duration::from_millis(33));
        assert_eq!(
            clock.remaining(t0 + Duration::from_millis(20)),
            Duration::from_millis(13)
        );
        assert_eq!(clock.remaining(t0 + Duration::from_millis(33)), Duration::ZERO);
        assert_eq!(clock.remaining(t0 + Duration::from_millis(50)), Duration::ZERO);
    }

    #[test]
    fn delay_waits_out_the_budget() {
        let mut clock = FrameClock::new(Duration::from_millis(10));
        let t0 = Instant::now();
        clock.start(t0);
        clock.delay();
        assert!(t0.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn delay_does_not_sleep_when_budget_is_spent() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        let long_ago = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);
        clock.start(long_ago);
        let before = Instant::now();
        clock.delay();
        assert!(before.elapsed() < Duration::from_millis(500));
    }
}
