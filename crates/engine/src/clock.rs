//! Frame timing.

use std::time::{Duration, Instant};

/// Monotonic per-frame clock: `start` is fixed at construction, `elapsed`
/// is refreshed once per tick.
#[derive(Debug, Clone)]
pub struct Clock {
    start: Instant,
    last: Instant,
    elapsed: Duration,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the clock; returns the time since the previous tick.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.elapsed = now - self.last;
        self.last = now;
        self.elapsed
    }

    /// Time between the two most recent ticks.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time since the clock was created.
    pub fn total(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Fixed-interval gate for the frame loop.
///
/// `tick` answers "has a full interval passed since the last accepted
/// frame"; the driver polls it every loop iteration and skips the frame
/// otherwise. There is no sleeping involved.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    interval: Duration,
    last: Instant,
}

impl FrameTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// For a target frames-per-second rate.
    pub fn per_second(rate: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / rate.max(1) as f64))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when the interval has elapsed; resets the countdown.
    pub fn tick(&mut self) -> bool {
        if self.last.elapsed() >= self.interval {
            self.last = Instant::now();
            return true;
        }
        false
    }
}
