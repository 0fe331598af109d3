//! Frame timing
//!
//! A clock answers two questions: how long the last frame took, and what the
//! absolute millisecond time is (used for the spawn timer).

use std::time::Instant;

pub trait Clock {
    /// Milliseconds since the clock started
    fn millis(&self) -> u64;

    /// Seconds between the two most recent frame marks
    fn delta_time(&self) -> f32;

    /// Close the current frame and start the next one
    fn mark_frame(&mut self);
}

/// Wall-clock time
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    last_frame: Instant,
    delta: f32,
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta: 0.0,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn delta_time(&self) -> f32 {
        self.delta
    }

    fn mark_frame(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
    }
}

/// Clock that only moves when told to; used for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    /// Elapsed time in seconds (f64 so long runs keep millisecond precision)
    elapsed: f64,
    pending: f32,
    delta: f32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `seconds` pass before the next frame mark
    pub fn advance(&mut self, seconds: f32) {
        self.elapsed += seconds as f64;
        self.pending += seconds;
    }
}

impl Clock for ManualClock {
    fn millis(&self) -> u64 {
        (self.elapsed * 1000.0).round() as u64
    }

    fn delta_time(&self) -> f32 {
        self.delta
    }

    fn mark_frame(&mut self) {
        self.delta = std::mem::take(&mut self.pending);
    }
}
