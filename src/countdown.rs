//! Countdown timer over a pluggable time source.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// A polled countdown: started with a duration, queried for time remaining.
///
/// Starting while already running overrides the running countdown; starts
/// are never queued. The countdown holds no hardware, it is pure arithmetic
/// against the time source.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct Countdown<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    started_at: Option<I>,
    duration: I::Duration,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> Countdown<'t, I, T> {
    /// Creates a stopped countdown.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            started_at: None,
            duration: I::Duration::ZERO,
        }
    }

    /// Starts (or restarts) the countdown for the given duration.
    pub fn start(&mut self, duration: I::Duration) {
        self.started_at = Some(self.time_source.now());
        self.duration = duration;
    }

    /// Stops the countdown; remaining time drops to zero.
    pub fn stop(&mut self) {
        self.started_at = None;
        self.duration = I::Duration::ZERO;
    }

    /// Returns the time remaining, saturating at zero.
    pub fn remaining(&self) -> I::Duration {
        match self.started_at {
            None => I::Duration::ZERO,
            Some(started_at) => {
                let elapsed = self.time_source.now().duration_since(started_at);
                self.duration.saturating_sub(elapsed)
            }
        }
    }

    /// Returns whole seconds remaining, rounded up.
    ///
    /// Rounding up makes the value tick down exactly at each one-second
    /// boundary: a fresh 35 s countdown reads 35 until a full second has
    /// elapsed, then 34, and reads 0 only once fully expired.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining().as_millis().div_ceil(1000) as u32
    }

    /// Returns true if started and not yet expired.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.remaining().as_millis() > 0
    }
}
