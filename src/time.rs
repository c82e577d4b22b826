//! Time abstraction traits for platform-agnostic timing.
//!
//! The controller, countdown and cue player never read a hardware timer
//! directly; they ask a [`TimeSource`] for the current instant and do all
//! arithmetic through [`TimeInstant`] and [`TimeDuration`]. Implement these
//! for your platform's monotonic clock (or a mock, for host tests).

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;

    /// Converts duration to whole seconds, truncating.
    fn as_secs(&self) -> u64 {
        self.as_millis() / 1000
    }

    /// Creates duration from seconds.
    fn from_secs(secs: u64) -> Self {
        Self::from_millis(secs * 1000)
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;

    /// Subtracts duration from instant, returns None on underflow.
    fn checked_sub(self, duration: Self::Duration) -> Option<Self>;
}
