//! Debounced push-button input.

use crate::BUTTON_DEBOUNCE_MS;
use crate::time::{TimeDuration, TimeInstant};

/// Trait for abstracting the start-button pin.
///
/// Implement this for your GPIO input. Return the logical state: `true`
/// while the button is physically held, regardless of the electrical
/// polarity (active-low wiring with a pull-up inverts here, not in the
/// debouncer).
pub trait ButtonPin {
    /// Reads the raw instantaneous level.
    fn is_pressed(&mut self) -> bool;
}

/// Edge-triggered debouncer for a momentary push button.
///
/// A released-to-pressed transition is reported immediately; after any
/// accepted level change, raw reads are ignored for [`BUTTON_DEBOUNCE_MS`]
/// so contact bounce cannot alter the tracked level and fabricate extra
/// edges. At most one edge is produced per physical press.
pub struct DebouncedButton<P: ButtonPin, I: TimeInstant> {
    pin: P,
    pressed: bool,
    changed_at: Option<I>,
}

impl<P: ButtonPin, I: TimeInstant> DebouncedButton<P, I> {
    /// Creates a debouncer tracking a released button.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            pressed: false,
            changed_at: None,
        }
    }

    /// Samples the pin. Returns `true` exactly once per debounced press.
    ///
    /// Call once per loop iteration with the current instant. The polling
    /// cadence must be faster than the debounce interval for the settle
    /// window to mean anything.
    pub fn poll(&mut self, now: I) -> bool {
        let raw = self.pin.is_pressed();

        if let Some(changed_at) = self.changed_at {
            if now.duration_since(changed_at).as_millis() < BUTTON_DEBOUNCE_MS {
                // Still settling; do not trust the contact yet.
                return false;
            }
        }

        if raw == self.pressed {
            return false;
        }

        self.pressed = raw;
        self.changed_at = Some(now);
        raw
    }

    /// Returns the tracked (debounced) level.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeDuration;
    extern crate std;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TestDuration(u64);

    impl TimeDuration for TestDuration {
        const ZERO: Self = TestDuration(0);

        fn as_millis(&self) -> u64 {
            self.0
        }

        fn from_millis(millis: u64) -> Self {
            TestDuration(millis)
        }

        fn saturating_sub(self, other: Self) -> Self {
            TestDuration(self.0.saturating_sub(other.0))
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TestInstant(u64);

    impl TimeInstant for TestInstant {
        type Duration = TestDuration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            TestDuration(self.0 - earlier.0)
        }

        fn checked_add(self, duration: Self::Duration) -> Option<Self> {
            Some(TestInstant(self.0 + duration.0))
        }

        fn checked_sub(self, duration: Self::Duration) -> Option<Self> {
            self.0.checked_sub(duration.0).map(TestInstant)
        }
    }

    /// Pin fed from a scripted level sequence; holds the last level once
    /// the script runs out.
    struct ScriptedPin {
        levels: Vec<bool>,
        index: usize,
    }

    impl ScriptedPin {
        fn new(levels: &[bool]) -> Self {
            Self {
                levels: levels.to_vec(),
                index: 0,
            }
        }
    }

    impl ButtonPin for ScriptedPin {
        fn is_pressed(&mut self) -> bool {
            let level = *self.levels.get(self.index).or(self.levels.last()).unwrap();
            self.index += 1;
            level
        }
    }

    #[test]
    fn clean_press_yields_one_edge() {
        let pin = ScriptedPin::new(&[false, true, true, true]);
        let mut button = DebouncedButton::new(pin);

        assert!(!button.poll(TestInstant(0)));
        assert!(button.poll(TestInstant(20)));
        assert!(!button.poll(TestInstant(40)));
        assert!(!button.poll(TestInstant(60)));
    }

    #[test]
    fn bounce_within_settle_window_is_ignored() {
        // Press at t=20, contact chatter at t=22..26, stable press after
        let pin = ScriptedPin::new(&[false, true, false, true, false, true]);
        let mut button = DebouncedButton::new(pin);

        assert!(!button.poll(TestInstant(0)));
        assert!(button.poll(TestInstant(20))); // edge accepted immediately

        // Chatter samples inside the 15 ms window never reach the pin state
        assert!(!button.poll(TestInstant(22)));
        assert!(!button.poll(TestInstant(24)));
        assert!(!button.poll(TestInstant(26)));

        // After settling the tracked level is still "pressed": no new edge
        assert!(!button.poll(TestInstant(40)));
        assert!(button.is_pressed());
    }

    #[test]
    fn release_bounce_cannot_fabricate_second_press() {
        // Press, hold, release with bounce, stable released
        let pin = ScriptedPin::new(&[true, true, false, true, false, false]);
        let mut button = DebouncedButton::new(pin);

        assert!(button.poll(TestInstant(0)));
        assert!(!button.poll(TestInstant(20)));

        // Release edge at t=40 (returns false: only presses are reported)
        assert!(!button.poll(TestInstant(40)));

        // Bounce back high at t=42 lands inside the settle window
        assert!(!button.poll(TestInstant(42)));

        // Once settled the pin is stably low: no spurious press
        assert!(!button.poll(TestInstant(60)));
        assert!(!button.is_pressed());
    }

    #[test]
    fn each_distinct_press_yields_its_own_edge() {
        let pin = ScriptedPin::new(&[true, false, true, false]);
        let mut button = DebouncedButton::new(pin);

        assert!(button.poll(TestInstant(0)));
        assert!(!button.poll(TestInstant(100))); // release
        assert!(button.poll(TestInstant(200))); // second press
        assert!(!button.poll(TestInstant(300))); // release
    }
}
