//! Shared test infrastructure for hoop-scoreboard integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use hoop_scoreboard::{ButtonPin, Buzzer, SegmentDisplay, TimeDuration, TimeInstant, TimeSource};
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

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

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

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

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Button Pin
// ============================================================================

/// Button pin whose level the test drives through a shared handle
pub struct SharedPin {
    level: Rc<Cell<bool>>,
}

impl SharedPin {
    pub fn new() -> (Self, Rc<Cell<bool>>) {
        let level = Rc::new(Cell::new(false));
        (
            Self {
                level: Rc::clone(&level),
            },
            level,
        )
    }
}

impl ButtonPin for SharedPin {
    fn is_pressed(&mut self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Mock Buzzer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerCall {
    Tone(u16),
    Off,
}

/// Mock buzzer that records every hardware call
pub struct MockBuzzer {
    pub calls: Vec<BuzzerCall>,
}

impl MockBuzzer {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Number of tone onsets (each cue note triggers exactly one)
    pub fn tone_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, BuzzerCall::Tone(_)))
            .count()
    }
}

impl Buzzer for MockBuzzer {
    fn tone(&mut self, freq_hz: u16) {
        self.calls.push(BuzzerCall::Tone(freq_hz));
    }

    fn off(&mut self) {
        self.calls.push(BuzzerCall::Off);
    }
}

// ============================================================================
// Mock Display
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCall {
    Digit {
        addr: u8,
        digit: u8,
        value: u8,
    },
    Sleep(bool),
}

/// Mock display driver that records every hardware call
pub struct MockDisplay {
    pub calls: Vec<DisplayCall>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn sleep_count(&self, asleep: bool) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == DisplayCall::Sleep(asleep))
            .count()
    }

    pub fn digit_write_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DisplayCall::Digit { .. }))
            .count()
    }
}

impl SegmentDisplay for MockDisplay {
    fn set_digit(&mut self, field_addr: u8, digit: u8, value: u8, _decimal_point: bool) {
        self.calls.push(DisplayCall::Digit {
            addr: field_addr,
            digit,
            value,
        });
    }

    fn set_sleep(&mut self, sleep: bool) {
        self.calls.push(DisplayCall::Sleep(sleep));
    }
}
