//! Shot event sources.
//!
//! The hoop sensor is the only asynchronous producer in the system: its
//! interrupt handler sets a latched event that the control loop drains at
//! well-defined points. [`ShotLatch`] implements that single-slot mailbox
//! over an atomic flag; [`ShotSensor`] abstracts it (or any polled detector)
//! towards the controller.

use core::sync::atomic::{AtomicBool, Ordering};

/// Trait for abstracting the hoop shot detector.
///
/// The controller consumes events with a test-and-clear so an event can
/// never be observed twice, and masks the detector by discarding pending
/// events outside the shooting window.
pub trait ShotSensor {
    /// Takes the pending shot event, if any (test-and-clear).
    fn take_shot(&mut self) -> bool;

    /// Discards any pending event without acting on it.
    fn clear(&mut self) {
        let _ = self.take_shot();
    }
}

/// Interrupt-safe single-slot shot event mailbox.
///
/// The sensor ISR is the sole producer ([`ShotLatch::notify`]); the control
/// loop is the sole consumer ([`ShotLatch::take`]). `take` swaps the flag
/// atomically, so a set arriving concurrently with the read-then-clear is
/// either consumed now or left latched for the next cycle - never lost.
/// At most one pending shot is represented between loop iterations; a second
/// ball passage inside one iteration collapses into the first, which the
/// dead-time policy already accepts.
///
/// Declare it `static` and share it between the ISR and the controller:
///
/// ```
/// use hoop_scoreboard::ShotLatch;
///
/// static SHOT_LATCH: ShotLatch = ShotLatch::new();
///
/// // ISR context:
/// SHOT_LATCH.notify();
///
/// // Control loop:
/// assert!(SHOT_LATCH.take());
/// assert!(!SHOT_LATCH.take());
/// ```
#[derive(Debug)]
pub struct ShotLatch {
    flag: AtomicBool,
}

impl ShotLatch {
    /// Creates an empty latch.
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Latches a shot event. Callable from interrupt context.
    pub fn notify(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Atomically takes the pending event, clearing the latch.
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }

    /// Returns true if an event is latched, without consuming it.
    pub fn is_pending(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Default for ShotLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ShotSensor for &ShotLatch {
    fn take_shot(&mut self) -> bool {
        self.take()
    }
}

/// Degraded-mode sensor that never reports a shot.
///
/// Use when the real sensor fails bring-up: the scoreboard keeps its clock,
/// button and display running, shot detection just silently never fires.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSensor;

impl ShotSensor for NoSensor {
    fn take_shot(&mut self) -> bool {
        false
    }
}
