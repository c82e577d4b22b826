#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`GameController`**: Runs the whole game from one `service()` call per loop iteration
//! - **`GamePhase`**: `Idle` / `PreCount` / `Shooting` / `Expired` state of the game
//! - **`DebouncedButton`**: One clean press edge per physical press of the start button
//! - **`ShotLatch`**: Interrupt-safe single-slot mailbox for hoop-break events
//! - **`Countdown`**: Polled countdown timer over a pluggable time source
//! - **`CuePlayer`**: Non-blocking playback of the three fixed audio cues
//! - **`ScoreboardDisplay`**: Per-digit diffing for the two-field 7-segment display
//! - **`ButtonPin` / `ShotSensor` / `Buzzer` / `SegmentDisplay`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! All timing is millisecond-resolution through the `TimeDuration` abstraction;
//! the game constants below are fixed at compile time.

pub mod controller;
pub mod countdown;
pub mod cue;
pub mod display;
pub mod input;
pub mod melody;
pub mod sensor;
pub mod time;
pub mod types;

pub use controller::{GameController, GamePhase};
pub use countdown::Countdown;
pub use cue::{Buzzer, CuePlayer};
pub use display::{DisplayField, ScoreboardDisplay, SegmentDisplay};
pub use input::{ButtonPin, DebouncedButton};
pub use melody::{BEEP_HZ, CUE_CAPACITY, MelodyBuilder, ToneSequence};
pub use sensor::{NoSensor, ShotLatch, ShotSensor};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{GameCue, MelodyError, ToneStep};

/// Length of the shot clock itself, in seconds.
pub const SHOT_CLOCK_SECS: u32 = 30;

/// Length of the audible count-in before the shot clock, in seconds.
pub const PRE_COUNT_SECS: u32 = 5;

/// Full countdown window started by a button press: pre-count plus shot clock.
pub const FULL_WINDOW_SECS: u32 = SHOT_CLOCK_SECS + PRE_COUNT_SECS;

/// Settle interval after an accepted button level change, in milliseconds.
pub const BUTTON_DEBOUNCE_MS: u64 = 15;

/// Detector dead-time after an accepted shot, in milliseconds.
///
/// Blocks legitimate back-to-back shots for its duration, but eliminates
/// double counting from sensor ringing on a single ball passage.
pub const SHOT_DEAD_TIME_MS: u64 = 500;

/// Idle time before the display is put into low-power shutdown (5 minutes).
pub const IDLE_SLEEP_TIMEOUT_MS: u64 = 300_000;
