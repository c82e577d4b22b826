//! Core types for game cues and tone sequences.

use crate::time::TimeDuration;

/// The three audible game events.
///
/// This is a closed set: every cue maps to a fixed tone sequence, so an
/// out-of-range cue identifier cannot be expressed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameCue {
    /// One short beep per remaining pre-count second ("get ready").
    LaunchTick,

    /// Single beep when a shot is detected.
    Basket,

    /// Multi-note melody when the shooting window closes.
    TimesUp,
}

/// A single step in a tone sequence: a note or a rest.
#[derive(Debug, Clone, Copy)]
pub struct ToneStep<D: TimeDuration> {
    /// Frequency to sound, or `None` for a rest.
    pub freq_hz: Option<u16>,

    /// Step duration.
    pub duration: D,
}

impl<D: TimeDuration> ToneStep<D> {
    /// Creates a sounding step.
    #[inline]
    pub fn note(freq_hz: u16, duration: D) -> Self {
        Self {
            freq_hz: Some(freq_hz),
            duration,
        }
    }

    /// Creates a silent step.
    #[inline]
    pub fn rest(duration: D) -> Self {
        Self {
            freq_hz: None,
            duration,
        }
    }
}

/// Tone sequence validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MelodyError {
    /// No steps provided.
    EmptySequence,

    /// Sequence capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for MelodyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MelodyError::EmptySequence => {
                write!(f, "tone sequence must have at least one step")
            }
            MelodyError::CapacityExceeded => {
                write!(f, "tone sequence capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MelodyError {}
