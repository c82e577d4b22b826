//! Fixed tone sequences for game cues.
//!
//! A [`ToneSequence`] is a flat list of notes and rests played once, front to
//! back. The stock cue material ([`ToneSequence::for_cue`]) reproduces the
//! scoreboard's firmware sounds: short beeps for the pre-count tick and a
//! detected basket, and a six-note melody for the end of the shooting window.

use crate::time::TimeDuration;
use crate::types::{GameCue, MelodyError, ToneStep};
use heapless::Vec;

/// Maximum number of steps a cue sequence can hold.
///
/// Sized for the longest stock cue (six notes, each followed by a rest).
pub const CUE_CAPACITY: usize = 16;

/// Beep frequency for the single-tone cues.
pub const BEEP_HZ: u16 = 1000;

/// Time's-up melody: E5 E4 C4 G4 E5 A5 with note lengths derived from the
/// tempo denominators 8 8 8 2 8 1 (length = 1000 ms / denominator).
const TIMESUP_MELODY: [(u16, u64); 6] = [
    (659, 125),
    (330, 125),
    (262, 125),
    (392, 500),
    (659, 125),
    (880, 1000),
];

/// A tone sequence with per-step timing.
///
/// Sequences play exactly once; cues are one-shot by nature, so there is no
/// looping. Evaluation is purely elapsed-time based, which makes playback
/// idempotent under arbitrarily fast polling.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
/// * `N` - Maximum number of steps this sequence can hold
#[derive(Debug, Clone)]
pub struct ToneSequence<D: TimeDuration, const N: usize> {
    steps: Vec<ToneStep<D>, N>,
}

impl<D: TimeDuration, const N: usize> ToneSequence<D, N> {
    /// Creates a new sequence builder.
    pub fn builder() -> MelodyBuilder<D, N> {
        MelodyBuilder::new()
    }

    /// Returns the tone active at a given elapsed time since playback began.
    ///
    /// # Returns
    /// * `Some(Some(freq))` - A note is sounding at this time
    /// * `Some(None)` - A rest is active at this time
    /// * `None` - The sequence has finished
    pub fn tone_at(&self, elapsed: D) -> Option<Option<u16>> {
        let elapsed_millis = elapsed.as_millis();

        let mut accumulated = 0u64;
        for step in &self.steps {
            let step_end = accumulated + step.duration.as_millis();
            if elapsed_millis < step_end {
                return Some(step.freq_hz);
            }
            accumulated = step_end;
        }

        None
    }

    /// Calculates the total playback duration.
    pub fn total_duration(&self) -> D {
        let total_millis: u64 = self.steps.iter().map(|s| s.duration.as_millis()).sum();
        D::from_millis(total_millis)
    }

    /// Returns the number of steps in this sequence.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns a reference to the step at the given index.
    pub fn get_step(&self, index: usize) -> Option<&ToneStep<D>> {
        self.steps.get(index)
    }
}

impl<D: TimeDuration> ToneSequence<D, CUE_CAPACITY> {
    /// Returns the fixed sequence for a game cue.
    ///
    /// Single beeps for [`GameCue::LaunchTick`] (400 ms) and
    /// [`GameCue::Basket`] (200 ms); the time's-up melody plays each note
    /// followed by a rest of 30% of the note length.
    pub fn for_cue(cue: GameCue) -> Self {
        let mut steps: Vec<ToneStep<D>, CUE_CAPACITY> = Vec::new();

        match cue {
            GameCue::LaunchTick => {
                let _ = steps.push(ToneStep::note(BEEP_HZ, D::from_millis(400)));
            }
            GameCue::Basket => {
                let _ = steps.push(ToneStep::note(BEEP_HZ, D::from_millis(200)));
            }
            GameCue::TimesUp => {
                // CUE_CAPACITY is sized for this table; pushes cannot fail.
                for &(freq, millis) in TIMESUP_MELODY.iter() {
                    let _ = steps.push(ToneStep::note(freq, D::from_millis(millis)));
                    let _ = steps.push(ToneStep::rest(D::from_millis(millis * 3 / 10)));
                }
            }
        }

        Self { steps }
    }
}

/// Builder for constructing validated tone sequences.
#[derive(Debug)]
pub struct MelodyBuilder<D: TimeDuration, const N: usize> {
    steps: Vec<ToneStep<D>, N>,
}

impl<D: TimeDuration, const N: usize> MelodyBuilder<D, N> {
    /// Creates a new empty sequence builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Adds a note to the sequence.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The sequence is full
    pub fn note(mut self, freq_hz: u16, duration: D) -> Result<Self, MelodyError> {
        self.steps
            .push(ToneStep::note(freq_hz, duration))
            .map_err(|_| MelodyError::CapacityExceeded)?;
        Ok(self)
    }

    /// Adds a rest to the sequence.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The sequence is full
    pub fn rest(mut self, duration: D) -> Result<Self, MelodyError> {
        self.steps
            .push(ToneStep::rest(duration))
            .map_err(|_| MelodyError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the sequence.
    ///
    /// # Errors
    /// * `EmptySequence` - No steps were added
    pub fn build(self) -> Result<ToneSequence<D, N>, MelodyError> {
        if self.steps.is_empty() {
            return Err(MelodyError::EmptySequence);
        }

        Ok(ToneSequence { steps: self.steps })
    }
}

impl<D: TimeDuration, const N: usize> Default for MelodyBuilder<D, N> {
    fn default() -> Self {
        Self::new()
    }
}
