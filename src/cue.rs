//! Non-blocking audio cue playback.
//!
//! Provides [`CuePlayer`] which maps [`GameCue`]s to fixed tone sequences and
//! advances playback one [`CuePlayer::service`] call at a time. Also defines
//! the [`Buzzer`] trait for hardware abstraction.

use crate::melody::{CUE_CAPACITY, ToneSequence};
use crate::time::{TimeInstant, TimeSource};
use crate::types::GameCue;

/// Trait for abstracting buzzer hardware.
///
/// Implement this for your sounder (PWM pin, piezo driver, DAC, etc.) to
/// allow the cue player to control it. Handle any hardware errors internally -
/// these methods cannot fail.
pub trait Buzzer {
    /// Starts sounding a tone at the given frequency.
    fn tone(&mut self, freq_hz: u16);

    /// Silences the buzzer.
    fn off(&mut self);
}

/// Plays game cues on a buzzer without blocking the caller.
///
/// [`CuePlayer::request`] loads the cue's fixed tone sequence and starts it;
/// [`CuePlayer::service`] must be called every loop iteration to advance
/// playback. The buzzer is only touched when the active tone changes, so
/// servicing faster than the note rate costs nothing.
///
/// A new request while a cue is playing overrides it. There is no invalid-cue
/// path: [`GameCue`] is a closed enum, so every request maps to a sequence.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `B` - Buzzer implementation type
/// * `T` - Time source implementation type
pub struct CuePlayer<'t, I: TimeInstant, B: Buzzer, T: TimeSource<I>> {
    buzzer: B,
    time_source: &'t T,
    current_cue: Option<GameCue>,
    sequence: Option<ToneSequence<I::Duration, CUE_CAPACITY>>,
    start_time: Option<I>,
    sounding: Option<u16>,
}

impl<'t, I: TimeInstant, B: Buzzer, T: TimeSource<I>> CuePlayer<'t, I, B, T> {
    /// Creates a new idle cue player with the buzzer silenced.
    pub fn new(mut buzzer: B, time_source: &'t T) -> Self {
        buzzer.off();

        Self {
            buzzer,
            time_source,
            current_cue: None,
            sequence: None,
            start_time: None,
            sounding: None,
        }
    }

    /// Requests playback of a cue, overriding any cue already playing.
    ///
    /// Playback begins immediately; the first tone is applied before this
    /// method returns and subsequent steps advance via [`CuePlayer::service`].
    pub fn request(&mut self, cue: GameCue) {
        self.current_cue = Some(cue);
        self.sequence = Some(ToneSequence::for_cue(cue));
        self.start_time = Some(self.time_source.now());
        self.service();
    }

    /// Advances playback. Call once per loop iteration.
    ///
    /// Does nothing when no cue is playing.
    pub fn service(&mut self) {
        let (Some(sequence), Some(start_time)) = (&self.sequence, self.start_time) else {
            return;
        };

        let elapsed = self.time_source.now().duration_since(start_time);

        match sequence.tone_at(elapsed) {
            Some(tone) => {
                if tone != self.sounding {
                    match tone {
                        Some(freq) => self.buzzer.tone(freq),
                        None => self.buzzer.off(),
                    }
                    self.sounding = tone;
                }
            }
            None => {
                if self.sounding.is_some() {
                    self.buzzer.off();
                }
                self.sounding = None;
                self.current_cue = None;
                self.sequence = None;
                self.start_time = None;
            }
        }
    }

    /// Returns the cue currently playing, if any.
    pub fn current_cue(&self) -> Option<GameCue> {
        self.current_cue
    }

    /// Returns true if no cue is playing.
    pub fn is_idle(&self) -> bool {
        self.current_cue.is_none()
    }

    /// Returns a reference to the buzzer hardware.
    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }
}
