//! Game state machine and event arbitration.
//!
//! [`GameController`] owns every peripheral through its trait and runs the
//! whole game from a single [`GameController::service`] call per loop
//! iteration: debounce the start button, advance the countdown, arbitrate
//! shot events against the dead-time window, request audio cues and push
//! both display fields. Nothing in here blocks; the dead-time is a recorded
//! instant checked against the clock, not a delay.

use crate::cue::{Buzzer, CuePlayer};
use crate::countdown::Countdown;
use crate::display::{DisplayField, ScoreboardDisplay, SegmentDisplay};
use crate::input::{ButtonPin, DebouncedButton};
use crate::sensor::ShotSensor;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::GameCue;
use crate::{FULL_WINDOW_SECS, IDLE_SLEEP_TIMEOUT_MS, SHOT_CLOCK_SECS, SHOT_DEAD_TIME_MS};

/// The current phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    /// Waiting for a start press. Shot detector masked.
    Idle,
    /// Count-in before the shot clock, one tick beep per second.
    PreCount,
    /// Shot clock running; detected shots score.
    Shooting,
    /// Window just closed; falls back to `Idle` on the next cycle.
    Expired,
}

/// Single-instance controller for the whole scoreboard.
///
/// Constructed once at boot and serviced every iteration of the polling
/// loop. The loop cadence must stay below the 15 ms debounce interval so
/// button and sensor latency remain imperceptible.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `P` - Button pin implementation type
/// * `S` - Shot sensor implementation type
/// * `B` - Buzzer implementation type
/// * `D` - Display driver implementation type
pub struct GameController<'t, I, T, P, S, B, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    P: ButtonPin,
    S: ShotSensor,
    B: Buzzer,
    D: SegmentDisplay,
{
    time_source: &'t T,
    button: DebouncedButton<P, I>,
    sensor: S,
    cues: CuePlayer<'t, I, B, T>,
    countdown: Countdown<'t, I, T>,
    display: ScoreboardDisplay<D>,
    phase: GamePhase,
    score: u32,
    remaining_secs: u32,
    last_tick_secs: u32,
    shot_accepted_at: Option<I>,
    idle_since: Option<I>,
}

impl<'t, I, T, P, S, B, D> GameController<'t, I, T, P, S, B, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    P: ButtonPin,
    S: ShotSensor,
    B: Buzzer,
    D: SegmentDisplay,
{
    /// Creates an idle controller showing a full clock and zero score.
    ///
    /// The display inactivity window starts now, so a board left untouched
    /// after power-on goes to sleep like one left after a game.
    pub fn new(button_pin: P, sensor: S, buzzer: B, display: D, time_source: &'t T) -> Self {
        Self {
            time_source,
            button: DebouncedButton::new(button_pin),
            sensor,
            cues: CuePlayer::new(buzzer, time_source),
            countdown: Countdown::new(time_source),
            display: ScoreboardDisplay::new(display),
            phase: GamePhase::Idle,
            score: 0,
            remaining_secs: FULL_WINDOW_SECS,
            last_tick_secs: 0,
            shot_accepted_at: None,
            idle_since: Some(time_source.now()),
        }
    }

    /// Runs one iteration of the control cycle.
    pub fn service(&mut self) {
        self.cues.service();

        let now = self.time_source.now();
        let pressed = self.button.poll(now);

        match self.phase {
            GamePhase::Idle => {
                // Masked: a stray detector event outside the shooting
                // window must never reach the score.
                self.sensor.clear();

                if pressed {
                    self.start_game();
                } else if let Some(since) = self.idle_since {
                    if now.duration_since(since).as_millis() >= IDLE_SLEEP_TIMEOUT_MS {
                        self.display.sleep(true);
                    }
                }
            }
            GamePhase::PreCount => {
                self.sensor.clear();

                let remaining = self.countdown.remaining_secs();

                // One tick per observed decrement, tracked against the last
                // value that fired rather than wall-clock, so sampling
                // faster than 1 Hz still beeps exactly once per second.
                if remaining < self.last_tick_secs {
                    self.cues.request(GameCue::LaunchTick);
                    self.last_tick_secs = remaining;
                }

                // Cue evaluation above deliberately precedes the phase
                // flip: the final tick and the flip share a cycle.
                if remaining <= SHOT_CLOCK_SECS {
                    self.sensor.clear();
                    self.phase = GamePhase::Shooting;
                }

                self.remaining_secs = remaining;
            }
            GamePhase::Shooting => {
                let in_dead_time = self.shot_accepted_at.is_some_and(|accepted_at| {
                    now.duration_since(accepted_at).as_millis() < SHOT_DEAD_TIME_MS
                });

                if in_dead_time {
                    // Sensor ringing from the accepted shot; discard.
                    self.sensor.clear();
                } else if self.sensor.take_shot() {
                    self.score = self.score.saturating_add(1);
                    self.cues.request(GameCue::Basket);
                    self.shot_accepted_at = Some(now);
                }

                if self.countdown.is_running() {
                    self.remaining_secs = self.countdown.remaining_secs();
                } else {
                    self.cues.request(GameCue::TimesUp);
                    self.remaining_secs = 0;
                    self.idle_since = Some(now);
                    self.phase = GamePhase::Expired;
                }
            }
            GamePhase::Expired => {
                // No bookkeeping of its own; a fresh press restarts from
                // Idle on the next cycle.
                self.sensor.clear();
                self.phase = GamePhase::Idle;
            }
        }

        self.display.render(DisplayField::Score, self.score);
        self.display.render(DisplayField::Clock, self.remaining_secs);
    }

    fn start_game(&mut self) {
        // Wake before any digit write lands.
        self.display.sleep(false);

        self.idle_since = None;
        self.score = 0;
        self.remaining_secs = FULL_WINDOW_SECS;
        self.last_tick_secs = FULL_WINDOW_SECS;
        self.shot_accepted_at = None;
        self.sensor.clear();
        self.countdown
            .start(I::Duration::from_secs(FULL_WINDOW_SECS as u64));
        self.phase = GamePhase::PreCount;
    }

    /// Returns the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the current score total.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the seconds remaining shown on the clock field.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Returns a reference to the cue player.
    pub fn cues(&self) -> &CuePlayer<'t, I, B, T> {
        &self.cues
    }

    /// Returns a reference to the display wrapper.
    pub fn display(&self) -> &ScoreboardDisplay<D> {
        &self.display
    }
}
