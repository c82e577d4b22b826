//! Diffed two-field numeric display.
//!
//! The scoreboard renders two independent 2-digit fields (score and clock)
//! on a MAX72xx-style driver. [`ScoreboardDisplay`] caches the last digit
//! written per position and only touches the peripheral when a digit
//! actually changes, keeping bus traffic and flicker at zero for an idle
//! board.

/// Trait for abstracting the 7-segment display driver.
///
/// Addressing follows the MAX72xx convention: a field address selects the
/// digit bank, a digit index selects the position within it. Handle any
/// hardware errors internally - these methods cannot fail.
pub trait SegmentDisplay {
    /// Writes one digit (0-9) at the given field and position.
    fn set_digit(&mut self, field_addr: u8, digit: u8, value: u8, decimal_point: bool);

    /// Enters (`true`) or leaves (`false`) the driver's low-power shutdown.
    fn set_sleep(&mut self, sleep: bool);
}

/// The two logical display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayField {
    /// Current score total.
    Score,
    /// Seconds remaining on the clock.
    Clock,
}

impl DisplayField {
    /// Hardware address of the field's digit bank.
    pub fn addr(self) -> u8 {
        match self {
            DisplayField::Score => 0,
            DisplayField::Clock => 1,
        }
    }
}

/// Digit index of the units position within a field.
const UNITS_DIGIT: u8 = 0;
/// Digit index of the tens position within a field.
const TENS_DIGIT: u8 = 1;

/// Last-rendered digits for one field. Unset at power-on so the first
/// render always writes.
#[derive(Debug, Default, Clone, Copy)]
struct DigitCache {
    tens: Option<u8>,
    units: Option<u8>,
}

/// Renders score and clock values with per-digit diffing.
///
/// Values are truncated to their low two decimal digits (a score of 104
/// renders as 04), matching the physical two-digit fields.
pub struct ScoreboardDisplay<D: SegmentDisplay> {
    device: D,
    score: DigitCache,
    clock: DigitCache,
    asleep: bool,
}

impl<D: SegmentDisplay> ScoreboardDisplay<D> {
    /// Wraps a display driver with empty digit caches, awake.
    pub fn new(device: D) -> Self {
        Self {
            device,
            score: DigitCache::default(),
            clock: DigitCache::default(),
            asleep: false,
        }
    }

    /// Renders a value into a field, writing only the digits that changed.
    pub fn render(&mut self, field: DisplayField, value: u32) {
        let value = (value % 100) as u8;
        let tens = value / 10;
        let units = value % 10;

        let addr = field.addr();
        let cache = match field {
            DisplayField::Score => &mut self.score,
            DisplayField::Clock => &mut self.clock,
        };

        if cache.tens != Some(tens) {
            self.device.set_digit(addr, TENS_DIGIT, tens, false);
            cache.tens = Some(tens);
        }

        if cache.units != Some(units) {
            self.device.set_digit(addr, UNITS_DIGIT, units, false);
            cache.units = Some(units);
        }
    }

    /// Changes the display power state. Repeated identical requests are
    /// suppressed, so one idle timeout yields exactly one shutdown call.
    pub fn sleep(&mut self, sleep: bool) {
        if sleep != self.asleep {
            self.device.set_sleep(sleep);
            self.asleep = sleep;
        }
    }

    /// Returns true if the display is in low-power shutdown.
    pub fn is_asleep(&self) -> bool {
        self.asleep
    }

    /// Returns a reference to the display driver.
    pub fn device(&self) -> &D {
        &self.device
    }
}
