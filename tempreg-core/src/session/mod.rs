//! Session state
//!
//! In-memory data that lives for the power-on duration: saved samples,
//! alert bounds, unit preference and the alert LED levels. Owned by the
//! main loop and mutated only from it.

pub mod units;

pub use units::{celsius_to_fahrenheit, Unit};

use crate::alert::AlertKind;
use crate::config::DeviceConfig;

/// Number of saved sample slots
pub const SAMPLE_SLOTS: usize = 3;

/// Logical state of the two alert LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertLeds {
    pub high: bool,
    pub low: bool,
}

impl AlertLeds {
    /// Current level of one LED
    pub fn get(&self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::High => self.high,
            AlertKind::Low => self.low,
        }
    }

    /// Drive one LED to a level
    pub fn set(&mut self, kind: AlertKind, on: bool) {
        match kind {
            AlertKind::High => self.high = on,
            AlertKind::Low => self.low = on,
        }
    }

    /// Flip one LED, returning the new level
    pub fn toggle(&mut self, kind: AlertKind) -> bool {
        let on = !self.get(kind);
        self.set(kind, on);
        on
    }
}

/// Power-cycle scoped session data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionState {
    samples: [f32; SAMPLE_SLOTS],
    threshold_high: i16,
    threshold_low: i16,
    unit: Unit,
    leds: AlertLeds,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&DeviceConfig::DEFAULT)
    }
}

impl SessionState {
    /// Fresh session seeded from the device configuration
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            samples: [0.0; SAMPLE_SLOTS],
            threshold_high: config.threshold_high,
            threshold_low: config.threshold_low,
            unit: config.unit,
            leds: AlertLeds::default(),
        }
    }

    /// Saved samples in slot order (°C)
    pub fn samples(&self) -> &[f32; SAMPLE_SLOTS] {
        &self.samples
    }

    /// Save a reading
    ///
    /// Always overwrites the first slot; the other two are only written
    /// through [`SessionState::set_sample`].
    pub fn save_sample(&mut self, celsius: f32) {
        self.samples[0] = celsius;
    }

    /// Write a specific slot. Out-of-range slots are ignored.
    pub fn set_sample(&mut self, slot: usize, celsius: f32) {
        if let Some(sample) = self.samples.get_mut(slot) {
            *sample = celsius;
        }
    }

    /// Upper alert bound (°C)
    pub fn threshold_high(&self) -> i16 {
        self.threshold_high
    }

    /// Lower alert bound (°C)
    pub fn threshold_low(&self) -> i16 {
        self.threshold_low
    }

    /// Move the upper bound
    ///
    /// Returns `false` and leaves the bound alone if the result would not
    /// stay above the lower bound.
    pub fn adjust_high(&mut self, delta: i8) -> bool {
        let next = self.threshold_high.saturating_add(delta as i16);
        if next <= self.threshold_low {
            return false;
        }
        self.threshold_high = next;
        true
    }

    /// Move the lower bound
    ///
    /// Returns `false` and leaves the bound alone if the result would not
    /// stay below the upper bound.
    pub fn adjust_low(&mut self, delta: i8) -> bool {
        let next = self.threshold_low.saturating_add(delta as i16);
        if next >= self.threshold_high {
            return false;
        }
        self.threshold_low = next;
        true
    }

    /// Display unit preference
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Switch the display unit
    pub fn toggle_unit(&mut self) -> Unit {
        self.unit = self.unit.toggled();
        self.unit
    }

    /// Alert LED levels
    pub fn leds(&self) -> AlertLeds {
        self.leds
    }

    /// Mutable alert LED levels, for the evaluator
    pub fn leds_mut(&mut self) -> &mut AlertLeds {
        &mut self.leds
    }
}
