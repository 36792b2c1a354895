//! Configuration type definitions
//!
//! The device has no configuration file. Everything here is compiled in
//! and checked once at startup.

use crate::alert::AlertMode;
use crate::session::Unit;

/// Default upper alert bound (°C)
pub const DEFAULT_THRESHOLD_HIGH: i16 = 39;

/// Default lower alert bound (°C)
pub const DEFAULT_THRESHOLD_LOW: i16 = 30;

/// Pause after an accepted transition before the next input is read
pub const SETTLE_MS: u32 = 2000;

/// How long the startup banner stays on screen
pub const BANNER_MS: u32 = 3000;

/// Startup banner text
pub const BANNER: &str = "Temp Reg Device";

/// Alert tone frequency
pub const ALERT_TONE_HZ: u32 = 659;

/// Alert tone length
pub const ALERT_BURST_MS: u32 = 1000;

/// Idle wait between loop cycles
pub const POLL_INTERVAL_MS: u32 = 50;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Lower bound is not strictly below upper bound
    ThresholdOrder,
    /// Contrast outside 0.0..=1.0
    ContrastRange,
    /// Brightness outside 0.0..=1.0
    BrightnessRange,
    /// Tone duty cycle outside 0.0..=1.0
    DutyRange,
    /// Tone frequency of zero
    ToneFrequency,
}

/// Device configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Upper alert bound (°C)
    pub threshold_high: i16,
    /// Lower alert bound (°C)
    pub threshold_low: i16,
    /// Unit shown on the scan and history screens at power-on
    pub unit: Unit,
    /// Post-transition settle delay
    pub settle_ms: u32,
    /// Startup banner duration
    pub banner_ms: u32,
    /// Startup banner text
    pub banner: &'static str,
    /// Alert tone frequency
    pub tone_hz: u32,
    /// Alert tone duty cycle (0.0..=1.0)
    pub tone_duty: f32,
    /// Alert tone length
    pub burst_ms: u32,
    /// LCD contrast (0.0..=1.0)
    pub contrast: f32,
    /// LCD backlight brightness (0.0..=1.0)
    pub brightness: f32,
    /// Idle wait between loop cycles
    pub poll_interval_ms: u32,
    /// LED behavior for breached bounds
    pub alert_mode: AlertMode,
}

impl DeviceConfig {
    /// Factory defaults
    pub const DEFAULT: Self = Self {
        threshold_high: DEFAULT_THRESHOLD_HIGH,
        threshold_low: DEFAULT_THRESHOLD_LOW,
        unit: Unit::Celsius,
        settle_ms: SETTLE_MS,
        banner_ms: BANNER_MS,
        banner: BANNER,
        tone_hz: ALERT_TONE_HZ,
        tone_duty: 0.5,
        burst_ms: ALERT_BURST_MS,
        contrast: 0.5,
        brightness: 0.5,
        poll_interval_ms: POLL_INTERVAL_MS,
        alert_mode: AlertMode::Toggle,
    };

    /// Check all fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold_low >= self.threshold_high {
            return Err(ConfigError::ThresholdOrder);
        }
        if !unit_interval(self.contrast) {
            return Err(ConfigError::ContrastRange);
        }
        if !unit_interval(self.brightness) {
            return Err(ConfigError::BrightnessRange);
        }
        if !unit_interval(self.tone_duty) {
            return Err(ConfigError::DutyRange);
        }
        if self.tone_hz == 0 {
            return Err(ConfigError::ToneFrequency);
        }
        Ok(())
    }

    /// Alert tone period in seconds
    pub fn tone_period_s(&self) -> f32 {
        1.0 / self.tone_hz.max(1) as f32
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn unit_interval(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}
