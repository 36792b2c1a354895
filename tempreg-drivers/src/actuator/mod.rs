//! Indicator outputs

pub mod buzzer;
pub mod led;

pub use buzzer::{pwm_timing, PwmTiming};
pub use led::GpioLed;
