//! RP2040 glue for collaborators that need chip-specific peripherals

pub mod buzzer;
pub mod joystick;

pub use buzzer::PwmBuzzer;
pub use joystick::AdcAxes;
