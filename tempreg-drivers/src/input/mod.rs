//! Input devices

pub mod joystick;

pub use joystick::{direction_from_axes, AnalogJoystick, AxisReader};
