//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the board's sensor, display, input and actuator drivers.

pub mod actuator;
pub mod display;
pub mod input;
pub mod sensor;

pub use actuator::{AlertLed, Buzzer};
pub use display::{DisplayDriver, DisplayError};
pub use input::Joystick;
pub use sensor::{SensorError, TemperatureSensor};
