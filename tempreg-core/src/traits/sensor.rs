//! Temperature sensor trait

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed (NAK, arbitration loss, timeout)
    Bus,
    /// Sensor answered with a value that cannot be a temperature
    InvalidReading,
}

/// Trait for temperature sensors
///
/// Takes `&mut self` because bus reads require mutable access.
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    fn read_celsius(&mut self) -> Result<f32, SensorError>;
}
