//! TMP102 digital temperature sensor
//!
//! I2C sensor with a 12-bit two's-complement temperature register
//! (0.0625°C per LSB). Extended mode widens the register to 13 bits; the
//! mode is flagged in bit 0 of the low byte, so both layouts decode here.

use embedded_hal::i2c::I2c;
use tempreg_core::traits::{SensorError, TemperatureSensor};

/// Default 7-bit address (ADD0 tied to GND)
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// Register pointers
mod reg {
    pub const TEMPERATURE: u8 = 0x00;
}

/// Degrees per LSB
const RESOLUTION_C: f32 = 0.0625;

/// Plausible range; anything outside is a bus glitch
const MIN_C: f32 = -55.0;
const MAX_C: f32 = 150.0;

/// TMP102 on an I2C bus
pub struct Tmp102<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Tmp102<I2C> {
    /// Create a sensor at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a sensor at a strapped address (0x48..=0x4B)
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Read the raw temperature register
    pub fn read_raw(&mut self) -> Result<[u8; 2], SensorError> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg::TEMPERATURE], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(buf)
    }
}

/// Decode the temperature register
pub fn raw_to_celsius(bytes: [u8; 2]) -> f32 {
    let word = i16::from_be_bytes(bytes);
    let counts = if bytes[1] & 0x01 != 0 {
        // Extended mode: 13 bits, left-aligned
        word >> 3
    } else {
        word >> 4
    };
    counts as f32 * RESOLUTION_C
}

impl<I2C: I2c> TemperatureSensor for Tmp102<I2C> {
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let celsius = raw_to_celsius(self.read_raw()?);
        if !(MIN_C..=MAX_C).contains(&celsius) {
            return Err(SensorError::InvalidReading);
        }
        Ok(celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    /// Answers every read with a fixed register value
    struct MockBus {
        register: [u8; 2],
        fail: bool,
        last_address: Option<u8>,
        last_pointer: Option<u8>,
    }

    impl MockBus {
        fn new(register: [u8; 2]) -> Self {
            Self {
                register,
                fail: false,
                last_address: None,
                last_pointer: None,
            }
        }
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.last_address = Some(address);
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.last_pointer = bytes.first().copied(),
                    Operation::Read(buf) => buf.copy_from_slice(&self.register[..buf.len()]),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_datasheet_values() {
        assert_eq!(raw_to_celsius([0x7F, 0xF0]), 127.9375);
        assert_eq!(raw_to_celsius([0x19, 0x00]), 25.0);
        assert_eq!(raw_to_celsius([0x00, 0x40]), 0.25);
        assert_eq!(raw_to_celsius([0x00, 0x00]), 0.0);
        assert_eq!(raw_to_celsius([0xFF, 0xC0]), -0.25);
        assert_eq!(raw_to_celsius([0xE7, 0x00]), -25.0);
        assert_eq!(raw_to_celsius([0xC9, 0x00]), -55.0);
    }

    #[test]
    fn test_extended_mode() {
        // 150°C in 13-bit mode: 0x12C0 << 3 with the EM flag
        assert_eq!(raw_to_celsius([0x4B, 0x01]), 150.0);
        assert_eq!(raw_to_celsius([0x0C, 0x81]), 25.0);
    }

    #[test]
    fn test_read_uses_temperature_register() {
        let mut sensor = Tmp102::new(MockBus::new([0x17, 0x80]));

        assert_eq!(sensor.read_celsius(), Ok(23.5));

        let bus = sensor.release();
        assert_eq!(bus.last_address, Some(0x48));
        assert_eq!(bus.last_pointer, Some(0x00));
    }

    #[test]
    fn test_bus_error() {
        let mut bus = MockBus::new([0, 0]);
        bus.fail = true;
        let mut sensor = Tmp102::with_address(bus, 0x49);

        assert_eq!(sensor.read_celsius(), Err(SensorError::Bus));
    }

    #[test]
    fn test_implausible_reading() {
        // -128°C, the most negative 12-bit value
        let mut sensor = Tmp102::new(MockBus::new([0x80, 0x00]));
        assert_eq!(sensor.read_celsius(), Err(SensorError::InvalidReading));
    }
}
