//! Analog thumb joystick
//!
//! Two potentiometer axes on 12-bit ADC channels, resting near mid-scale.
//! The axis with the larger deflection wins; small deflections inside the
//! dead zone read as centered.

use tempreg_core::state::Direction;
use tempreg_core::traits::Joystick;

/// Mid-scale of a 12-bit ADC
pub const ADC_CENTER: u16 = 2048;

/// Default dead zone, about a quarter of full travel
pub const DEFAULT_DEAD_ZONE: u16 = 1000;

/// ADC access for the two axes
pub trait AxisReader {
    /// Read (x, y) in ADC counts (0-4095)
    #[allow(clippy::result_unit_err)]
    fn read_axes(&mut self) -> Result<(u16, u16), ()>;
}

/// Decode a direction from raw axis counts
///
/// Higher X is East, higher Y is North.
pub fn direction_from_axes(x: u16, y: u16, dead_zone: u16) -> Direction {
    let dx = x as i32 - ADC_CENTER as i32;
    let dy = y as i32 - ADC_CENTER as i32;

    if dx.abs().max(dy.abs()) <= dead_zone as i32 {
        return Direction::Center;
    }

    if dx.abs() > dy.abs() {
        if dx > 0 {
            Direction::East
        } else {
            Direction::West
        }
    } else if dy > 0 {
        Direction::North
    } else {
        Direction::South
    }
}

/// Joystick over two ADC channels
pub struct AnalogJoystick<A> {
    adc: A,
    dead_zone: u16,
    /// Swap North/South for sticks mounted upside down
    invert_y: bool,
}

impl<A: AxisReader> AnalogJoystick<A> {
    /// Create a joystick with the default dead zone
    pub fn new(adc: A) -> Self {
        Self {
            adc,
            dead_zone: DEFAULT_DEAD_ZONE,
            invert_y: false,
        }
    }

    /// Change the dead zone (ADC counts from center)
    pub fn with_dead_zone(mut self, dead_zone: u16) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    /// Flip the Y axis
    pub fn with_inverted_y(mut self, invert: bool) -> Self {
        self.invert_y = invert;
        self
    }
}

impl<A: AxisReader> Joystick for AnalogJoystick<A> {
    fn direction(&mut self) -> Direction {
        // A failed conversion reads as no deflection
        let Ok((x, y)) = self.adc.read_axes() else {
            return Direction::Center;
        };
        let y = if self.invert_y { 4095u16.saturating_sub(y) } else { y };
        direction_from_axes(x, y, self.dead_zone)
    }
}
