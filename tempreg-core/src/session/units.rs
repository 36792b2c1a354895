//! Temperature units

/// Display unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Express a Celsius value in this unit
    pub fn from_celsius(self, celsius: f32) -> f32 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    /// Single-letter suffix used on screen
    pub fn symbol(self) -> char {
        match self {
            Unit::Celsius => 'C',
            Unit::Fahrenheit => 'F',
        }
    }

    /// The other unit
    pub fn toggled(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }
}

/// `F = C * 9/5 + 32`
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}
