//! Character display trait

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI/I2C transfer failed
    Bus,
    /// Control pin (DC, RST, backlight) could not be driven
    Pin,
}

/// Trait for a small text display
///
/// Drawing calls write to an off-screen buffer; nothing is visible until
/// [`DisplayDriver::refresh`].
pub trait DisplayDriver {
    /// Blank the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at a character cell
    ///
    /// - `col`: column in character cells
    /// - `row`: row in character cells
    ///
    /// Text running past the right edge is clipped.
    fn print_string(&mut self, text: &str, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Push the frame buffer to the panel
    fn refresh(&mut self) -> Result<(), DisplayError>;

    /// Set panel contrast (0.0..=1.0)
    fn set_contrast(&mut self, level: f32) -> Result<(), DisplayError>;

    /// Set backlight brightness (0.0..=1.0)
    fn set_brightness(&mut self, level: f32) -> Result<(), DisplayError>;
}
