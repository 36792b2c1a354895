//! PCD8544 LCD driver (Nokia 5110 / N5110 module)
//!
//! 84x48 monochrome panel over SPI with a data/command pin. Text is drawn
//! into a local frame buffer with `embedded-graphics` and pushed to the
//! panel on refresh. The backlight is a PWM channel.

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal::spi::SpiDevice;
use tempreg_core::traits::{DisplayDriver, DisplayError};

/// Panel dimensions
pub const WIDTH: usize = 84;
pub const HEIGHT: usize = 48;
const BANKS: usize = HEIGHT / 8;

/// Character cell, 5x8 glyph plus one column of spacing
pub const CELL_WIDTH: usize = 6;
pub const CELL_HEIGHT: usize = 8;

/// Highest operating voltage setting
pub const VOP_MAX: u8 = 0x7F;

/// PCD8544 commands
#[allow(dead_code)]
mod cmd {
    /// Function set, basic instruction set, horizontal addressing
    pub const FUNCTION_BASIC: u8 = 0x20;
    /// Function set, extended instruction set
    pub const FUNCTION_EXTENDED: u8 = 0x21;
    /// Function set, power down
    pub const POWER_DOWN: u8 = 0x24;

    // Basic set
    pub const DISPLAY_BLANK: u8 = 0x08;
    pub const DISPLAY_NORMAL: u8 = 0x0C;
    pub const DISPLAY_ALL_ON: u8 = 0x09;
    pub const DISPLAY_INVERSE: u8 = 0x0D;
    pub const SET_Y: u8 = 0x40;
    pub const SET_X: u8 = 0x80;

    // Extended set
    pub const TEMP_COEFF: u8 = 0x04;
    pub const BIAS: u8 = 0x10;
    pub const SET_VOP: u8 = 0x80;
}

/// Bias system 1:48, the usual setting for these modules
const BIAS_1_48: u8 = 0x03;

/// Monochrome frame buffer, one byte per 8-pixel column in a bank
#[derive(Clone)]
pub struct FrameBuffer {
    banks: [[u8; WIDTH]; BANKS],
}

impl FrameBuffer {
    /// Blank buffer
    pub const fn new() -> Self {
        Self {
            banks: [[0; WIDTH]; BANKS],
        }
    }

    /// Blank every pixel
    pub fn clear(&mut self) {
        for bank in &mut self.banks {
            bank.fill(0);
        }
    }

    /// Read one pixel
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.banks[y / 8][x] & (1 << (y % 8)) != 0
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let bit = 1 << (y % 8);
        if on {
            self.banks[y / 8][x] |= bit;
        } else {
            self.banks[y / 8][x] &= !bit;
        }
    }

    /// Draw text on the character grid, clipping at the right edge
    pub fn print(&mut self, text: &str, col: u8, row: u8) {
        let y = row as usize * CELL_HEIGHT;
        if y >= HEIGHT {
            return;
        }

        let style = text_style();
        let mut x = col as usize * CELL_WIDTH;
        for ch in text.chars() {
            if x + CELL_WIDTH > WIDTH {
                break;
            }
            let mut utf8 = [0u8; 4];
            let glyph = ch.encode_utf8(&mut utf8);
            let origin = Point::new(x as i32, y as i32);
            // Drawing into RAM cannot fail
            let _ = Text::with_baseline(glyph, origin, style, Baseline::Top).draw(self);
            x += CELL_WIDTH;
        }
    }

    /// Bank rows, top to bottom
    pub fn banks(&self) -> &[[u8; WIDTH]; BANKS] {
        &self.banks
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as usize, point.y as usize, color.is_on());
            }
        }
        Ok(())
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_5X8)
        .text_color(BinaryColor::On)
        .build()
}

/// Map a 0.0..=1.0 contrast level onto the Vop register
pub fn contrast_to_vop(level: f32) -> u8 {
    (level.clamp(0.0, 1.0) * VOP_MAX as f32 + 0.5) as u8
}

/// Map a 0.0..=1.0 brightness level onto a PWM compare value
pub fn brightness_to_duty(level: f32, max_duty: u16) -> u16 {
    (level.clamp(0.0, 1.0) * max_duty as f32 + 0.5) as u16
}

/// PCD8544 panel
///
/// - `SPI`: device with chip select already managed
/// - `DC`: data/command select (high = data)
/// - `RST`: active-low reset
/// - `BL`: backlight PWM channel
pub struct Pcd8544<SPI, DC, RST, BL> {
    spi: SPI,
    dc: DC,
    rst: RST,
    backlight: BL,
    frame: FrameBuffer,
}

impl<SPI, DC, RST, BL> Pcd8544<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: SetDutyCycle,
{
    /// Create a driver. Call [`Pcd8544::init`] before drawing.
    pub fn new(spi: SPI, dc: DC, rst: RST, backlight: BL) -> Self {
        Self {
            spi,
            dc,
            rst,
            backlight,
            frame: FrameBuffer::new(),
        }
    }

    /// Reset the controller and bring the panel up blank
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError> {
        self.rst.set_low().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(1);
        self.rst.set_high().map_err(|_| DisplayError::Pin)?;

        self.commands(&[
            cmd::FUNCTION_EXTENDED,
            cmd::SET_VOP | contrast_to_vop(0.5),
            cmd::TEMP_COEFF,
            cmd::BIAS | BIAS_1_48,
            cmd::FUNCTION_BASIC,
            cmd::DISPLAY_NORMAL,
        ])?;

        self.frame.clear();
        self.refresh()
    }

    /// Access the frame buffer for direct `embedded-graphics` drawing
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    fn commands(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Pin)?;
        self.spi.write(bytes).map_err(|_| DisplayError::Bus)
    }

    fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::Pin)?;
        self.spi.write(bytes).map_err(|_| DisplayError::Bus)
    }
}

impl<SPI, DC, RST, BL> DisplayDriver for Pcd8544<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: SetDutyCycle,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.frame.clear();
        Ok(())
    }

    fn print_string(&mut self, text: &str, col: u8, row: u8) -> Result<(), DisplayError> {
        self.frame.print(text, col, row);
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), DisplayError> {
        self.commands(&[cmd::SET_X, cmd::SET_Y])?;
        // Horizontal addressing wraps X into the next bank
        for bank in 0..BANKS {
            let row = self.frame.banks[bank];
            self.data(&row)?;
        }
        Ok(())
    }

    fn set_contrast(&mut self, level: f32) -> Result<(), DisplayError> {
        self.commands(&[
            cmd::FUNCTION_EXTENDED,
            cmd::SET_VOP | contrast_to_vop(level),
            cmd::FUNCTION_BASIC,
        ])
    }

    fn set_brightness(&mut self, level: f32) -> Result<(), DisplayError> {
        let duty = brightness_to_duty(level, self.backlight.max_duty_cycle());
        self.backlight
            .set_duty_cycle(duty)
            .map_err(|_| DisplayError::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::pwm::ErrorType as PwmErrorType;
    use embedded_hal::spi::{ErrorKind, ErrorType as SpiErrorType, Operation};

    /// Records bytes with the DC level they were sent under
    #[derive(Default)]
    struct Log {
        commands: Vec<u8>,
        data: Vec<u8>,
        dc_high: bool,
    }

    struct MockSpi<'a>(&'a core::cell::RefCell<Log>);

    impl SpiErrorType for MockSpi<'_> {
        type Error = ErrorKind;
    }

    impl SpiDevice for MockSpi<'_> {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), ErrorKind> {
            let mut log = self.0.borrow_mut();
            for op in operations {
                if let Operation::Write(bytes) = op {
                    if log.dc_high {
                        log.data.extend_from_slice(bytes);
                    } else {
                        log.commands.extend_from_slice(bytes);
                    }
                }
            }
            Ok(())
        }
    }

    struct MockDc<'a>(&'a core::cell::RefCell<Log>);

    impl PinErrorType for MockDc<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockDc<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().dc_high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.borrow_mut().dc_high = true;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockPwm {
        duty: u16,
    }

    impl PwmErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
            self.duty = duty;
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn cell_has_ink(frame: &FrameBuffer, col: usize, row: usize) -> bool {
        let x0 = col * CELL_WIDTH;
        let y0 = row * CELL_HEIGHT;
        (x0..x0 + CELL_WIDTH).any(|x| (y0..y0 + CELL_HEIGHT).any(|y| frame.pixel(x, y)))
    }

    #[test]
    fn test_contrast_mapping() {
        assert_eq!(contrast_to_vop(0.0), 0);
        assert_eq!(contrast_to_vop(0.5), 64);
        assert_eq!(contrast_to_vop(1.0), 127);
        assert_eq!(contrast_to_vop(7.0), 127);
    }

    #[test]
    fn test_brightness_mapping() {
        assert_eq!(brightness_to_duty(0.5, 1000), 500);
        assert_eq!(brightness_to_duty(-1.0, 1000), 0);
        assert_eq!(brightness_to_duty(1.0, u16::MAX), u16::MAX);
    }

    #[test]
    fn test_print_lands_in_cell() {
        let mut frame = FrameBuffer::new();
        frame.print("A", 2, 1);

        assert!(cell_has_ink(&frame, 2, 1));
        assert!(!cell_has_ink(&frame, 1, 1));
        assert!(!cell_has_ink(&frame, 2, 0));
        assert!(!cell_has_ink(&frame, 3, 1));
    }

    #[test]
    fn test_print_clips_right_edge() {
        let mut frame = FrameBuffer::new();
        frame.print("MMMMMMMMMMMMMMMMMMMM", 0, 0);

        assert!(cell_has_ink(&frame, 13, 0));
        // Nothing spills into the next text row
        assert!(!cell_has_ink(&frame, 0, 1));
    }

    #[test]
    fn test_print_below_panel_ignored() {
        let mut frame = FrameBuffer::new();
        frame.print("X", 0, 6);
        assert!(frame.banks().iter().all(|b| b.iter().all(|&c| c == 0)));
    }

    #[test]
    fn test_refresh_sends_whole_buffer() {
        let log = core::cell::RefCell::new(Log::default());
        let mut lcd = Pcd8544::new(
            MockSpi(&log),
            MockDc(&log),
            MockPin::default(),
            MockPwm::default(),
        );
        lcd.init(&mut NoDelay).unwrap();

        assert!(lcd.rst.high);
        let sent = log.borrow();
        assert_eq!(
            &sent.commands[..6],
            &[0x21, 0x80 | 64, 0x04, 0x13, 0x20, 0x0C]
        );
        assert_eq!(sent.data.len(), WIDTH * BANKS);
    }

    #[test]
    fn test_levels() {
        let log = core::cell::RefCell::new(Log::default());
        let mut lcd = Pcd8544::new(
            MockSpi(&log),
            MockDc(&log),
            MockPin::default(),
            MockPwm::default(),
        );

        lcd.set_brightness(0.25).unwrap();
        lcd.set_contrast(1.0).unwrap();

        assert_eq!(lcd.backlight.duty, 250);
        assert_eq!(log.borrow().commands, [0x21, 0xFF, 0x20]);
    }
}
