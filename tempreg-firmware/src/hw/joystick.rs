//! Joystick axes on the RP2040 ADC

use embassy_rp::adc::{Adc, Blocking, Channel};

use tempreg_drivers::input::AxisReader;

/// X and Y potentiometers on two ADC inputs
pub struct AdcAxes {
    adc: Adc<'static, Blocking>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl AdcAxes {
    pub fn new(adc: Adc<'static, Blocking>, x: Channel<'static>, y: Channel<'static>) -> Self {
        Self { adc, x, y }
    }
}

impl AxisReader for AdcAxes {
    fn read_axes(&mut self) -> Result<(u16, u16), ()> {
        let x = self.adc.blocking_read(&mut self.x).map_err(|_| ())?;
        let y = self.adc.blocking_read(&mut self.y).map_err(|_| ())?;
        Ok((x, y))
    }
}
