//! GPIO alert LED
//!
//! Drives an indicator LED from any stateful output pin. The pin can be
//! wired active-high (default) or active-low.

use embedded_hal::digital::StatefulOutputPin;
use tempreg_core::traits::AlertLed;

/// LED on a GPIO pin
pub struct GpioLed<P> {
    pin: P,
    /// If true, LED on = pin low
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: StatefulOutputPin> GpioLed<P> {
    /// Create an LED, starting dark
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set(false);
        led
    }

    /// LED lit when the pin is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// LED lit when the pin is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: StatefulOutputPin> AlertLed for GpioLed<P> {
    fn set(&mut self, on: bool) {
        self.on = on;
        // GPIO writes on the supported boards are infallible
        let _ = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn toggle(&mut self) {
        self.on = !self.on;
        let _ = self.pin.toggle();
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
