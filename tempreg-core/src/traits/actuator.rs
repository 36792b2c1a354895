//! LED and buzzer traits

/// Trait for a single alert LED
pub trait AlertLed {
    /// Turn the LED on or off
    fn set(&mut self, on: bool);

    /// Flip the LED
    fn toggle(&mut self);

    /// Check if the LED is currently lit
    fn is_on(&self) -> bool;
}

/// Trait for a PWM-driven piezo buzzer
///
/// A duty cycle of zero silences the output.
pub trait Buzzer {
    /// Set the tone period in seconds
    fn set_period(&mut self, period_s: f32);

    /// Set the duty cycle (0.0..=1.0)
    fn set_duty_cycle(&mut self, duty: f32);

    /// Silence the buzzer
    fn silence(&mut self) {
        self.set_duty_cycle(0.0);
    }
}
