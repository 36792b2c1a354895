//! Piezo buzzer on an RP2040 PWM slice
//!
//! The tone period sets the slice divider and wrap; the duty cycle sets
//! the channel A compare value.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use tempreg_core::traits::Buzzer;
use tempreg_drivers::actuator::{pwm_timing, PwmTiming};

/// Buzzer on PWM channel A
pub struct PwmBuzzer {
    pwm: Pwm<'static>,
    config: PwmConfig,
    timing: PwmTiming,
    /// PWM input clock (clk_sys)
    clock_hz: u32,
}

impl PwmBuzzer {
    /// Wrap a configured slice, starting silent
    pub fn new(mut pwm: Pwm<'static>, clock_hz: u32) -> Self {
        let mut config = PwmConfig::default();
        config.compare_a = 0;
        pwm.set_config(&config);

        Self {
            pwm,
            timing: PwmTiming {
                divider: 1,
                top: config.top,
            },
            config,
            clock_hz,
        }
    }
}

impl Buzzer for PwmBuzzer {
    fn set_period(&mut self, period_s: f32) {
        self.timing = pwm_timing(self.clock_hz, period_s);
        self.config.divider = self.timing.divider.into();
        self.config.top = self.timing.top;
        self.pwm.set_config(&self.config);
    }

    fn set_duty_cycle(&mut self, duty: f32) {
        self.config.compare_a = self.timing.compare_for_duty(duty);
        self.pwm.set_config(&self.config);
    }
}
