//! PWM tone timing
//!
//! Piezo buzzers are driven by a PWM slice whose counter wraps at `top`
//! after a clock pre-divider. These helpers pick the divider/top pair for
//! a requested period and the compare value for a duty cycle.

/// Largest integer clock divider on RP2040-class PWM slices
pub const MAX_DIVIDER: u32 = 255;

/// Divider and wrap value for one tone period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    /// Integer clock divider (1-255)
    pub divider: u8,
    /// Counter wrap value; the period is `top + 1` divided ticks
    pub top: u16,
}

impl PwmTiming {
    /// Compare value giving `duty` (0.0..=1.0) of the period
    ///
    /// Saturates at `u16::MAX` when `top` already uses the full counter.
    pub fn compare_for_duty(&self, duty: f32) -> u16 {
        let span = self.top as f32 + 1.0;
        ((duty.clamp(0.0, 1.0) * span) as u32).min(u16::MAX as u32) as u16
    }
}

/// Pick the smallest divider that lets the period fit a 16-bit counter
///
/// Periods longer than the slice can produce saturate at the slowest
/// setting; non-positive periods give the fastest.
pub fn pwm_timing(clock_hz: u32, period_s: f32) -> PwmTiming {
    let ticks = if period_s > 0.0 {
        (clock_hz as f32 * period_s) as u32
    } else {
        1
    };
    let divider = (ticks / 65_536 + 1).clamp(1, MAX_DIVIDER);
    let top = (ticks / divider).saturating_sub(1).min(u16::MAX as u32);

    PwmTiming {
        divider: divider as u8,
        top: top as u16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLK_SYS: u32 = 125_000_000;

    #[test]
    fn test_alert_tone() {
        // 659 Hz from a 125 MHz system clock
        let timing = pwm_timing(CLK_SYS, 1.0 / 659.0);
        assert_eq!(timing.divider, 3);

        let hz = CLK_SYS as f32 / (timing.divider as f32 * (timing.top as f32 + 1.0));
        assert!((hz - 659.0).abs() < 0.5);
    }

    #[test]
    fn test_fast_tone_needs_no_divider() {
        let timing = pwm_timing(CLK_SYS, 1.0 / 4000.0);
        assert_eq!(timing.divider, 1);
        assert_eq!(timing.top, 31_249);
    }

    #[test]
    fn test_slow_period_saturates() {
        let timing = pwm_timing(CLK_SYS, 10.0);
        assert_eq!(timing.divider, 255);
        assert_eq!(timing.top, u16::MAX);
    }

    #[test]
    fn test_duty() {
        let timing = PwmTiming {
            divider: 1,
            top: 999,
        };
        assert_eq!(timing.compare_for_duty(0.5), 500);
        assert_eq!(timing.compare_for_duty(0.0), 0);
        assert_eq!(timing.compare_for_duty(2.0), 1000);
    }

    #[test]
    fn test_full_duty_at_slowest_period() {
        let timing = pwm_timing(CLK_SYS, 10.0);
        assert_eq!(timing.top, u16::MAX);
        assert_eq!(timing.compare_for_duty(1.0), u16::MAX);
        assert_eq!(timing.compare_for_duty(0.5), 32_768);
    }
}
