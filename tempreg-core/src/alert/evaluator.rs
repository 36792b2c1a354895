//! Threshold alert evaluator
//!
//! Compares the saved samples against the alert bounds once per loop
//! cycle and produces the LED/buzzer actions to perform.

use heapless::Vec;

use crate::session::{SessionState, SAMPLE_SLOTS};

/// Upper bound on actions per pass: a toggle and a burst per sample per bound
pub const MAX_ACTIONS: usize = SAMPLE_SLOTS * 2 * 2;

/// Which bound was breached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertKind {
    /// A sample above `threshold_high`
    High,
    /// A sample below `threshold_low`
    Low,
}

/// LED behavior for breached bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertMode {
    /// Flip the LED once per breaching sample per pass
    #[default]
    Toggle,
    /// Hold the LED on while any sample breaches; buzz on the rising edge
    Level,
}

/// A single actuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertAction {
    /// Flip an alert LED
    ToggleLed(AlertKind),
    /// Drive an alert LED to a level
    SetLed(AlertKind, bool),
    /// Sound one alert tone burst
    Burst,
}

/// Actions produced by one evaluation pass, in execution order
pub type AlertPlan = Vec<AlertAction, MAX_ACTIONS>;

/// Threshold alert evaluator
#[derive(Debug, Clone)]
pub struct AlertEvaluator {
    mode: AlertMode,
    /// Upper bound breached on the previous pass (level mode)
    high_breached: bool,
    /// Lower bound breached on the previous pass (level mode)
    low_breached: bool,
}

impl Default for AlertEvaluator {
    fn default() -> Self {
        Self::new(AlertMode::default())
    }
}

impl AlertEvaluator {
    /// Create an evaluator
    pub fn new(mode: AlertMode) -> Self {
        Self {
            mode,
            high_breached: false,
            low_breached: false,
        }
    }

    /// Run one pass over the saved samples
    ///
    /// Updates the logical LED levels held in the session and returns the
    /// matching actions for the actuators.
    pub fn evaluate(&mut self, session: &mut SessionState) -> AlertPlan {
        match self.mode {
            AlertMode::Toggle => Self::evaluate_toggle(session),
            AlertMode::Level => self.evaluate_level(session),
        }
    }

    /// Every breaching sample flips its LED and sounds a burst. An even
    /// number of breaches leaves the LED where it started.
    fn evaluate_toggle(session: &mut SessionState) -> AlertPlan {
        let mut plan = AlertPlan::new();
        let samples = *session.samples();
        let high = session.threshold_high() as f32;
        let low = session.threshold_low() as f32;

        for kind in [AlertKind::High, AlertKind::Low] {
            for &sample in &samples {
                if breaches(kind, sample, high, low) {
                    session.leds_mut().toggle(kind);
                    // Capacity covers every sample for both bounds
                    let _ = plan.push(AlertAction::ToggleLed(kind));
                    let _ = plan.push(AlertAction::Burst);
                }
            }
        }

        plan
    }

    fn evaluate_level(&mut self, session: &mut SessionState) -> AlertPlan {
        let mut plan = AlertPlan::new();
        let samples = *session.samples();
        let high = session.threshold_high() as f32;
        let low = session.threshold_low() as f32;

        for kind in [AlertKind::High, AlertKind::Low] {
            let breached = samples.iter().any(|&s| breaches(kind, s, high, low));
            let was_breached = match kind {
                AlertKind::High => core::mem::replace(&mut self.high_breached, breached),
                AlertKind::Low => core::mem::replace(&mut self.low_breached, breached),
            };

            session.leds_mut().set(kind, breached);
            let _ = plan.push(AlertAction::SetLed(kind, breached));
            if breached && !was_breached {
                let _ = plan.push(AlertAction::Burst);
            }
        }

        plan
    }
}

/// Strict comparison: a sample equal to a bound does not alert
fn breaches(kind: AlertKind, sample: f32, high: f32, low: f32) -> bool {
    match kind {
        AlertKind::High => sample > high,
        AlertKind::Low => sample < low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(samples: [f32; SAMPLE_SLOTS]) -> SessionState {
        let mut session = SessionState::default();
        for (slot, value) in samples.into_iter().enumerate() {
            session.set_sample(slot, value);
        }
        session
    }

    fn toggle_count(plan: &AlertPlan, kind: AlertKind) -> usize {
        plan.iter()
            .filter(|a| **a == AlertAction::ToggleLed(kind))
            .count()
    }

    fn bursts(plan: &AlertPlan) -> usize {
        plan.iter().filter(|a| **a == AlertAction::Burst).count()
    }

    #[test]
    fn test_one_breach_each_way() {
        let mut session = session_with([40.0, 25.0, 35.0]);
        let mut evaluator = AlertEvaluator::default();

        let plan = evaluator.evaluate(&mut session);

        assert_eq!(toggle_count(&plan, AlertKind::High), 1);
        assert_eq!(toggle_count(&plan, AlertKind::Low), 1);
        assert_eq!(bursts(&plan), 2);
        assert!(session.leds().high);
        assert!(session.leds().low);
    }

    #[test]
    fn test_even_breaches_cancel_out() {
        let mut session = session_with([40.0, 41.0, 25.0]);
        let mut evaluator = AlertEvaluator::default();

        let plan = evaluator.evaluate(&mut session);

        assert_eq!(toggle_count(&plan, AlertKind::High), 2);
        assert_eq!(toggle_count(&plan, AlertKind::Low), 1);
        // Two flips in one pass return the LED to where it started
        assert!(!session.leds().high);
        assert!(session.leds().low);
    }

    #[test]
    fn test_within_bounds_is_quiet() {
        let mut session = session_with([30.0, 35.0, 39.0]);
        let mut evaluator = AlertEvaluator::default();

        let plan = evaluator.evaluate(&mut session);

        assert!(plan.is_empty());
        assert_eq!(session.leds(), Default::default());
    }

    #[test]
    fn test_toggle_order_high_then_low() {
        let mut session = session_with([25.0, 40.0, 35.0]);
        let mut evaluator = AlertEvaluator::default();

        let plan = evaluator.evaluate(&mut session);

        assert_eq!(
            plan.as_slice(),
            &[
                AlertAction::ToggleLed(AlertKind::High),
                AlertAction::Burst,
                AlertAction::ToggleLed(AlertKind::Low),
                AlertAction::Burst,
            ]
        );
    }

    #[test]
    fn test_toggle_repeats_every_pass() {
        let mut session = session_with([40.0, 35.0, 35.0]);
        let mut evaluator = AlertEvaluator::default();

        evaluator.evaluate(&mut session);
        assert!(session.leds().high);
        evaluator.evaluate(&mut session);
        assert!(!session.leds().high);
    }

    #[test]
    fn test_power_on_samples_trip_low_bound() {
        // All three slots start at 0 °C
        let mut session = SessionState::default();
        let mut evaluator = AlertEvaluator::default();

        let plan = evaluator.evaluate(&mut session);

        assert_eq!(toggle_count(&plan, AlertKind::Low), 3);
        assert!(session.leds().low);
    }

    #[test]
    fn test_level_mode_holds_led() {
        let mut session = session_with([40.0, 41.0, 35.0]);
        let mut evaluator = AlertEvaluator::new(AlertMode::Level);

        let plan = evaluator.evaluate(&mut session);
        assert!(session.leds().high);
        assert!(!session.leds().low);
        assert_eq!(bursts(&plan), 1);

        // Still breached: LED stays on, no new burst
        let plan = evaluator.evaluate(&mut session);
        assert!(session.leds().high);
        assert_eq!(bursts(&plan), 0);

        // Cleared
        session.set_sample(0, 35.0);
        session.set_sample(1, 35.0);
        let plan = evaluator.evaluate(&mut session);
        assert!(!session.leds().high);
        assert_eq!(bursts(&plan), 0);
        assert!(plan.contains(&AlertAction::SetLed(AlertKind::High, false)));
    }
}
