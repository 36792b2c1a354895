//! Cooperative main loop
//!
//! One task owns the controller, the alert evaluator and every
//! collaborator. Each cycle consumes at most one input event, renders the
//! active screen and runs the alert pass. The settle delay and the alert
//! tone are awaited in place, so nothing else in this loop runs while
//! they elapse; button edges keep latching in their own context.

use embedded_hal_async::delay::DelayNs;

use crate::alert::{AlertAction, AlertEvaluator, AlertKind, AlertPlan};
use crate::config::DeviceConfig;
use crate::controller::Controller;
use crate::display::{present, Renderer};
use crate::input::ButtonLatch;
use crate::state::{InputEvent, Screen, Transition};
use crate::traits::{
    AlertLed, Buzzer, DisplayDriver, DisplayError, Joystick, SensorError, TemperatureSensor,
};

/// Board collaborators driven by the main loop
pub struct Hardware<S, D, J, L, B> {
    pub sensor: S,
    pub display: D,
    pub joystick: J,
    /// Lit for samples above the upper bound
    pub led_high: L,
    /// Lit for samples below the lower bound
    pub led_low: L,
    pub buzzer: B,
}

/// What happened during one cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Event consumed this cycle
    pub event: Option<InputEvent>,
    /// Transition accepted for that event
    pub transition: Option<Transition>,
    /// Screen active at the end of the cycle
    pub screen: Screen,
    /// Reading used this cycle (°C), possibly stale
    pub reading: f32,
    /// Sensor fault; `reading` holds the last good value
    pub sensor_error: Option<SensorError>,
    /// Render fault
    pub display_error: Option<DisplayError>,
    /// Alert actions performed
    pub alerts: AlertPlan,
}

/// The device main loop
pub struct MainLoop<'a, S, D, J, L, B, T> {
    config: DeviceConfig,
    controller: Controller,
    evaluator: AlertEvaluator,
    renderer: Renderer,
    hw: Hardware<S, D, J, L, B>,
    delay: T,
    latch: &'a ButtonLatch,
    /// Last good sensor value (°C)
    last_reading: f32,
}

impl<'a, S, D, J, L, B, T> MainLoop<'a, S, D, J, L, B, T>
where
    S: TemperatureSensor,
    D: DisplayDriver,
    J: Joystick,
    L: AlertLed,
    B: Buzzer,
    T: DelayNs,
{
    /// Create a main loop on the root menu
    pub fn new(
        config: DeviceConfig,
        hw: Hardware<S, D, J, L, B>,
        delay: T,
        latch: &'a ButtonLatch,
    ) -> Self {
        Self {
            controller: Controller::new(&config),
            evaluator: AlertEvaluator::new(config.alert_mode),
            renderer: Renderer::new(),
            config,
            hw,
            delay,
            latch,
            last_reading: 0.0,
        }
    }

    /// Get the controller
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Mutable controller
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Get the collaborators
    pub fn hardware(&self) -> &Hardware<S, D, J, L, B> {
        &self.hw
    }

    /// Last good sensor value (°C)
    pub fn last_reading(&self) -> f32 {
        self.last_reading
    }

    /// Power-on sequence
    ///
    /// Quiets the actuators, applies display levels and holds the banner
    /// for `banner_ms`. The banner wait runs even if the display fails;
    /// the first display error is returned afterwards. Presses latched
    /// before the banner goes up are dropped.
    pub async fn start(&mut self) -> Result<(), DisplayError> {
        self.latch.clear_all();
        self.hw.led_high.set(false);
        self.hw.led_low.set(false);
        self.hw.buzzer.silence();

        let result = self.show_banner();
        self.delay.delay_ms(self.config.banner_ms).await;
        result
    }

    fn show_banner(&mut self) -> Result<(), DisplayError> {
        self.hw.display.set_contrast(self.config.contrast)?;
        self.hw.display.set_brightness(self.config.brightness)?;
        let frame = self.renderer.render_banner(self.config.banner);
        present(frame, &mut self.hw.display)
    }

    /// Run one loop iteration
    pub async fn run_cycle(&mut self) -> CycleReport {
        let event = self.next_event();

        let sensor_error = match self.hw.sensor.read_celsius() {
            Ok(celsius) => {
                self.last_reading = celsius;
                None
            }
            Err(e) => Some(e),
        };
        let reading = self.last_reading;

        let transition = event.and_then(|e| self.controller.process_input(e, reading));

        let frame = self.renderer.render(
            self.controller.screen(),
            self.controller.session(),
            reading,
        );
        let display_error = present(frame, &mut self.hw.display).err();

        let alerts = self.evaluator.evaluate(self.controller.session_mut());
        self.perform(&alerts).await;

        if transition.is_some() {
            self.delay.delay_ms(self.config.settle_ms).await;
        }
        self.delay.delay_ms(self.config.poll_interval_ms).await;

        CycleReport {
            event,
            transition,
            screen: self.controller.screen(),
            reading,
            sensor_error,
            display_error,
            alerts,
        }
    }

    /// Latched buttons first; the joystick is only polled when none is pending
    fn next_event(&mut self) -> Option<InputEvent> {
        self.latch
            .take_next()
            .or_else(|| InputEvent::from_direction(self.hw.joystick.direction()))
    }

    async fn perform(&mut self, plan: &AlertPlan) {
        for action in plan {
            match *action {
                AlertAction::ToggleLed(kind) => self.led(kind).toggle(),
                AlertAction::SetLed(kind, on) => self.led(kind).set(on),
                AlertAction::Burst => self.burst().await,
            }
        }
    }

    fn led(&mut self, kind: AlertKind) -> &mut L {
        match kind {
            AlertKind::High => &mut self.hw.led_high,
            AlertKind::Low => &mut self.hw.led_low,
        }
    }

    /// One alert tone, then silence
    async fn burst(&mut self) {
        self.hw.buzzer.set_period(self.config.tone_period_s());
        self.hw.buzzer.set_duty_cycle(self.config.tone_duty);
        self.delay.delay_ms(self.config.burst_ms).await;
        self.hw.buzzer.silence();
    }
}
