//! Controller coordinating navigation and session state
//!
//! The controller owns the active screen and the session. It feeds input
//! events through the screen state machine and applies the session side
//! effects of each accepted transition.

use crate::config::DeviceConfig;
use crate::session::SessionState;
use crate::state::{Effect, InputEvent, Screen, Transition};

/// Controller state
#[derive(Debug, Clone)]
pub struct Controller {
    /// Active screen
    screen: Screen,
    /// Saved samples, bounds and preferences
    session: SessionState,
}

impl Controller {
    /// Create a controller on the root menu
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            screen: Screen::MainRoot,
            session: SessionState::new(config),
        }
    }

    /// Get the active screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Get the session
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Mutable session, for the alert evaluator
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Process one input event
    ///
    /// `reading` is the live sensor value (°C) stored by a save.
    /// Returns the accepted transition, or `None` if the event does
    /// nothing on the active screen.
    pub fn process_input(&mut self, event: InputEvent, reading: f32) -> Option<Transition> {
        let transition = self.screen.transition(event)?;
        self.apply_effect(transition.effect, reading);
        self.screen = transition.to;
        Some(transition)
    }

    fn apply_effect(&mut self, effect: Effect, reading: f32) {
        match effect {
            Effect::None => {}
            Effect::SaveSample => self.session.save_sample(reading),
            // Rejected edits leave the bound unchanged; the transition still counts
            Effect::AdjustHigh(delta) => {
                self.session.adjust_high(delta);
            }
            Effect::AdjustLow(delta) => {
                self.session.adjust_low(delta);
            }
            Effect::ToggleUnit => {
                self.session.toggle_unit();
            }
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(&DeviceConfig::DEFAULT)
    }
}
