//! Screen state machine
//!
//! The device is always on exactly one screen. Navigation is a pure
//! function of the current screen and one input event; session side
//! effects are described by [`Effect`] and applied by the controller.

use super::events::{Button, Direction, InputEvent};

/// Menu items on the root list, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Topic {
    CurrentTemp,
    History,
    Thresholds,
    Units,
}

impl Topic {
    /// All topics in menu order
    pub const ALL: [Topic; 4] = [
        Topic::CurrentTemp,
        Topic::History,
        Topic::Thresholds,
        Topic::Units,
    ];

    /// Menu label for this topic
    pub fn label(self) -> &'static str {
        match self {
            Topic::CurrentTemp => "CurrentTemp",
            Topic::History => "TempHistory",
            Topic::Thresholds => "FeverLimit",
            Topic::Units => "Fahrenheit",
        }
    }
}

/// Device screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Root menu, "current temperature" highlighted
    #[default]
    MainRoot,
    /// Root menu, "saved history" highlighted
    HistoryTopic,
    /// Root menu, "thresholds" highlighted
    ThresholdTopic,
    /// Root menu, "units" highlighted
    UnitTopic,
    /// Live temperature reading
    TempScan,
    /// The three saved samples
    SavedHistory,
    /// Alert bounds
    ThresholdView,
    /// Reading in both units
    UnitView,
}

/// Session mutation requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Navigation only
    None,
    /// Store the live reading in the first sample slot
    SaveSample,
    /// Move the upper alert bound by the given number of degrees
    AdjustHigh(i8),
    /// Move the lower alert bound by the given number of degrees
    AdjustLow(i8),
    /// Switch between Celsius and Fahrenheit
    ToggleUnit,
}

/// An accepted transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub effect: Effect,
}

impl Screen {
    /// Check if this screen is one of the root menu variants
    pub fn is_menu(&self) -> bool {
        self.topic_selected().is_some()
    }

    /// Highlighted item when this screen is the root menu
    pub fn topic_selected(&self) -> Option<Topic> {
        match self {
            Screen::MainRoot => Some(Topic::CurrentTemp),
            Screen::HistoryTopic => Some(Topic::History),
            Screen::ThresholdTopic => Some(Topic::Thresholds),
            Screen::UnitTopic => Some(Topic::Units),
            _ => None,
        }
    }

    /// Process an event and return the accepted transition, if any
    ///
    /// Unmatched (screen, event) pairs return `None` and leave the
    /// device where it is.
    pub fn transition(self, event: InputEvent) -> Option<Transition> {
        use Button::*;
        use Direction::*;
        use InputEvent::{ButtonPress, Joystick};
        use Screen::*;

        let (to, effect) = match (self, event) {
            // Global escape to the root menu
            (_, ButtonPress(L)) => (MainRoot, Effect::None),

            // Root menu
            (MainRoot, ButtonPress(A)) => (TempScan, Effect::None),
            (MainRoot, Joystick(South)) => (HistoryTopic, Effect::None),

            (HistoryTopic, Joystick(North)) => (MainRoot, Effect::None),
            (HistoryTopic, Joystick(South)) => (ThresholdTopic, Effect::None),
            (HistoryTopic, ButtonPress(A)) => (SavedHistory, Effect::None),

            (ThresholdTopic, Joystick(North)) => (HistoryTopic, Effect::None),
            (ThresholdTopic, Joystick(South)) => (UnitTopic, Effect::None),
            (ThresholdTopic, ButtonPress(A)) => (ThresholdView, Effect::None),

            (UnitTopic, Joystick(North)) => (ThresholdTopic, Effect::None),
            (UnitTopic, ButtonPress(A)) => (UnitView, Effect::None),

            // Detail screens
            (TempScan, ButtonPress(B)) => (MainRoot, Effect::None),
            (TempScan, ButtonPress(R)) => (TempScan, Effect::SaveSample),

            (SavedHistory, ButtonPress(B)) => (HistoryTopic, Effect::None),

            (ThresholdView, ButtonPress(B)) => (ThresholdTopic, Effect::None),
            (ThresholdView, Joystick(North)) => (ThresholdView, Effect::AdjustHigh(1)),
            (ThresholdView, Joystick(South)) => (ThresholdView, Effect::AdjustHigh(-1)),
            (ThresholdView, Joystick(East)) => (ThresholdView, Effect::AdjustLow(1)),
            (ThresholdView, Joystick(West)) => (ThresholdView, Effect::AdjustLow(-1)),

            (UnitView, ButtonPress(B)) => (UnitTopic, Effect::None),
            (UnitView, ButtonPress(X)) => (UnitView, Effect::ToggleUnit),

            _ => return None,
        };

        Some(Transition {
            from: self,
            to,
            effect,
        })
    }
}
