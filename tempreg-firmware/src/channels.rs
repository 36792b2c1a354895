//! State shared between tasks
//!
//! The button latch is the only cross-context state: button tasks set
//! flags on rising edges and the monitor task consumes them.

use tempreg_core::input::ButtonLatch;

/// Pending button presses
pub static BUTTONS: ButtonLatch = ButtonLatch::new();
