//! Joystick trait

use crate::state::Direction;

/// Trait for a polled direction source
pub trait Joystick {
    /// Current stick position. Returns `Center` when at rest.
    fn direction(&mut self) -> Direction;
}
