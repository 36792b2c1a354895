//! Menu navigation state
//!
//! A single `Screen` value replaces per-screen flags, so two screens can
//! never be active at once.

pub mod events;
pub mod machine;

pub use events::{Button, Direction, InputEvent};
pub use machine::{Effect, Screen, Topic, Transition};
