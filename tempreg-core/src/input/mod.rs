//! Input capture
//!
//! The button latch is the only state shared between the edge-detection
//! context and the main loop.

pub mod latch;

pub use latch::ButtonLatch;
