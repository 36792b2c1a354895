//! Board-agnostic core logic for the temperature monitor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensor, display, joystick, LED, buzzer)
//! - Screen state machine and input events
//! - Button press latch shared with the edge handlers
//! - Session state and unit conversion
//! - Threshold alert evaluation
//! - Screen rendering
//! - The cooperative main loop
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alert;
pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod traits;
