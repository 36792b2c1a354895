//! Configuration types
//!
//! Compiled-in device defaults.

pub mod types;

pub use types::*;
