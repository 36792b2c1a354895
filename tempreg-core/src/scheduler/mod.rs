//! Main loop scheduler
//!
//! Single cooperative task that polls input, advances navigation,
//! renders and evaluates alerts.

pub mod main_loop;

pub use main_loop::{CycleReport, Hardware, MainLoop};
