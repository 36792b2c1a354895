//! Embassy async tasks
//!
//! Button tasks only latch edges; all application work happens in the
//! monitor task.

pub mod buttons;
pub mod monitor;

pub use buttons::button_task;
pub use monitor::monitor_task;
