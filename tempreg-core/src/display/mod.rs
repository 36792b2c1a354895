//! Display content
//!
//! Text layout for each screen on the 14x6 character panel.

pub mod frame;
pub mod renderer;

pub use frame::{Frame, COLS, ROWS};
pub use renderer::{present, Renderer};
