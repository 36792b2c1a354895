//! Temperature sensors

pub mod tmp102;

pub use tmp102::Tmp102;
