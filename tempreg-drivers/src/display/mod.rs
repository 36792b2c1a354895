//! Display drivers

pub mod pcd8544;

pub use pcd8544::Pcd8544;
