//! Threshold alerts
//!
//! Turns breached alert bounds into LED and buzzer actions.

pub mod evaluator;

pub use evaluator::{AlertAction, AlertEvaluator, AlertKind, AlertMode, AlertPlan};
