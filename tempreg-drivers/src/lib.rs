//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tempreg-core for the monitor's peripherals:
//!
//! - Temperature sensor (TMP102 over I2C)
//! - Text display (PCD8544 / Nokia 5110 over SPI)
//! - Analog joystick direction decoding
//! - GPIO alert LEDs and buzzer PWM timing

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod display;
pub mod input;
pub mod sensor;
