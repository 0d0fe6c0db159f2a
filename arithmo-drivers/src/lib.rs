//! Hardware driver logic for the Arithmo quiz firmware
//!
//! Board-agnostic driver implementations over `embedded-hal` traits:
//!
//! - 4x4 matrix keypad scanner
//! - Buzzer note tables and PWM tone math
//! - Status LED brightness/blink patterns
//!
//! The firmware crate binds these to concrete RP2040 peripherals.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod buzzer;
pub mod keypad;
pub mod led;
