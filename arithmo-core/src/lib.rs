//! Board-agnostic game logic for the Arithmo quiz firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Game state machine for the question/answer cycle
//! - Question generation and the bounded answer buffer
//! - Keypad map and logical-press debouncing
//! - The "approach" easing primitive for display animation
//! - Feedback command types consumed by peripheral tasks
//! - Quiz profile definitions

#![no_std]
#![deny(unsafe_code)]

pub mod anim;
pub mod answer;
pub mod config;
pub mod feedback;
pub mod game;
pub mod input;
pub mod question;
pub mod rng;
pub mod state;
pub mod traits;
