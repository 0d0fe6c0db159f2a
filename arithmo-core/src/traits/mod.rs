//! Hardware abstraction traits
//!
//! The interface between game logic and hardware-specific
//! implementations. Output peripherals (buzzer, LEDs, display) are
//! commanded through the types in [`crate::feedback`] instead; only
//! input needs a polled capability trait.

pub mod keys;

pub use keys::KeySource;
