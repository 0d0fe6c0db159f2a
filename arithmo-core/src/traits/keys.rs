//! Key source trait for the matrix keypad

use crate::input::KeyEvent;

/// Trait for polled key input
///
/// Implementations scan the physical key matrix once per call and
/// report at most one held key. Non-blocking: returns a released event
/// when nothing is down.
pub trait KeySource {
    /// Scan the matrix once
    fn scan(&mut self) -> KeyEvent;
}
