//! Keypad input interpretation
//!
//! Raw scan events come from the matrix keypad driver; this module maps
//! them to key symbols and filters them down to logical presses.

pub mod debounce;
pub mod keymap;

pub use debounce::Debouncer;
pub use keymap::{key_at, KeyEvent, KEY_MAP};
