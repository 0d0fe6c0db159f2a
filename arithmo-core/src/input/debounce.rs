//! Logical-press debouncing
//!
//! A single physical press is observed by several consecutive scans at
//! the 10 ms loop cadence. The settle window is enforced by timestamp
//! comparison instead of a blocking sleep, so the loop never stalls.
//!
//! This is a rate limiter, not an edge detector: a key held past the
//! settle window fires again, and re-presses inside the window are
//! dropped.

use super::keymap::KeyEvent;

/// Suppresses duplicate logical presses within the settle window
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    settle_ms: u32,
    last_accept_ms: Option<u32>,
}

impl Debouncer {
    /// Create a debouncer with the given settle window
    pub const fn new(settle_ms: u32) -> Self {
        Self {
            settle_ms,
            last_accept_ms: None,
        }
    }

    /// Filter a raw scan down to at most one logical press per window
    ///
    /// Returns the event when it should be acted upon. Timestamps wrap
    /// safely across the u32 millisecond counter.
    pub fn filter(&mut self, now_ms: u32, event: KeyEvent) -> Option<KeyEvent> {
        if !event.pressed {
            return None;
        }
        if let Some(last) = self.last_accept_ms {
            if now_ms.wrapping_sub(last) < self.settle_ms {
                return None;
            }
        }
        self.last_accept_ms = Some(now_ms);
        Some(event)
    }
}
