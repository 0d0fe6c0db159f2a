//! Status LED brightness control with non-blocking blink
//!
//! One `StatusLed` per RGB channel. The owner calls [`StatusLed::update`]
//! on every tick with the current time and writes the returned brightness
//! to the PWM compare register. A blink runs for a fixed number of on/off
//! cycles and then falls back to the steady level.

/// Brightness state machine for a single LED channel
#[derive(Debug)]
pub struct StatusLed {
    level: u8,
    blink: Option<Blink>,
}

#[derive(Debug)]
struct Blink {
    /// Instant the current phase started
    phase_start_ms: u32,
    /// Length of each on or off phase
    delay_ms: u16,
    /// On/off phases left, counting the current one
    phases_left: u16,
    on: bool,
}

const BLINK_BRIGHTNESS: u8 = 255;

impl StatusLed {
    pub const fn new() -> Self {
        Self {
            level: 0,
            blink: None,
        }
    }

    /// Set the steady brightness. Cancels any running blink.
    pub fn set_level(&mut self, level: u8) {
        self.level = level;
        self.blink = None;
    }

    /// Start blinking: `times` on/off cycles of `delay_ms` each phase
    pub fn start_blink(&mut self, now_ms: u32, times: u8, delay_ms: u16) {
        if times == 0 {
            return;
        }
        self.blink = Some(Blink {
            phase_start_ms: now_ms,
            delay_ms,
            phases_left: times as u16 * 2,
            on: true,
        });
    }

    /// Advance the blink state and return the brightness to apply
    pub fn update(&mut self, now_ms: u32) -> u8 {
        let Some(blink) = self.blink.as_mut() else {
            return self.level;
        };

        while now_ms.wrapping_sub(blink.phase_start_ms) >= blink.delay_ms as u32 {
            blink.phase_start_ms = blink.phase_start_ms.wrapping_add(blink.delay_ms as u32);
            blink.phases_left -= 1;
            if blink.phases_left == 0 {
                self.blink = None;
                return self.level;
            }
            blink.on = !blink.on;
        }

        if blink.on {
            BLINK_BRIGHTNESS
        } else {
            0
        }
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.is_some()
    }
}

impl Default for StatusLed {
    fn default() -> Self {
        Self::new()
    }
}
