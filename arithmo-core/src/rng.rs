//! Small pseudo-random source for question generation
//!
//! A xorshift32 generator, seeded once at startup from the monotonic
//! microsecond counter. Good enough for non-repeating quiz sequences
//! across power-on resets; no entropy requirements exist here.

/// Xorshift32 pseudo-random generator
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator from a seed
    ///
    /// A zero seed would lock the generator at zero, so the low bit is
    /// forced on.
    pub const fn seed_from(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    /// Next raw 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish draw in `[0, max]` inclusive
    ///
    /// Modulo reduction; the slight bias is irrelevant at these ranges.
    pub fn next_below_inclusive(&mut self, max: u16) -> u16 {
        (self.next_u32() % (max as u32 + 1)) as u16
    }
}
