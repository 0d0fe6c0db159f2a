//! Player answer buffer
//!
//! A bounded sequence of decimal digits: nine digits of capacity,
//! permissive conversion where the empty buffer reads as zero.

use heapless::String;

/// Maximum number of digits the player can enter
pub const ANSWER_CAPACITY: usize = 9;

/// Accumulates the digits the player has typed for the current question
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnswerBuffer {
    digits: String<ANSWER_CAPACITY>,
}

impl AnswerBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            digits: String::new(),
        }
    }

    /// Append a digit character
    ///
    /// Returns `true` if the character was accepted. Non-digits and
    /// pushes past capacity are silently ignored, not errors.
    pub fn push(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() {
            return false;
        }
        self.digits.push(ch).is_ok()
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// The typed digits as text
    pub fn as_str(&self) -> &str {
        self.digits.as_str()
    }

    /// Whether no digits have been entered yet
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of digits entered
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Parse the buffer as a base-10 integer; empty parses to 0
    ///
    /// Every element is a digit by construction, so nine digits bound
    /// the value at 999 999 999 and the accumulation cannot overflow.
    pub fn value(&self) -> u32 {
        self.digits
            .bytes()
            .fold(0u32, |acc, d| acc * 10 + (d - b'0') as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_parses_to_zero() {
        assert_eq!(AnswerBuffer::new().value(), 0);
    }

    #[test]
    fn test_leading_zeros() {
        let mut buf = AnswerBuffer::new();
        for ch in "042".chars() {
            assert!(buf.push(ch));
        }
        assert_eq!(buf.value(), 42);
    }

    #[test]
    fn test_non_digit_rejected() {
        let mut buf = AnswerBuffer::new();
        assert!(!buf.push('A'));
        assert!(!buf.push('*'));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_capacity_bound() {
        let mut buf = AnswerBuffer::new();
        for _ in 0..ANSWER_CAPACITY {
            assert!(buf.push('9'));
        }
        // Tenth digit must be a silent no-op
        assert!(!buf.push('1'));
        assert_eq!(buf.len(), ANSWER_CAPACITY);
        assert_eq!(buf.value(), 999_999_999);
    }

    #[test]
    fn test_clear() {
        let mut buf = AnswerBuffer::new();
        buf.push('3');
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.value(), 0);
    }

    proptest! {
        #[test]
        fn prop_len_never_exceeds_capacity(input in proptest::collection::vec(any::<char>(), 0..32)) {
            let mut buf = AnswerBuffer::new();
            for ch in input {
                buf.push(ch);
            }
            prop_assert!(buf.len() <= ANSWER_CAPACITY);
            prop_assert!(buf.as_str().bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
