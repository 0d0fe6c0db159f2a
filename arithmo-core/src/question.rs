//! Addition questions
//!
//! A question is two random operands, their sum, and the deterministic
//! display text built from them.

use core::fmt::Write;

use heapless::String;

use crate::rng::Xorshift32;

/// Maximum display text length ("999 + 999 = ?" is 13 chars)
pub const QUESTION_TEXT_LEN: usize = 16;

/// One addition problem
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Question {
    /// First operand
    pub a: u16,
    /// Second operand
    pub b: u16,
    /// Canonical answer (`a + b`)
    pub answer: u16,
    /// Display rendering, "a + b = ?"
    pub text: String<QUESTION_TEXT_LEN>,
}

impl Question {
    /// Generate a new question with operands drawn uniformly in `[0, max]`
    pub fn generate(rng: &mut Xorshift32, max: u16) -> Self {
        let a = rng.next_below_inclusive(max);
        let b = rng.next_below_inclusive(max);
        Self::from_operands(a, b)
    }

    /// Build a question from fixed operands
    pub fn from_operands(a: u16, b: u16) -> Self {
        let mut text = String::new();
        // Never truncates: worst case is 13 chars for three-digit operands
        let _ = write!(text, "{} + {} = ?", a, b);
        Self {
            a,
            b,
            answer: a + b,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_answer_is_sum() {
        let q = Question::from_operands(7, 5);
        assert_eq!(q.answer, 12);
        assert_eq!(q.text.as_str(), "7 + 5 = ?");
    }

    #[test]
    fn test_generated_operands_in_range() {
        let mut rng = Xorshift32::seed_from(99);
        for _ in 0..500 {
            let q = Question::generate(&mut rng, 999);
            assert!(q.a <= 999);
            assert!(q.b <= 999);
            assert_eq!(q.answer, q.a + q.b);
        }
    }

    #[test]
    fn test_text_fits_three_digit_operands() {
        let q = Question::from_operands(999, 999);
        assert_eq!(q.text.as_str(), "999 + 999 = ?");
    }

    proptest! {
        #[test]
        fn prop_answer_matches_operands(a in 0u16..=999, b in 0u16..=999) {
            let q = Question::from_operands(a, b);
            prop_assert_eq!(q.answer, a + b);
        }
    }
}
