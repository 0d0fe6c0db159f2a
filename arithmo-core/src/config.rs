//! Quiz profile definitions
//!
//! A profile fixes the numeric range, input timing, and presentation
//! geometry for one deployment. Two profiles exist, matching the two
//! hardware example variants this game shipped on: a single-digit
//! trainer and an extended three-digit build with animated text.

/// Compile-time configuration for one quiz deployment
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuizProfile {
    /// Inclusive upper bound for both operands
    pub operand_max: u16,
    /// Minimum gap between accepted logical presses (ms)
    pub settle_ms: u32,
    /// How long the result screen stays up (ms)
    pub result_display_ms: u32,
    /// Main loop period (ms)
    pub tick_ms: u32,
    /// Question text y offset when a new question appears
    pub question_entry_y: f32,
    /// Resting y offset while the answer buffer is empty
    pub question_rest_y: f32,
    /// Resting y offset once digits have been entered
    pub question_typing_y: f32,
    /// Maximum easing movement per tick (pixels)
    pub approach_step: f32,
}

impl QuizProfile {
    /// Single-digit trainer: operands 0-9, generous settle window
    pub const SIMPLE: Self = Self {
        operand_max: 9,
        settle_ms: 30,
        result_display_ms: 2000,
        tick_ms: 10,
        question_entry_y: 24.0,
        question_rest_y: 24.0,
        question_typing_y: 24.0,
        approach_step: 2.0,
    };

    /// Extended build: operands 0-999, tight settle window, the question
    /// text slides between resting positions as digits are entered
    pub const EXTENDED: Self = Self {
        operand_max: 999,
        settle_ms: 6,
        result_display_ms: 2000,
        tick_ms: 10,
        question_entry_y: 56.0,
        question_rest_y: 28.0,
        question_typing_y: 16.0,
        approach_step: 2.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_share_result_window() {
        assert_eq!(QuizProfile::SIMPLE.result_display_ms, 2000);
        assert_eq!(QuizProfile::EXTENDED.result_display_ms, 2000);
    }

    #[test]
    fn test_extended_animates() {
        let p = QuizProfile::EXTENDED;
        assert!(p.question_entry_y > p.question_rest_y);
        assert!(p.question_rest_y > p.question_typing_y);
        assert!(p.approach_step > 0.0);
    }
}
