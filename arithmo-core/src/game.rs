//! Game context coordinating the quiz cycle
//!
//! The context is the single owner of all game state: the machine
//! state, current question, answer buffer, PRNG, debouncer, and the
//! animated question position. One `step` call corresponds to one main
//! loop iteration; it decides state changes and returns the feedback
//! side effects to request, leaving rendering to the caller.

use heapless::Vec;

use crate::anim::approach;
use crate::answer::AnswerBuffer;
use crate::config::QuizProfile;
use crate::feedback::{Action, LedChannel, LedCommand, Melody, ToneCommand, CLEAR_BEEP, DIGIT_BEEP};
use crate::input::{key_at, Debouncer, KeyEvent};
use crate::question::Question;
use crate::rng::Xorshift32;
use crate::state::{Event, GameState};

/// Brightness for the success glow on the green channel
const SUCCESS_GLOW: u8 = 180;

/// Feedback requested by a single step
pub type Actions = Vec<Action, 4>;

/// Result of checking a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outcome {
    /// Whether the player's answer matched exactly
    pub correct: bool,
    /// The canonical answer
    pub expected: u16,
    /// What the player entered (empty buffer parses to 0)
    pub given: u32,
}

/// All state for one running quiz
pub struct GameContext {
    profile: QuizProfile,
    state: GameState,
    question: Question,
    answer: AnswerBuffer,
    rng: Xorshift32,
    debounce: Debouncer,
    anim_y: f32,
    outcome: Option<Outcome>,
    result_deadline_ms: u32,
}

impl GameContext {
    /// Create a context; the first step generates the first question
    pub fn new(profile: QuizProfile, seed: u32) -> Self {
        Self {
            profile,
            state: GameState::GenerateNewQuestion,
            question: Question::from_operands(0, 0),
            answer: AnswerBuffer::new(),
            rng: Xorshift32::seed_from(seed),
            debounce: Debouncer::new(profile.settle_ms),
            anim_y: profile.question_entry_y,
            outcome: None,
            result_deadline_ms: 0,
        }
    }

    /// Current machine state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The question on screen
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// The digits typed so far
    pub fn answer(&self) -> &AnswerBuffer {
        &self.answer
    }

    /// Vertical offset of the question text
    pub fn anim_y(&self) -> f32 {
        self.anim_y
    }

    /// Result of the last submission, present while it is displayed
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Active profile
    pub fn profile(&self) -> &QuizProfile {
        &self.profile
    }

    /// Advance the game by one loop iteration
    ///
    /// `raw` carries the keypad scan result when a key was down; ticks
    /// with no key pass `None`. Returns the feedback to dispatch.
    pub fn step(&mut self, now_ms: u32, raw: Option<KeyEvent>) -> Actions {
        let mut actions = Actions::new();

        match self.state {
            GameState::GenerateNewQuestion => {
                self.begin_round(&mut actions);
            }
            GameState::WaitingForInput => {
                if let Some(event) = raw.and_then(|ev| self.debounce.filter(now_ms, ev)) {
                    if let Some(key) = key_at(event.row, event.col) {
                        self.handle_key(key, now_ms, &mut actions);
                    }
                }
                if raw.is_none() {
                    // Animation advances on ticks only, once per loop period
                    let target = if self.answer.is_empty() {
                        self.profile.question_rest_y
                    } else {
                        self.profile.question_typing_y
                    };
                    self.anim_y = approach(self.anim_y, target, self.profile.approach_step);
                }
            }
            GameState::CheckAnswer => {
                // Presses during the result window are dropped, not queued
                if now_ms.wrapping_sub(self.result_deadline_ms) as i32 >= 0 {
                    self.state = self.state.transition(Event::ResultTimeout);
                    self.begin_round(&mut actions);
                }
            }
        }

        actions
    }

    /// Start a round: fresh question, cleared buffer, reset animation
    fn begin_round(&mut self, actions: &mut Actions) {
        if let Some(outcome) = self.outcome.take() {
            if outcome.correct {
                let _ = actions.push(Action::Led(LedCommand::Level {
                    channel: LedChannel::Green,
                    value: 0,
                }));
            }
        }
        self.question = Question::generate(&mut self.rng, self.profile.operand_max);
        self.answer.clear();
        self.anim_y = self.profile.question_entry_y;
        self.state = self.state.transition(Event::QuestionReady);
    }

    fn handle_key(&mut self, key: char, now_ms: u32, actions: &mut Actions) {
        match key {
            '0'..='9' => {
                // A full buffer swallows the digit with no feedback
                if self.answer.push(key) {
                    let _ = actions.push(Action::Tone(DIGIT_BEEP));
                }
            }
            '*' => {
                self.answer.clear();
                let _ = actions.push(Action::Tone(CLEAR_BEEP));
            }
            'A' => self.submit_answer(now_ms, actions),
            _ => {}
        }
    }

    fn submit_answer(&mut self, now_ms: u32, actions: &mut Actions) {
        let given = self.answer.value();
        let correct = given == self.question.answer as u32;
        self.outcome = Some(Outcome {
            correct,
            expected: self.question.answer,
            given,
        });
        self.result_deadline_ms = now_ms.wrapping_add(self.profile.result_display_ms);
        self.state = self.state.transition(Event::AnswerSubmitted);

        if correct {
            let _ = actions.push(Action::Tone(ToneCommand::Melody(Melody::Success)));
            let _ = actions.push(Action::Led(LedCommand::Level {
                channel: LedChannel::Green,
                value: SUCCESS_GLOW,
            }));
        } else {
            let _ = actions.push(Action::Tone(ToneCommand::Melody(Melody::Failure)));
            let _ = actions.push(Action::Led(LedCommand::Blink {
                channel: LedChannel::Red,
                times: 3,
                delay_ms: 150,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KEY_MAP;

    /// Matrix position of a key cap symbol
    fn press(ch: char) -> KeyEvent {
        for (r, row) in KEY_MAP.iter().enumerate() {
            for (c, &key) in row.iter().enumerate() {
                if key == ch {
                    return KeyEvent::pressed_at(r as u8, c as u8);
                }
            }
        }
        panic!("key {ch} not on the keypad");
    }

    /// Drive a context through key presses spaced a scan period apart
    fn type_keys(ctx: &mut GameContext, now_ms: &mut u32, keys: &str) -> Actions {
        let mut all = Actions::new();
        for ch in keys.chars() {
            *now_ms += 40; // past both profiles' settle windows
            for action in ctx.step(*now_ms, Some(press(ch))) {
                let _ = all.push(action);
            }
        }
        all
    }

    fn new_game() -> (GameContext, u32) {
        let mut ctx = GameContext::new(QuizProfile::EXTENDED, 7);
        let actions = ctx.step(0, None);
        assert!(actions.is_empty());
        (ctx, 0)
    }

    #[test]
    fn test_first_step_generates_question() {
        let (ctx, _) = new_game();
        assert_eq!(ctx.state(), GameState::WaitingForInput);
        assert!(ctx.answer().is_empty());
        assert_eq!(ctx.question().answer, ctx.question().a + ctx.question().b);
        assert!(ctx.question().a <= 999 && ctx.question().b <= 999);
    }

    #[test]
    fn test_digits_accumulate_with_beep() {
        let (mut ctx, mut now) = new_game();
        let actions = type_keys(&mut ctx, &mut now, "75");
        assert_eq!(ctx.answer().as_str(), "75");
        assert_eq!(actions.len(), 2);
        assert!(actions.iter().all(|a| *a == Action::Tone(DIGIT_BEEP)));
    }

    #[test]
    fn test_correct_answer_flow() {
        let (mut ctx, mut now) = new_game();
        let expected = ctx.question().answer;

        let mut digits = heapless::String::<8>::new();
        {
            use core::fmt::Write;
            let _ = write!(digits, "{}", expected);
        }
        type_keys(&mut ctx, &mut now, &digits);

        let actions = type_keys(&mut ctx, &mut now, "A");
        assert_eq!(ctx.state(), GameState::CheckAnswer);
        let outcome = ctx.outcome().unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.given, expected as u32);
        assert!(actions.contains(&Action::Tone(ToneCommand::Melody(Melody::Success))));
        assert!(actions.iter().any(|a| matches!(
            a,
            Action::Led(LedCommand::Level {
                channel: LedChannel::Green,
                ..
            })
        )));

        // Result window holds, then a fresh round starts
        assert!(ctx.step(now + 1999, None).is_empty());
        assert_eq!(ctx.state(), GameState::CheckAnswer);

        let actions = ctx.step(now + 2000, None);
        assert_eq!(ctx.state(), GameState::WaitingForInput);
        assert!(ctx.answer().is_empty());
        assert!(ctx.outcome().is_none());
        // Success glow switched back off
        assert!(actions.contains(&Action::Led(LedCommand::Level {
            channel: LedChannel::Green,
            value: 0,
        })));
    }

    #[test]
    fn test_wrong_answer_flow() {
        let (mut ctx, mut now) = new_game();
        let wrong = ctx.question().answer + 1;

        let mut digits = heapless::String::<8>::new();
        {
            use core::fmt::Write;
            let _ = write!(digits, "{}", wrong);
        }
        type_keys(&mut ctx, &mut now, &digits);
        let actions = type_keys(&mut ctx, &mut now, "A");

        let outcome = ctx.outcome().unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.expected, ctx.question().answer);
        assert!(actions.contains(&Action::Tone(ToneCommand::Melody(Melody::Failure))));
        assert!(actions.contains(&Action::Led(LedCommand::Blink {
            channel: LedChannel::Red,
            times: 3,
            delay_ms: 150,
        })));
    }

    #[test]
    fn test_empty_submission_reads_zero() {
        let (mut ctx, mut now) = new_game();
        type_keys(&mut ctx, &mut now, "A");
        let outcome = ctx.outcome().unwrap();
        assert_eq!(outcome.given, 0);
        assert_eq!(outcome.correct, ctx.question().answer == 0);
    }

    #[test]
    fn test_clear_key() {
        let (mut ctx, mut now) = new_game();
        type_keys(&mut ctx, &mut now, "3");
        assert_eq!(ctx.answer().as_str(), "3");

        let actions = type_keys(&mut ctx, &mut now, "*");
        assert!(ctx.answer().is_empty());
        assert_eq!(ctx.state(), GameState::WaitingForInput);
        assert!(actions.contains(&Action::Tone(CLEAR_BEEP)));
    }

    #[test]
    fn test_overflow_digit_has_no_feedback() {
        let (mut ctx, mut now) = new_game();
        type_keys(&mut ctx, &mut now, "999999999");
        assert_eq!(ctx.answer().len(), 9);

        let actions = type_keys(&mut ctx, &mut now, "1");
        assert_eq!(ctx.answer().as_str(), "999999999");
        assert!(actions.is_empty());
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let (mut ctx, mut now) = new_game();
        let actions = type_keys(&mut ctx, &mut now, "B#D");
        assert!(actions.is_empty());
        assert!(ctx.answer().is_empty());
        assert_eq!(ctx.state(), GameState::WaitingForInput);
    }

    #[test]
    fn test_presses_dropped_during_result_window() {
        let (mut ctx, mut now) = new_game();
        type_keys(&mut ctx, &mut now, "A");
        assert_eq!(ctx.state(), GameState::CheckAnswer);

        let actions = ctx.step(now + 500, Some(press('5')));
        assert!(actions.is_empty());
        assert_eq!(ctx.state(), GameState::CheckAnswer);

        ctx.step(now + 2000, None);
        assert_eq!(ctx.state(), GameState::WaitingForInput);
        assert!(ctx.answer().is_empty());
    }

    #[test]
    fn test_held_key_rate_limited_by_settle_window() {
        let mut ctx = GameContext::new(QuizProfile::SIMPLE, 3);
        let mut now = 0;
        ctx.step(now, None);

        // Held key scanned every 10 ms; the 30 ms settle window lets
        // only every third-or-so scan through
        let mut accepted = 0;
        for _ in 0..9 {
            now += 10;
            if !ctx.step(now, Some(press('5'))).is_empty() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 3);
        assert_eq!(ctx.answer().as_str(), "555");
    }

    #[test]
    fn test_animation_slides_between_rest_positions() {
        let (mut ctx, mut now) = new_game();
        let profile = *ctx.profile();
        assert_eq!(ctx.anim_y(), profile.question_entry_y);

        // Empty buffer: converge on the rest position
        for _ in 0..100 {
            now += 10;
            ctx.step(now, None);
        }
        assert_eq!(ctx.anim_y(), profile.question_rest_y);

        // Typing moves the text to the typing position
        type_keys(&mut ctx, &mut now, "1");
        for _ in 0..100 {
            now += 10;
            ctx.step(now, None);
        }
        assert_eq!(ctx.anim_y(), profile.question_typing_y);

        // Next round resets to the entry position
        type_keys(&mut ctx, &mut now, "A");
        ctx.step(now + 2000, None);
        assert_eq!(ctx.anim_y(), profile.question_entry_y);
    }
}
