//! State machine definition
//!
//! The quiz runs a fixed three-state cycle forever; there is no
//! terminal state. All rendering and feedback behavior is a function of
//! the current state and the data owned by the game context.

use super::events::Event;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Draw a new question, clear the answer buffer, reset animation
    GenerateNewQuestion,
    /// Accept digit/clear/confirm keys while rendering the question
    WaitingForInput,
    /// Result screen up; input is ignored until the window elapses
    CheckAnswer,
}

impl GameState {
    /// Check if key input is acted upon in this state
    pub fn accepts_input(&self) -> bool {
        matches!(self, GameState::WaitingForInput)
    }

    /// Check if the result screen is being shown
    pub fn showing_result(&self) -> bool {
        matches!(self, GameState::CheckAnswer)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic; unknown (state, event)
    /// pairs keep the current state.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use GameState::*;

        match (self, event) {
            (GenerateNewQuestion, QuestionReady) => WaitingForInput,
            (WaitingForInput, AnswerSubmitted) => CheckAnswer,
            (CheckAnswer, ResultTimeout) => GenerateNewQuestion,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let state = GameState::GenerateNewQuestion;
        let waiting = state.transition(Event::QuestionReady);
        assert_eq!(waiting, GameState::WaitingForInput);

        let checking = waiting.transition(Event::AnswerSubmitted);
        assert_eq!(checking, GameState::CheckAnswer);

        let next_round = checking.transition(Event::ResultTimeout);
        assert_eq!(next_round, GameState::GenerateNewQuestion);
    }

    #[test]
    fn test_unrelated_events_keep_state() {
        assert_eq!(
            GameState::WaitingForInput.transition(Event::QuestionReady),
            GameState::WaitingForInput
        );
        assert_eq!(
            GameState::CheckAnswer.transition(Event::AnswerSubmitted),
            GameState::CheckAnswer
        );
        assert_eq!(
            GameState::GenerateNewQuestion.transition(Event::ResultTimeout),
            GameState::GenerateNewQuestion
        );
    }

    #[test]
    fn test_input_gating() {
        assert!(GameState::WaitingForInput.accepts_input());
        assert!(!GameState::CheckAnswer.accepts_input());
        assert!(!GameState::GenerateNewQuestion.accepts_input());
        assert!(GameState::CheckAnswer.showing_result());
    }
}
