//! Events that trigger state transitions

/// Events that can trigger state transitions
///
/// Key presses that do not change state (digits, clear, unmapped keys)
/// are handled inside `WaitingForInput` and never become events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A fresh question and cleared buffer are ready
    QuestionReady,
    /// The player pressed the confirm key ('A')
    AnswerSubmitted,
    /// The result display window elapsed
    ResultTimeout,
}

impl Event {
    /// Check if this event is player-initiated
    pub fn is_user_event(&self) -> bool {
        matches!(self, Event::AnswerSubmitted)
    }

    /// Check if this event comes from the loop's own timing
    pub fn is_timer_event(&self) -> bool {
        matches!(self, Event::QuestionReady | Event::ResultTimeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_classification() {
        assert!(Event::AnswerSubmitted.is_user_event());
        assert!(!Event::QuestionReady.is_user_event());
        assert!(Event::ResultTimeout.is_timer_event());
        assert!(!Event::AnswerSubmitted.is_timer_event());
    }
}
