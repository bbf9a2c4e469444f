//! Question input behavior coordination.
//!
//! Applies suggestion activations to the question state: the preset string
//! replaces the input text and the input receives keyboard focus. There are
//! no failure states here; a suggestion without preset text fills the empty
//! string, and if no input is rendered this session the fill is a harmless
//! no-op.

use crate::app::AppState;

/// Coordinates question-input behaviors.
pub struct QuestionCoordinator;

impl QuestionCoordinator {
    /// Copies a suggestion's preset question into the input and requests
    /// keyboard focus so the user can edit or submit it immediately.
    pub fn fill_from_suggestion(state: &mut AppState, question: &str) {
        state.question.fill(question);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_empty_input() {
        let mut state = AppState::new();

        QuestionCoordinator::fill_from_suggestion(&mut state, "How do I reset my password?");

        assert_eq!(state.question.text(), "How do I reset my password?");
        assert!(state.question.take_focus_request());
    }

    #[test]
    fn test_fill_overwrites_existing_input() {
        let mut state = AppState::new();
        state.question.text_mut().push_str("draft text");

        QuestionCoordinator::fill_from_suggestion(&mut state, "What is feedback in communication?");

        assert_eq!(state.question.text(), "What is feedback in communication?");
    }

    #[test]
    fn test_fill_with_missing_preset_yields_empty_input() {
        let mut state = AppState::new();
        state.question.text_mut().push_str("draft text");

        // A suggestion with no preset text arrives as the empty string.
        QuestionCoordinator::fill_from_suggestion(&mut state, "");

        assert_eq!(state.question.text(), "");
        assert!(state.question.take_focus_request());
    }
}
