//! Question input state management.
//!
//! This module encapsulates the state of the question input: the text buffer
//! the widget edits and a one-shot focus request armed when a suggestion
//! fills the buffer.

/// State related to the question input.
///
/// Responsibilities:
/// - Owning the input text buffer
/// - Tracking a pending keyboard-focus request for the input widget
#[derive(Debug, Clone, Default)]
pub struct QuestionState {
    /// Current contents of the question input
    text: String,
    /// Whether the input should grab keyboard focus on the next frame
    focus_requested: bool,
}

impl QuestionState {
    /// Creates a new question state with an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Input Queries =====

    /// Returns the current input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    // ===== Input Mutations =====

    /// Returns a mutable reference to the input buffer (for the text widget).
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Replaces the input text with the given string (including the empty
    /// string) and arms a focus request so the user can edit or submit
    /// immediately.
    pub fn fill(&mut self, text: &str) {
        self.text = text.to_string();
        self.focus_requested = true;
    }

    /// Consumes the pending focus request, if any.
    ///
    /// Returns true at most once per [`fill`]; the UI calls this each frame
    /// and focuses the input when it fires.
    ///
    /// [`fill`]: QuestionState::fill
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_text_exactly() {
        let mut state = QuestionState::new();
        state.text_mut().push_str("half-typed quest");

        state.fill("How do I reset my password?");
        assert_eq!(state.text(), "How do I reset my password?");
    }

    #[test]
    fn test_fill_with_empty_string_clears_text() {
        let mut state = QuestionState::new();
        state.fill("something");
        state.fill("");
        assert_eq!(state.text(), "");
        assert!(state.take_focus_request());
    }

    #[test]
    fn test_focus_request_is_one_shot() {
        let mut state = QuestionState::new();
        assert!(!state.take_focus_request());

        state.fill("What are communication barriers?");
        assert!(state.take_focus_request());
        assert!(!state.take_focus_request());
    }
}
