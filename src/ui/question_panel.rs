//! Question panel UI rendering
//!
//! Handles the central panel: the question input and the suggestion buttons
//! below it. Activating a suggestion is reported as an interaction carrying
//! the preset question text; the coordinator applies it to state.

use crate::app::AppState;
use eframe::egui;

/// Result of user interaction with the question panel
pub enum QuestionPanelInteraction {
    /// User activated a suggestion; payload is its preset question text
    SuggestionActivated(String),
}

/// Renders the question input and the suggestion list.
///
/// Consumes a pending focus request from the question state and moves
/// keyboard focus to the input when one is armed.
///
/// # Returns
/// * `Option<QuestionPanelInteraction>` - User interaction result
pub fn render_question_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
) -> Option<QuestionPanelInteraction> {
    let mut interaction = None;

    ui.label("Your question:");

    let focus_requested = state.question.take_focus_request();
    let output = egui::TextEdit::singleline(state.question.text_mut())
        .hint_text("Type a question about the course…")
        .desired_width(f32::INFINITY)
        .show(ui);

    if focus_requested {
        output.response.request_focus();
    }

    if !state.suggestions.is_empty() {
        ui.add_space(8.0);
        ui.separator();
        ui.label("Suggestions:");

        for suggestion in &state.suggestions {
            if ui.button(&suggestion.question).clicked() {
                interaction = Some(QuestionPanelInteraction::SuggestionActivated(
                    suggestion.question.clone(),
                ));
            }
        }
    }

    interaction
}
