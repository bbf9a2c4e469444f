//! Panel orchestration and layout
//!
//! Renders all panels each frame and maps their results into a single
//! interaction value for the application shell to dispatch.

use crate::app::AppState;
use crate::ui::header::{self, HeaderInteraction};
use crate::ui::question_panel::{self, QuestionPanelInteraction};
use eframe::egui;

/// Result of user interaction with any panel
pub enum PanelInteraction {
    /// User clicked the theme toggle button
    ThemeToggleRequested,
    /// User activated a suggestion with the given preset question
    SuggestionActivated(String),
}

/// Orchestrates panel rendering and layout.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels and returns the user interaction, if any.
    ///
    /// At most one interaction is reported per frame.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction = None;

        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            if let Some(HeaderInteraction::ThemeToggleRequested) = header::render_header(ui, state)
            {
                interaction = Some(PanelInteraction::ThemeToggleRequested);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(QuestionPanelInteraction::SuggestionActivated(question)) =
                question_panel::render_question_panel(ui, state)
            {
                interaction = Some(PanelInteraction::SuggestionActivated(question));
            }
        });

        interaction
    }
}
