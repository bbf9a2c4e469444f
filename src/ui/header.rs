//! Header panel UI rendering
//!
//! Handles the top bar with the application title and the theme toggle.

use crate::app::AppState;
use askdesk::ThemePreference;
use eframe::egui;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked the theme toggle button
    ThemeToggleRequested,
}

/// Renders the application header with the theme toggle control.
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Askdesk");
        ui.label("study assistant");

        // Push the theme toggle to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, label) = match state.theme.preference() {
                ThemePreference::Light => ("🌙", "Switch to dark mode"),
                ThemePreference::Dark => ("☀", "Switch to light mode"),
            };

            if ui.button(icon).on_hover_text(label).clicked() {
                interaction = Some(HeaderInteraction::ThemeToggleRequested);
            }
        });
    });

    interaction
}
