//! Askdesk GUI Application
//!
//! Desktop front panel for the askdesk study assistant, built with egui:
//! - Light/dark theme toggle with a persistent preference
//! - Question input with click-to-fill suggestion buttons
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Focused state components (theme, question input)
//! - `ui/` - UI panel rendering and interaction reporting

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod state;
mod ui;

use app::{AppState, QuestionCoordinator, ThemeCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the askdesk GUI.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_title("Askdesk"),
        ..Default::default()
    };

    eframe::run_native(
        "Askdesk",
        options,
        Box::new(|cc| Ok(Box::new(AskdeskApp::new(cc)))),
    )
}

/// The main askdesk application.
///
/// The shell stays thin, delegating to coordinators:
/// - `ThemeCoordinator` handles theme persistence and application
/// - `QuestionCoordinator` handles suggestion fills
/// - `PanelManager` handles UI panel layout and rendering
struct AskdeskApp {
    /// Centralized application state
    state: AppState,
}

impl Default for AskdeskApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl AskdeskApp {
    /// Creates a new application instance with the theme preference loaded
    /// from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let preference = ThemeCoordinator::load_preference(cc.storage);

        Self {
            state: AppState::with_theme(preference),
        }
    }

    /// Applies a panel interaction to application state.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ThemeToggleRequested => {
                ThemeCoordinator::toggle(&mut self.state);
            }
            PanelInteraction::SuggestionActivated(question) => {
                QuestionCoordinator::fill_from_suggestion(&mut self.state, &question);
            }
        }
    }
}

impl eframe::App for AskdeskApp {
    /// Called when the app is being shut down - ensures the preference is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_preference(storage, self.state.theme.preference());
    }

    /// Main update loop: apply the theme, persist the preference, render
    /// panels, and dispatch interactions.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist the preference during the frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            ThemeCoordinator::save_preference(storage, self.state.theme.preference());
        }

        // Render all panels and apply the interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
