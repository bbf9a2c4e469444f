//! Theme management and persistence coordination.
//!
//! Handles theme loading, toggling, application, and persistent storage
//! across sessions. Persistence is fire-and-forget: a missing or unreadable
//! store means the default preference for this session, and write failures
//! never surface — the in-memory theme stays correct either way.

use crate::app::AppState;
use askdesk::ThemePreference;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference from persistent storage during application
    /// startup.
    ///
    /// Returns the stored preference if present and recognized, otherwise
    /// the default (light). Storage being unavailable is not an error; the
    /// preference simply will not persist this session.
    pub fn load_preference(storage: Option<&dyn eframe::Storage>) -> ThemePreference {
        storage
            .and_then(|storage| storage.get_string(THEME_KEY))
            .map(|value| ThemePreference::from_str_or_default(&value))
            .unwrap_or_default()
    }

    /// Saves the current theme preference to persistent storage.
    ///
    /// Called during application shutdown and after the preference changes.
    pub fn save_preference(storage: &mut dyn eframe::Storage, preference: ThemePreference) {
        storage.set_string(THEME_KEY, preference.as_str().to_string());
        storage.flush();
    }

    /// Flips the current preference to its opposite value.
    ///
    /// The new theme becomes visible on the next frame via
    /// [`apply_current_theme`]; the next storage flush persists it.
    ///
    /// [`apply_current_theme`]: ThemeCoordinator::apply_current_theme
    pub fn toggle(state: &mut AppState) {
        state.theme.toggle();
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so the window always reflects the preference.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        ctx.set_visuals(state.theme.preference().visuals());
    }
}
