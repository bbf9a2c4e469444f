//! Centralized application state for the askdesk GUI.
//!
//! This module composes focused state components that each manage one aspect
//! of the application's state, keeping invariants local and giving the UI
//! borrow-checker friendly access to independent aspects.

use crate::state::{QuestionState, ThemeState};
use askdesk::{builtin_suggestions, Suggestion, ThemePreference};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Theme preference state
    pub theme: ThemeState,

    /// Question input state
    pub question: QuestionState,

    /// Preset suggestions offered below the input
    pub suggestions: Vec<Suggestion>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values and the built-in
    /// suggestion catalog.
    pub fn new() -> Self {
        Self {
            theme: ThemeState::new(),
            question: QuestionState::new(),
            suggestions: builtin_suggestions().to_vec(),
        }
    }

    /// Creates a new AppState with a specific theme preference loaded from
    /// storage.
    pub fn with_theme(preference: ThemePreference) -> Self {
        Self {
            theme: ThemeState::with_preference(preference),
            question: QuestionState::new(),
            suggestions: builtin_suggestions().to_vec(),
        }
    }
}
