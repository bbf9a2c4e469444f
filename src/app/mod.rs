//! Application-level modules for the askdesk GUI.
//!
//! This module contains centralized state management and the coordinators
//! for theme persistence and question-input behavior.

mod app_state;
mod question_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use question_coordinator::QuestionCoordinator;
pub use theme_coordinator::ThemeCoordinator;
