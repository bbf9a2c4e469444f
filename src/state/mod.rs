//! State management modules for the askdesk GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (current theme preference)
//! - Question state (input buffer, pending focus request)

mod question_state;
mod theme_state;

pub use question_state::QuestionState;
pub use theme_state::ThemeState;
