//! Theme state management.
//!
//! This module encapsulates all state related to visual theming: the
//! currently selected theme preference.

use askdesk::ThemePreference;

/// State related to the visual theme.
///
/// Responsibilities:
/// - Tracking the current theme preference
/// - Flipping the preference on toggle
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeState {
    /// Currently selected theme preference
    preference: ThemePreference,
}

impl ThemeState {
    /// Creates a new theme state with the default (light) preference.
    pub fn new() -> Self {
        Self {
            preference: ThemePreference::default(),
        }
    }

    /// Creates a new theme state with a specific preference, typically the
    /// one loaded from persistent storage.
    pub fn with_preference(preference: ThemePreference) -> Self {
        Self { preference }
    }

    // ===== Theme Queries =====

    /// Returns the current theme preference.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    // ===== Theme Mutations =====

    /// Sets the current theme preference.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
    }

    /// Flips the preference to its opposite value.
    pub fn toggle(&mut self) {
        self.preference = self.preference.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preference_is_light() {
        assert_eq!(ThemeState::new().preference(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_twice_returns_to_original() {
        for start in [ThemePreference::Light, ThemePreference::Dark] {
            let mut state = ThemeState::with_preference(start);
            state.toggle();
            assert_ne!(state.preference(), start);
            state.toggle();
            assert_eq!(state.preference(), start);
        }
    }
}
