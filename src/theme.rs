//! Theme support module for the askdesk GUI
//!
//! This module provides the two-value light/dark theme preference and the
//! egui visuals for each. The preference is persisted as a bare string
//! (`"light"` or `"dark"`); anything else falls back to the default.
//!
//! # Examples
//!
//! ```
//! use askdesk::theme::ThemePreference;
//!
//! let pref = ThemePreference::from_str_or_default("dark");
//! assert_eq!(pref, ThemePreference::Dark);
//! assert_eq!(pref.toggled(), ThemePreference::Light);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};

/// The user's display theme preference.
///
/// Exactly two values exist; the only transition between them is [`toggled`].
/// The default is `Light`, used whenever no persisted value is available or
/// the persisted value is unrecognized.
///
/// [`toggled`]: ThemePreference::toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Returns the persisted string form of this preference.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parses a persisted string, falling back to the default for anything
    /// unrecognized. Never an error: an unreadable preference just means the
    /// default theme for this session.
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::default(),
        }
    }

    /// Returns the opposite preference.
    ///
    /// Toggling is an involution: `pref.toggled().toggled() == pref`.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Builds the egui visuals for this preference.
    ///
    /// Starts from the matching egui defaults and overrides the handful of
    /// colors the askdesk panels rely on.
    pub fn visuals(self) -> egui::Visuals {
        match self {
            ThemePreference::Light => light_visuals(),
            ThemePreference::Dark => dark_visuals(),
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creates the light visuals.
fn light_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();

    // Background colors
    visuals.panel_fill = Color32::from_rgb(248, 248, 248);
    visuals.extreme_bg_color = Color32::from_rgb(255, 255, 255);
    visuals.faint_bg_color = Color32::from_rgb(220, 220, 220);

    // Selection and hyperlink accents
    visuals.selection.bg_fill = Color32::from_rgb(180, 200, 255);
    visuals.selection.stroke.color = Color32::from_rgb(40, 100, 200);
    visuals.hyperlink_color = Color32::from_rgb(0, 160, 180);

    visuals
}

/// Creates the dark visuals.
fn dark_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();

    // Background colors
    visuals.panel_fill = Color32::from_rgb(39, 39, 39);
    visuals.extreme_bg_color = Color32::from_rgb(16, 16, 16);
    visuals.faint_bg_color = Color32::from_rgb(70, 70, 70);

    // Selection and hyperlink accents
    visuals.selection.bg_fill = Color32::from_rgb(50, 80, 120);
    visuals.selection.stroke.color = Color32::from_rgb(52, 152, 219);
    visuals.hyperlink_color = Color32::from_rgb(26, 188, 156);

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_form_round_trips() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::from_str_or_default(pref.as_str()), pref);
        }
    }

    #[test]
    fn test_unrecognized_value_falls_back_to_light() {
        assert_eq!(
            ThemePreference::from_str_or_default(""),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::from_str_or_default("solarized"),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::from_str_or_default("Dark"),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(pref.toggled().toggled(), pref);
            assert_ne!(pref.toggled(), pref);
        }
    }

    #[test]
    fn test_visuals_match_preference_polarity() {
        assert!(!ThemePreference::Light.visuals().dark_mode);
        assert!(ThemePreference::Dark.visuals().dark_mode);
    }
}
