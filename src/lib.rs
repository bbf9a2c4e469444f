pub mod suggestions;
pub mod theme;

// Export theme support
pub use theme::ThemePreference;

// Export suggestion catalog
pub use suggestions::{builtin_suggestions, parse_suggestions, Suggestion, MAX_VISIBLE_SUGGESTIONS};
