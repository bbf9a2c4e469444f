//! Built-in question suggestions.
//!
//! The suggestion catalog ships as an embedded JSON asset and is parsed once
//! on first access. Suggestions are cosmetic: a malformed asset degrades to
//! an empty list rather than an error, and the displayed set is capped so a
//! large catalog never floods the panel.

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Embedded suggestion catalog, edited as data rather than code.
const BUILTIN_SUGGESTIONS_JSON: &str = include_str!("../assets/suggestions.json");

/// Maximum number of suggestions offered in the panel.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// A preset question the user can pick instead of typing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    /// The question text copied into the input on activation.
    pub question: String,
}

static BUILTIN: Lazy<Vec<Suggestion>> =
    Lazy::new(|| parse_suggestions(BUILTIN_SUGGESTIONS_JSON).unwrap_or_default());

/// Parses a suggestion catalog from JSON, capped at
/// [`MAX_VISIBLE_SUGGESTIONS`] entries.
pub fn parse_suggestions(json: &str) -> Result<Vec<Suggestion>> {
    let mut suggestions: Vec<Suggestion> = serde_json::from_str(json)?;
    suggestions.truncate(MAX_VISIBLE_SUGGESTIONS);
    Ok(suggestions)
}

/// Returns the built-in suggestion catalog.
///
/// Empty if the embedded asset failed to parse.
pub fn builtin_suggestions() -> &'static [Suggestion] {
    &BUILTIN
}
