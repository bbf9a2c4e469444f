use anyhow::Result;
use askdesk::{builtin_suggestions, parse_suggestions, ThemePreference, MAX_VISIBLE_SUGGESTIONS};

#[test]
fn test_preference_lifecycle() -> Result<()> {
    // Nothing stored yet: the default preference is light
    let initial = ThemePreference::default();
    assert_eq!(initial, ThemePreference::Light);
    assert_eq!(initial.as_str(), "light");

    // Toggling flips to dark, and the persisted form follows
    let toggled = initial.toggled();
    assert_eq!(toggled, ThemePreference::Dark);
    assert_eq!(toggled.as_str(), "dark");

    // A later session restores the same preference from the stored string
    let restored = ThemePreference::from_str_or_default(toggled.as_str());
    assert_eq!(restored, ThemePreference::Dark);

    // Toggling twice returns to the original preference
    assert_eq!(restored.toggled().toggled(), restored);

    Ok(())
}

#[test]
fn test_stored_values_parse_fail_safe() -> Result<()> {
    // Recognized values parse exactly
    assert_eq!(
        ThemePreference::from_str_or_default("dark"),
        ThemePreference::Dark
    );
    assert_eq!(
        ThemePreference::from_str_or_default("light"),
        ThemePreference::Light
    );

    // Anything else (corrupt store, old format) falls back to light
    for junk in ["", "DARK", "dark ", "auto", "{\"theme\":\"dark\"}"] {
        assert_eq!(
            ThemePreference::from_str_or_default(junk),
            ThemePreference::Light
        );
    }

    Ok(())
}

#[test]
fn test_builtin_suggestion_catalog() -> Result<()> {
    let suggestions = builtin_suggestions();

    // The embedded catalog parsed and respects the display cap
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= MAX_VISIBLE_SUGGESTIONS);

    // Every entry carries a usable preset question
    for suggestion in suggestions {
        assert!(!suggestion.question.trim().is_empty());
    }

    // The catalog carries the account help preset
    assert!(suggestions
        .iter()
        .any(|s| s.question == "How do I reset my password?"));

    Ok(())
}

#[test]
fn test_custom_catalog_parsing() -> Result<()> {
    let suggestions = parse_suggestions(
        r#"[
            { "question": "What are the elements of the communication process?" },
            { "question": "How do I write a formal email?" }
        ]"#,
    )?;

    assert_eq!(suggestions.len(), 2);
    assert_eq!(
        suggestions[0].question,
        "What are the elements of the communication process?"
    );

    // Malformed catalogs are an error for the caller to downgrade
    assert!(parse_suggestions("not a catalog").is_err());

    Ok(())
}
