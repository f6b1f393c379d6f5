use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating and matching the ISO 639-1
/// (2-letter) and ISO 639-3 (3-letter) language codes used as source/target
/// locale tags, and for resolving the English language names shown in the
/// machine-translation notice.
/// Parse a language code into an isolang Language
fn parse_language(code: &str) -> Option<Language> {
    let normalized = code.trim().to_lowercase();

    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }
}

/// Validate that a language code is a known ISO 639-1 or ISO 639-3 code
pub fn validate_language_code(code: &str) -> Result<()> {
    parse_language(code)
        .map(|_| ())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Get the English name of a language from its code
pub fn get_language_name(code: &str) -> Result<String> {
    parse_language(code)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Check whether two language codes refer to the same language,
/// regardless of whether they use the 2-letter or 3-letter form
pub fn language_codes_match(a: &str, b: &str) -> bool {
    match (parse_language(a), parse_language(b)) {
        (Some(lang_a), Some(lang_b)) => lang_a == lang_b,
        // Fall back to a plain case-insensitive comparison for codes
        // isolang doesn't know
        _ => a.trim().eq_ignore_ascii_case(b.trim()),
    }
}
