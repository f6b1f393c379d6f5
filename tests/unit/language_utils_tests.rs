/*!
 * Tests for language utility functions
 */

use mdtrans::language_utils::{get_language_name, language_codes_match, validate_language_code};

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldAccept() {
    // ISO 639-1
    assert!(validate_language_code("en").is_ok());
    assert!(validate_language_code("it").is_ok());
    assert!(validate_language_code("fr").is_ok());

    // ISO 639-3
    assert!(validate_language_code("eng").is_ok());
    assert!(validate_language_code("ita").is_ok());

    // Whitespace and case are tolerated
    assert!(validate_language_code(" EN ").is_ok());
    assert!(validate_language_code("ITA").is_ok());
}

/// Test rejection of unknown or malformed codes
#[test]
fn test_validate_language_code_withInvalidCodes_shouldReject() {
    assert!(validate_language_code("xyzzy").is_err());
    assert!(validate_language_code("x").is_err());
    assert!(validate_language_code("").is_err());
    assert!(validate_language_code("123").is_err());
}

/// Test retrieval of English language names from codes
#[test]
fn test_get_language_name_withValidCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("it").unwrap(), "Italian");
    assert_eq!(get_language_name("eng").unwrap(), "English");
    assert_eq!(get_language_name("fr").unwrap(), "French");
}

/// Test that name lookup fails for unknown codes
#[test]
fn test_get_language_name_withInvalidCode_shouldReturnError() {
    assert!(get_language_name("zz").is_err());
    assert!(get_language_name("").is_err());
}

/// Test matching of two-letter and three-letter forms of the same language
#[test]
fn test_language_codes_match_withMatchingCodes_shouldReturnTrue() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("eng", "en"));
    assert!(language_codes_match("it", "ita"));
    assert!(language_codes_match("EN", "en"));
    assert!(language_codes_match(" en ", "eng"));
}

/// Test that different languages never match
#[test]
fn test_language_codes_match_withDifferentLanguages_shouldReturnFalse() {
    assert!(!language_codes_match("en", "it"));
    assert!(!language_codes_match("eng", "ita"));
    assert!(!language_codes_match("en", "fra"));
}
