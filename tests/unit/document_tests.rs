/*!
 * Tests for front matter parsing and document rendering
 */

use anyhow::Result;
use mdtrans::document::{translation_notice, MarkdownDocument};
use mdtrans::errors::DocumentError;
use serde_yaml::Value;

/// Test that a document with front matter splits into header and body
#[test]
fn test_parse_withFrontMatter_shouldSplitHeaderAndBody() -> Result<()> {
    let text = "---\ntitle: Hello\ndraft: false\nyear: 2024\n---\n\nBody starts here.\n";

    let document = MarkdownDocument::parse(text)?;

    assert_eq!(document.header.len(), 3);
    assert_eq!(
        document.header.get(Value::String("title".to_string())),
        Some(&Value::String("Hello".to_string()))
    );
    assert_eq!(
        document.header.get(Value::String("draft".to_string())),
        Some(&Value::Bool(false))
    );
    assert_eq!(document.body, "Body starts here.");
    Ok(())
}

/// Test that a document without front matter is all body
#[test]
fn test_parse_withoutFrontMatter_shouldTreatWholeTextAsBody() -> Result<()> {
    let text = "Just a paragraph.\n\nAnother one.\n";

    let document = MarkdownDocument::parse(text)?;

    assert!(document.header.is_empty());
    assert!(document.body.starts_with("Just a paragraph."));
    Ok(())
}

/// Test that an opened but unclosed front matter block is an error
#[test]
fn test_parse_withUnterminatedFrontMatter_shouldReturnError() {
    let text = "---\ntitle: Broken\n\nNo closing fence here.\n";

    let result = MarkdownDocument::parse(text);

    assert!(matches!(
        result,
        Err(DocumentError::UnterminatedFrontMatter)
    ));
}

/// Test that malformed YAML in the header is reported, not swallowed
#[test]
fn test_parse_withInvalidYaml_shouldReturnError() {
    let text = "---\ntitle: [unclosed\n---\n\nBody.\n";

    let result = MarkdownDocument::parse(text);

    assert!(matches!(result, Err(DocumentError::InvalidFrontMatter(_))));
}

/// Test that a horizontal rule later in a headerless document is left alone
#[test]
fn test_parse_withRuleInBody_shouldNotTreatItAsDelimiter() -> Result<()> {
    let text = "Intro paragraph.\n\n---\n\nAfter the rule.\n";

    let document = MarkdownDocument::parse(text)?;

    assert!(document.header.is_empty());
    assert!(document.body.contains("---"));
    Ok(())
}

/// Test that rendering reproduces header, separator, notice and body in order
#[test]
fn test_render_withHeaderAndNotice_shouldLayOutDocumentShape() -> Result<()> {
    let text = "---\ntitle: Hello\n---\n\nThe body.\n";
    let document = MarkdownDocument::parse(text)?;

    let rendered = document.render(Some("> *notice*"))?;

    assert!(rendered.starts_with("---\n"));
    assert!(rendered.contains("title: Hello"));
    let header_end = rendered.find("---\n\n").expect("closing fence missing");
    let notice_pos = rendered.find("> *notice*").expect("notice missing");
    let body_pos = rendered.find("The body.").expect("body missing");
    assert!(header_end < notice_pos);
    assert!(notice_pos < body_pos);
    assert!(rendered.ends_with('\n'));
    Ok(())
}

/// Test that a headerless document renders without a front matter block
#[test]
fn test_render_withoutHeader_shouldOmitFrontMatterFences() -> Result<()> {
    let document = MarkdownDocument::parse("Only body text.\n")?;

    let rendered = document.render(None)?;

    assert_eq!(rendered, "Only body text.\n");
    Ok(())
}

/// Test that parse then render round-trips header values
#[test]
fn test_parse_render_withTypedFields_shouldPreserveValues() -> Result<()> {
    let text = "---\ntitle: Post\ncount: 7\npublished: true\n---\n\nBody.\n";
    let document = MarkdownDocument::parse(text)?;

    let rendered = document.render(None)?;
    let reparsed = MarkdownDocument::parse(&rendered)?;

    assert_eq!(reparsed.header, document.header);
    assert_eq!(reparsed.body, document.body);
    Ok(())
}

/// Test the English-target notice names the source language
#[test]
fn test_translation_notice_withEnglishTarget_shouldNameSourceLanguage() {
    let notice = translation_notice("it", "en");

    assert!(notice.contains("Italian"));
    assert!(notice.contains("automatically translated"));
    assert!(notice.starts_with("> "));
    assert!(notice.contains('*'));
}

/// Test the Italian-target notice is in Italian
#[test]
fn test_translation_notice_withItalianTarget_shouldBeItalian() {
    let notice = translation_notice("en", "it");

    assert!(notice.contains("tradotto automaticamente"));
}

/// Test that other targets get the generic notice
#[test]
fn test_translation_notice_withOtherTarget_shouldFallBackToGeneric() {
    let notice = translation_notice("en", "fr");

    assert_eq!(
        notice,
        "> ⚠️ *This content was automatically translated.*"
    );
}
