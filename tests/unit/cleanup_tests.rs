/*!
 * Tests for post-translation formatting cleanup
 */

use mdtrans::cleanup::MarkdownCleaner;

/// Test that stray whitespace inside bold delimiters is trimmed
#[test]
fn test_cleanup_withSpacedBold_shouldTightenDelimiters() {
    assert_eq!(MarkdownCleaner::cleanup("** bold **"), "**bold**");
    assert_eq!(MarkdownCleaner::cleanup("**bold **"), "**bold**");
    assert_eq!(MarkdownCleaner::cleanup("** bold**"), "**bold**");
}

/// Test that stray whitespace inside italic delimiters is trimmed
#[test]
fn test_cleanup_withSpacedItalic_shouldTightenDelimiters() {
    assert_eq!(MarkdownCleaner::cleanup("a * word * b"), "a *word* b");
    assert_eq!(MarkdownCleaner::cleanup("_ word _"), "_word_");
}

/// Test that stray whitespace inside strikethrough delimiters is trimmed
#[test]
fn test_cleanup_withSpacedStrikethrough_shouldTightenDelimiters() {
    assert_eq!(MarkdownCleaner::cleanup("~~ gone ~~"), "~~gone~~");
}

/// Test that whitespace before sentence punctuation is removed
#[test]
fn test_cleanup_withSpacedPunctuation_shouldRemoveGap() {
    assert_eq!(
        MarkdownCleaner::cleanup("Hello , world ! How are you ?"),
        "Hello, world! How are you?"
    );
    assert_eq!(MarkdownCleaner::cleanup("done ."), "done.");
}

/// Test that already-clean text is left untouched
#[test]
fn test_cleanup_withCleanText_shouldBeNoOp() {
    let text = "Plain text with **bold**, *italic* and a sentence. Nothing to fix!";
    assert_eq!(MarkdownCleaner::cleanup(text), text);
}

/// Test that a bold span's closing stars never pair with a later italic opener
#[test]
fn test_cleanup_withAdjacentBoldAndItalic_shouldKeepSpansSeparate() {
    let text = "**bold**, *italic* and __strong__, _em_";
    assert_eq!(MarkdownCleaner::cleanup(text), text);
}

/// Test that a delimiter pair is never collapsed across a line break
#[test]
fn test_cleanup_withDelimitersAcrossLines_shouldNotCollapse() {
    let text = "2 * 3\n4 * 5";
    assert_eq!(MarkdownCleaner::cleanup(text), text);
}

/// Test that applying cleanup twice equals applying it once
#[test]
fn test_cleanup_withAnyInput_shouldBeIdempotent() {
    let fixtures = [
        "** bold ** and * italic * mixed , badly .",
        "no changes needed here",
        "~~ strike ~~ plus _ under _ scores",
        "A sentence . Another ! Lists:\n* item one\n* item two",
        "",
        "trailing spaces  ,  doubled",
    ];

    for fixture in fixtures {
        let once = MarkdownCleaner::cleanup(fixture);
        let twice = MarkdownCleaner::cleanup(&once);
        assert_eq!(once, twice, "cleanup not idempotent for {:?}", fixture);
    }
}
