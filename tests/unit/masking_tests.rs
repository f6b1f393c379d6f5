/*!
 * Tests for protected-span masking and restoration
 */

use anyhow::Result;
use mdtrans::masking::{SpanKind, SpanMap, SpanMasker};

/// Test that masking then immediately unmasking reproduces the input exactly
#[test]
fn test_mask_unmask_withMixedContent_shouldRoundTrip() -> Result<()> {
    let masker = SpanMasker::with_terms(&["Leaflet", "OpenStreetMap"])?;
    let text = "# Maps\n\nLeaflet renders **tiles** from [OSM](https://osm.org).\n\n```rust\nlet x = 1;\n```\n\nWrite to mailto:maps@example.com or use <br> tags.\n";

    let (masked, map) = masker.mask(text);
    assert!(!map.is_empty());
    let restored = SpanMasker::unmask(&masked, &map);

    assert_eq!(restored, text);
    Ok(())
}

/// Test that every occurrence of a repeated term gets its own placeholder
#[test]
fn test_mask_withRepeatedTerm_shouldAssignDistinctPlaceholders() -> Result<()> {
    let masker = SpanMasker::with_terms(&["Rust"])?;
    let text = "Rust here, Rust there, Rust, Rust and Rust again.";

    let (masked, map) = masker.mask(text);

    assert_eq!(map.len(), 5);
    assert!(!masked.contains("Rust"));

    let mut tokens: Vec<&str> = map.spans().iter().map(|s| s.token.as_str()).collect();
    tokens.sort();
    tokens.dedup();
    assert_eq!(tokens.len(), 5);

    Ok(())
}

/// Test that longer terms win over shorter terms they contain
#[test]
fn test_mask_withOverlappingTerms_shouldPreferLongestTerm() -> Result<()> {
    let masker = SpanMasker::with_terms(&["Google", "Google Maps"])?;
    let text = "Google Maps is handy, Google less so.";

    let (_, map) = masker.mask(text);

    assert_eq!(map.len(), 2);
    assert_eq!(map.spans()[0].content, "Google Maps");
    assert_eq!(map.spans()[1].content, "Google");
    Ok(())
}

/// Test that frozen terms match case-insensitively but restore original casing
#[test]
fn test_mask_withDifferentCasing_shouldMatchAndRestoreOriginal() -> Result<()> {
    let masker = SpanMasker::with_terms(&["Leaflet"])?;
    let text = "leaflet and LEAFLET and Leaflet.";

    let (masked, map) = masker.mask(text);

    assert_eq!(map.len(), 3);
    let restored = SpanMasker::unmask(&masked, &map);
    assert_eq!(restored, text);
    Ok(())
}

/// Test that word-like terms do not match inside larger words
#[test]
fn test_mask_withWordBoundaryTerm_shouldNotMatchSubstring() -> Result<()> {
    let masker = SpanMasker::with_terms(&["Google"])?;
    let text = "Googles and Googleplex stay put.";

    let (masked, map) = masker.mask(text);

    assert!(map.is_empty());
    assert_eq!(masked, text);
    Ok(())
}

/// Test that a term with non-word characters matches literally
#[test]
fn test_mask_withUrlTerm_shouldMatchLiterally() -> Result<()> {
    let masker = SpanMasker::with_terms(&["https://example.com/docs"])?;
    let text = "See https://example.com/docs for details.";

    let (masked, map) = masker.mask(text);

    assert_eq!(map.len(), 1);
    assert_eq!(map.spans()[0].content, "https://example.com/docs");
    assert!(!masked.contains("example.com"));
    Ok(())
}

/// Test that code fences are masked before any other pass can touch their content
#[test]
fn test_mask_withCodeFence_shouldProtectFenceAsOneSpan() -> Result<()> {
    let masker = SpanMasker::with_terms(&["Leaflet"])?;
    let text = "Intro.\n\n```js\nconst map = Leaflet.map('x'); // **not emphasis**\n```\n\nOutro.";

    let (masked, map) = masker.mask(text);

    assert_eq!(map.count_kind(SpanKind::FencedCodeBlock), 1);
    assert_eq!(map.count_kind(SpanKind::FrozenTerm), 0);
    assert_eq!(map.count_kind(SpanKind::InlineEmphasis), 0);
    assert!(!masked.contains("const map"));

    let restored = SpanMasker::unmask(&masked, &map);
    assert_eq!(restored, text);
    Ok(())
}

/// Test that each built-in span kind is recognized
#[test]
fn test_mask_withEachSpanKind_shouldRecordMatchingKind() -> Result<()> {
    let masker = SpanMasker::with_terms(&[])?;

    let cases = [
        ("```\ncode\n```", SpanKind::FencedCodeBlock),
        ("<div class=\"x\">", SpanKind::HtmlTag),
        ("<!-- note -->", SpanKind::HtmlTag),
        ("**bold**", SpanKind::InlineEmphasis),
        ("~~gone~~", SpanKind::InlineEmphasis),
        ("[label](https://example.com)", SpanKind::MarkdownLink),
        ("![alt](img.png)", SpanKind::MarkdownLink),
        ("mailto:a@b.com", SpanKind::MailtoLink),
    ];

    for (snippet, kind) in cases {
        let (_, map) = masker.mask(snippet);
        assert_eq!(
            map.count_kind(kind),
            1,
            "expected one {:?} span in {:?}",
            kind,
            snippet
        );
    }

    Ok(())
}

/// Test that a link wrapping a mailto URI is captured as a single link span
#[test]
fn test_mask_withMailtoInsideLink_shouldMaskAsLink() -> Result<()> {
    let masker = SpanMasker::with_terms(&[])?;
    let text = "Contact [us](mailto:hi@example.com) today.";

    let (_, map) = masker.mask(text);

    assert_eq!(map.count_kind(SpanKind::MarkdownLink), 1);
    assert_eq!(map.count_kind(SpanKind::MailtoLink), 0);
    Ok(())
}

/// Test that masking has no shared state between invocations
#[test]
fn test_mask_withTwoInvocations_shouldProduceIndependentMaps() -> Result<()> {
    let masker = SpanMasker::with_terms(&["Rust"])?;
    let text = "Rust is Rust.";

    let (masked_a, map_a) = masker.mask(text);
    let (masked_b, map_b) = masker.mask(text);

    assert_eq!(map_a.len(), map_b.len());
    assert_ne!(map_a.nonce(), map_b.nonce());
    assert_eq!(SpanMasker::unmask(&masked_a, &map_a), text);
    assert_eq!(SpanMasker::unmask(&masked_b, &map_b), text);
    Ok(())
}

/// Test that the compiled rules expose the fixed pass order
#[test]
fn test_rules_withFrozenTerms_shouldFollowFixedPassOrder() -> Result<()> {
    let masker = SpanMasker::with_terms(&["Leaflet"])?;

    let kinds: Vec<SpanKind> = masker.rules().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SpanKind::FencedCodeBlock,
            SpanKind::HtmlTag,
            SpanKind::InlineEmphasis,
            SpanKind::MarkdownLink,
            SpanKind::MailtoLink,
            SpanKind::FrozenTerm,
        ]
    );
    Ok(())
}

/// Test that an empty dictionary omits the frozen-term pass entirely
#[test]
fn test_rules_withNoTerms_shouldOmitFrozenTermPass() -> Result<()> {
    let masker = SpanMasker::with_terms(&[])?;

    assert!(masker
        .rules()
        .iter()
        .all(|r| r.kind != SpanKind::FrozenTerm));
    Ok(())
}

/// Test that restoration consumes each token exactly once, newest first
#[test]
fn test_span_map_restore_withRegisteredSpans_shouldReplaceEachTokenOnce() {
    let mut map = SpanMap::new();
    let first = map.register(SpanKind::FrozenTerm, "alpha");
    let second = map.register(SpanKind::FrozenTerm, "beta");

    let text = format!("{} and {}", first, second);
    let restored = map.restore_all(&text);

    assert_eq!(restored, "alpha and beta");
}

/// Test that tokens share the map nonce and carry distinct indices
#[test]
fn test_span_map_register_withMultipleSpans_shouldEmbedNonce() {
    let mut map = SpanMap::new();
    let first = map.register(SpanKind::HtmlTag, "<b>");
    let second = map.register(SpanKind::HtmlTag, "<i>");

    assert!(first.starts_with("MSK"));
    assert!(first.contains(map.nonce()));
    assert!(second.contains(map.nonce()));
    assert_ne!(first, second);
}
