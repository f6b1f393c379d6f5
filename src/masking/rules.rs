/*!
 * Mask rules: which patterns protect which span kinds, in which order.
 */

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use super::token::SpanKind;

/// Static pattern table for the built-in passes, in pass order.
///
/// Fenced code blocks go first so nothing inside a fence can be re-matched by
/// the broader tag/emphasis/link patterns; mailto comes after links so a
/// `[text](mailto:...)` is captured as one link span.
static BUILTIN_PATTERNS: &[(SpanKind, &str)] = &[
    (SpanKind::FencedCodeBlock, r"(?s)```.*?```"),
    (SpanKind::HtmlTag, r"(?s)<!--.*?-->|</?[A-Za-z][^<>]*>"),
    (
        SpanKind::InlineEmphasis,
        r"\*\*\*[^*\n]+\*\*\*|\*\*[^*\n]+\*\*|\*[^*\n]+\*|~~[^~\n]+~~|___[^_\n]+___|__[^_\n]+__|_[^_\n]+_",
    ),
    (SpanKind::MarkdownLink, r"!?\[[^\]\n]*\]\([^)\n]*\)"),
    (SpanKind::MailtoLink, r"mailto:[^\s)>\]]+"),
];

/// Compiled built-in rules, shared across maskers
static BUILTIN_RULES: Lazy<Vec<MaskRule>> = Lazy::new(|| {
    BUILTIN_PATTERNS
        .iter()
        .map(|(kind, pattern)| MaskRule {
            kind: *kind,
            pattern: Regex::new(pattern).expect("Invalid built-in mask pattern"),
        })
        .collect()
});

/// One mask pass: a span kind and the pattern that finds it
#[derive(Debug, Clone)]
pub struct MaskRule {
    /// Kind recorded for every span this rule produces
    pub kind: SpanKind,
    /// Pattern matched against the already-masked output of earlier passes
    pub pattern: Regex,
}

impl MaskRule {
    /// The built-in rules in their fixed pass order
    pub fn builtin() -> Vec<MaskRule> {
        BUILTIN_RULES.clone()
    }

    /// Build the frozen-term rule for a dictionary, or `None` when the
    /// dictionary is empty.
    ///
    /// Terms match case-insensitively. A term made only of word characters is
    /// word-boundary-delimited; a term containing anything else (URLs, dotted
    /// names, multi-word phrases) matches literally. Longer terms are tried
    /// first so `Google Maps` masks as a unit before a lone `Google` rule
    /// could fire.
    pub fn frozen_terms(terms: &[String]) -> Result<Option<MaskRule>> {
        let mut terms: Vec<&String> = terms.iter().filter(|t| !t.trim().is_empty()).collect();
        if terms.is_empty() {
            return Ok(None);
        }

        terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));

        let alternatives: Vec<String> = terms
            .iter()
            .map(|term| {
                let escaped = regex::escape(term);
                if is_word_like(term) {
                    format!(r"\b{}\b", escaped)
                } else {
                    escaped
                }
            })
            .collect();

        let pattern = format!("(?i){}", alternatives.join("|"));
        let pattern = Regex::new(&pattern)
            .with_context(|| format!("Failed to compile frozen-term pattern for {} terms", terms.len()))?;

        Ok(Some(MaskRule {
            kind: SpanKind::FrozenTerm,
            pattern,
        }))
    }
}

/// Whether a term consists solely of word characters and can take `\b`
/// boundaries on both sides
pub fn is_word_like(term: &str) -> bool {
    !term.is_empty() && term.chars().all(|c| c.is_alphanumeric() || c == '_')
}
