/*!
 * Post-translation formatting cleanup.
 *
 * Translation backends like to pad delimiters and punctuation with spaces.
 * This module normalizes those artifacts after placeholder restoration:
 * stray whitespace immediately inside emphasis delimiters is trimmed and
 * whitespace inserted before sentence punctuation is removed. Applying the
 * cleanup twice produces the same result as applying it once.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Delimiters in alternation order, parallel to the capture groups of
/// `EMPHASIS_REGEX`. Double delimiters come before their single forms so a
/// `**bold**` span is consumed whole and its closing stars can never pair
/// with a later span's opener.
const EMPHASIS_DELIMITERS: [&str; 7] = ["***", "**", "*", "~~", "___", "__", "_"];

/// One pattern for every emphasis form, whitespace-padded or not.
///
/// Whitespace classes are line-local so a delimiter pair is never collapsed
/// across a line break.
static EMPHASIS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\*\*\*[ \t]*([^*\n]+?)[ \t]*\*\*\*|\*\*[ \t]*([^*\n]+?)[ \t]*\*\*|\*[ \t]*([^*\n]+?)[ \t]*\*|~~[ \t]*([^~\n]+?)[ \t]*~~|___[ \t]*([^_\n]+?)[ \t]*___|__[ \t]*([^_\n]+?)[ \t]*__|_[ \t]*([^_\n]+?)[ \t]*_",
    )
    .unwrap()
});

/// Whitespace wedged in front of sentence punctuation
static PUNCTUATION_GAP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+([.,;:!?])").unwrap());

/// Formatting normalizer for translated Markdown
pub struct MarkdownCleaner;

impl MarkdownCleaner {
    /// Apply all cleanup passes. Idempotent: `cleanup(cleanup(x)) == cleanup(x)`.
    pub fn cleanup(text: &str) -> String {
        let mut result = EMPHASIS_REGEX
            .replace_all(text, Self::tighten_emphasis)
            .into_owned();

        result = PUNCTUATION_GAP_REGEX.replace_all(&result, "$1").into_owned();

        result
    }

    /// Rebuild a matched emphasis span with its content flush against the
    /// delimiters
    fn tighten_emphasis(caps: &Captures) -> String {
        for (idx, delimiter) in EMPHASIS_DELIMITERS.iter().enumerate() {
            if let Some(content) = caps.get(idx + 1) {
                return format!("{}{}{}", delimiter, content.as_str(), delimiter);
            }
        }
        caps.get(0).map_or(String::new(), |m| m.as_str().to_string())
    }
}
