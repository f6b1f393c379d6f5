/*!
 * Placeholder tokens and the span map.
 *
 * A token must not collide with other tokens or naturally occurring text,
 * must survive being echoed, reordered or whitespace-trimmed by the backend,
 * and must not look like a word a translation service would translate. Tokens
 * are therefore `MSK` + an 8-hex-digit nonce unique to one mask invocation +
 * a fixed-width index: e.g. `MSK7F3A2B910004`.
 */

use uuid::Uuid;

/// The kind of content a protected span holds.
///
/// Kinds are listed in mask pass order: each pass runs on the already-masked
/// output of the previous one, so earlier, more specific patterns cannot be
/// re-matched or corrupted by later, broader ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// A ``` fenced code block, including the fences
    FencedCodeBlock,
    /// A single HTML tag or comment
    HtmlTag,
    /// An inline emphasis/strong/strikethrough span, delimiters included
    InlineEmphasis,
    /// A Markdown link or image, label and destination included
    MarkdownLink,
    /// A bare mailto: link
    MailtoLink,
    /// A dictionary term that must never be altered by translation
    FrozenTerm,
}

impl SpanKind {
    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::FencedCodeBlock => "code fence",
            Self::HtmlTag => "html tag",
            Self::InlineEmphasis => "emphasis",
            Self::MarkdownLink => "link",
            Self::MailtoLink => "mailto",
            Self::FrozenTerm => "frozen term",
        }
    }
}

/// One masked region: the token standing in for it and the original content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSpan {
    /// Placeholder substituted into the masked text
    pub token: String,
    /// Exact original content, restored verbatim on unmask
    pub content: String,
    /// Which pass produced the span
    pub kind: SpanKind,
}

/// Insertion-ordered mapping from placeholder tokens to protected spans.
///
/// One map belongs to exactly one mask invocation; it is consumed by
/// restoration and then discarded. Maps are never shared across documents.
#[derive(Debug, Clone)]
pub struct SpanMap {
    nonce: String,
    spans: Vec<ProtectedSpan>,
}

impl SpanMap {
    /// Create an empty map with a fresh nonce
    pub fn new() -> Self {
        let nonce = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
        Self {
            nonce,
            spans: Vec::new(),
        }
    }

    /// Register a new protected span and return its placeholder token.
    ///
    /// Every call yields a distinct token, even for identical content: five
    /// occurrences of the same term become five independent spans.
    pub fn register(&mut self, kind: SpanKind, content: &str) -> String {
        let token = format!("MSK{}{:04}", self.nonce, self.spans.len());
        self.spans.push(ProtectedSpan {
            token: token.clone(),
            content: content.to_string(),
            kind,
        });
        token
    }

    /// Restore every placeholder in `text` to its original content.
    ///
    /// Runs newest-first. Tokens are fixed-width and nonce-qualified, so no
    /// token is a prefix of another. Each token is consumed at most once.
    pub fn restore_all(&self, text: &str) -> String {
        let mut result = text.to_string();
        for span in self.spans.iter().rev() {
            result = result.replacen(&span.token, &span.content, 1);
        }
        result
    }

    /// Nonce shared by every token in this map
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// All registered spans, in insertion order
    pub fn spans(&self) -> &[ProtectedSpan] {
        &self.spans
    }

    /// Number of registered spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether no span was registered
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Count spans of one kind
    pub fn count_kind(&self, kind: SpanKind) -> usize {
        self.spans.iter().filter(|s| s.kind == kind).count()
    }
}

impl Default for SpanMap {
    fn default() -> Self {
        Self::new()
    }
}
