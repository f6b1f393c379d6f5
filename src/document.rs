/*!
 * Markdown document model with YAML front matter.
 *
 * A document may begin with a YAML header delimited by `---` lines. The
 * header is parsed into a mapping so string fields can be translated while
 * dates, booleans and numbers pass through untouched. Rendering re-serializes
 * the header and injects a machine-translation notice above the body.
 */

use serde_yaml::Mapping;

use crate::errors::DocumentError;
use crate::language_utils;

/// Line that opens and closes a front-matter block
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// A Markdown document split into YAML header and body text
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownDocument {
    /// Parsed front-matter mapping, empty when the document has none
    pub header: Mapping,

    /// Body text with leading blank lines stripped
    pub body: String,
}

impl MarkdownDocument {
    /// Create a document from an already-split header and body
    pub fn new(header: Mapping, body: impl Into<String>) -> Self {
        Self {
            header,
            body: body.into(),
        }
    }

    /// Parse a raw document.
    ///
    /// A header is recognized only when the very first line is `---`. A
    /// document without one is treated as all body with an empty header.
    /// An opened but unclosed header is an error rather than silently being
    /// swallowed into the body.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let first_line = text.lines().next().map(|line| line.trim_end());
        if first_line != Some(FRONT_MATTER_DELIMITER) {
            return Ok(Self {
                header: Mapping::new(),
                body: text.to_string(),
            });
        }

        let lines: Vec<&str> = text.lines().collect();
        let close = lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| line.trim_end() == FRONT_MATTER_DELIMITER)
            .map(|(idx, _)| idx)
            .ok_or(DocumentError::UnterminatedFrontMatter)?;

        let header_source = lines[1..close].join("\n");
        let header: Mapping = if header_source.trim().is_empty() {
            Mapping::new()
        } else {
            serde_yaml::from_str(&header_source)
                .map_err(|e| DocumentError::InvalidFrontMatter(e.to_string()))?
        };

        let body = lines[close + 1..].join("\n");
        let body = body.trim_start_matches('\n').to_string();

        Ok(Self { header, body })
    }

    /// Render the document back to text.
    ///
    /// Shape: re-serialized YAML header, `---` separator, optional notice
    /// paragraph, body. A document that never had a header is rendered
    /// without one.
    pub fn render(&self, notice: Option<&str>) -> Result<String, DocumentError> {
        let mut out = String::new();

        if !self.header.is_empty() {
            let yaml = serde_yaml::to_string(&self.header)
                .map_err(|e| DocumentError::HeaderSerialization(e.to_string()))?;
            // serde_yaml prepends its own document marker on some versions
            let yaml = yaml.strip_prefix("---\n").unwrap_or(&yaml);

            out.push_str(FRONT_MATTER_DELIMITER);
            out.push('\n');
            out.push_str(yaml);
            out.push_str(FRONT_MATTER_DELIMITER);
            out.push_str("\n\n");
        }

        if let Some(notice) = notice {
            out.push_str(notice);
            out.push_str("\n\n");
        }

        out.push_str(&self.body);
        if !out.ends_with('\n') {
            out.push('\n');
        }

        Ok(out)
    }
}

/// Build the italicized notice stating the content was machine-translated.
///
/// English and Italian targets get a full sentence in the target language;
/// anything else falls back to a generic English notice.
pub fn translation_notice(source_language: &str, target_language: &str) -> String {
    match target_language.trim().to_lowercase().as_str() {
        "en" | "eng" => {
            let source_name = language_utils::get_language_name(source_language)
                .unwrap_or_else(|_| "another language".to_string());
            format!(
                "> ⚠️ *This content was automatically translated from {} using a machine translation tool.*",
                source_name
            )
        }
        "it" | "ita" => "> ⚠️ *Questo contenuto è stato tradotto automaticamente tramite un sistema di traduzione automatica.*".to_string(),
        _ => "> ⚠️ *This content was automatically translated.*".to_string(),
    }
}
