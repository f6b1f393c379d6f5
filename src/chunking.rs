/*!
 * Paragraph-aligned chunking.
 *
 * Translation backends impose a hard per-request size limit. The chunker
 * splits masked text into pieces under a configured character budget without
 * ever breaking a paragraph or a placeholder token: boundaries fall only at
 * blank lines.
 */

use log::debug;

/// Separator between paragraphs, and between rejoined chunks
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Splits text into translation-sized chunks at paragraph boundaries
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    budget: usize,
}

impl Chunker {
    /// Create a chunker with the given character budget.
    ///
    /// The budget must already include safety margin below the backend's
    /// hard ceiling; the chunker treats it as the limit.
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }

    /// The configured character budget
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Split `text` into chunks, accumulating whole paragraphs while they fit.
    ///
    /// A single paragraph longer than the budget is emitted as one oversized
    /// chunk rather than split mid-paragraph; callers needing strict
    /// compliance must pre-split such paragraphs themselves.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for paragraph in text.split(PARAGRAPH_SEPARATOR) {
            let needed = if current.is_empty() {
                paragraph.len()
            } else {
                current.len() + PARAGRAPH_SEPARATOR.len() + paragraph.len()
            };

            if !current.is_empty() && needed >= self.budget {
                Self::flush(&mut chunks, &mut current);
            }

            if !current.is_empty() {
                current.push_str(PARAGRAPH_SEPARATOR);
            }
            current.push_str(paragraph);
        }

        Self::flush(&mut chunks, &mut current);

        for chunk in &chunks {
            if chunk.len() >= self.budget {
                debug!(
                    "Paragraph of {} chars exceeds the {}-char budget; sending oversized",
                    chunk.len(),
                    self.budget
                );
            }
        }

        chunks
    }

    fn flush(chunks: &mut Vec<String>, current: &mut String) {
        let trimmed = current.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }
        current.clear();
    }
}

/// Rejoin per-chunk results with the paragraph separator
pub fn join_chunks(chunks: &[String]) -> String {
    chunks.join(PARAGRAPH_SEPARATOR)
}
