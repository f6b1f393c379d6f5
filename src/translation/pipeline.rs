/*!
 * Per-document translation pipeline.
 *
 * Body text goes through mask -> chunk -> translate -> reassemble -> unmask
 * -> cleanup. Front-matter string fields are translated directly, without
 * masking. Failures degrade the failing unit of text to its original and the
 * pipeline continues; a document is never dropped because a request failed.
 */

use anyhow::Result;
use log::{debug, warn};
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use std::time::Duration;

use crate::app_config::{Config, MaskingConfig};
use crate::chunking::{join_chunks, Chunker};
use crate::cleanup::MarkdownCleaner;
use crate::document::MarkdownDocument;
use crate::masking::{SpanKind, SpanMasker};

use super::core::TranslationService;

/// Translates whole documents: header fields and masked, chunked body text
pub struct DocumentTranslator {
    /// The translation service to use
    service: TranslationService,

    /// Masker compiled from the frozen-term dictionary
    masker: SpanMasker,

    /// Chunker sized to the active provider's request budget
    chunker: Chunker,

    /// Lowercased front-matter keys that are never translated
    skip_header_keys: HashSet<String>,

    /// Pause between consecutive backend requests
    request_delay: Duration,
}

impl DocumentTranslator {
    /// Create a translator from the application configuration
    pub fn new(config: &Config) -> Result<Self> {
        let service = TranslationService::new(config.translation.clone())?;
        Self::with_service(service, &config.masking)
    }

    /// Create a translator around an existing service.
    ///
    /// Used by tests to inject a mock-backed service.
    pub fn with_service(service: TranslationService, masking: &MaskingConfig) -> Result<Self> {
        let masker = SpanMasker::new(masking)?;
        let chunker = Chunker::new(service.config.get_max_chars_per_request());
        let skip_header_keys = masking
            .skip_header_keys
            .iter()
            .map(|key| key.to_lowercase())
            .collect();
        let request_delay = Duration::from_millis(service.config.common.request_delay_ms);

        Ok(Self {
            service,
            masker,
            chunker,
            skip_header_keys,
            request_delay,
        })
    }

    /// The compiled masker
    pub fn masker(&self) -> &SpanMasker {
        &self.masker
    }

    /// The configured chunker
    pub fn chunker(&self) -> &Chunker {
        &self.chunker
    }

    /// Translate a full document: header fields, then body
    pub async fn translate_document(
        &self,
        document: &MarkdownDocument,
        source_language: &str,
        target_language: &str,
    ) -> MarkdownDocument {
        let header = self
            .translate_header(&document.header, source_language, target_language)
            .await;
        let body = self
            .translate_body(&document.body, source_language, target_language)
            .await;

        MarkdownDocument::new(header, body)
    }

    /// Translate body text with protected-span masking.
    ///
    /// Infallible by contract: a chunk whose request fails is passed through
    /// untranslated and the rest of the body still goes out.
    pub async fn translate_body(
        &self,
        body: &str,
        source_language: &str,
        target_language: &str,
    ) -> String {
        if body.trim().is_empty() {
            return body.to_string();
        }

        let (masked, span_map) = self.masker.mask(body);
        debug!(
            "Masked {} spans ({} frozen terms)",
            span_map.len(),
            span_map.count_kind(SpanKind::FrozenTerm)
        );

        let chunks = self.chunker.split(&masked);
        let total = chunks.len();
        let mut results = Vec::with_capacity(total);

        for (idx, chunk) in chunks.iter().enumerate() {
            if idx > 0 && !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }

            match self
                .service
                .translate_text(chunk, source_language, target_language)
                .await
            {
                Ok(translated) => results.push(translated),
                Err(e) => {
                    warn!(
                        "Chunk {} of {} failed, keeping original text: {}",
                        idx + 1,
                        total,
                        e
                    );
                    results.push(chunk.clone());
                }
            }
        }

        let reassembled = join_chunks(&results);
        let restored = SpanMasker::unmask(&reassembled, &span_map);

        MarkdownCleaner::cleanup(&restored)
    }

    /// Translate the string-valued fields of a front-matter mapping.
    ///
    /// Fields on the skip list, non-string values and blank strings pass
    /// through unchanged; a field whose translation fails keeps its original
    /// value. Header fields are translated without masking.
    pub async fn translate_header(
        &self,
        header: &Mapping,
        source_language: &str,
        target_language: &str,
    ) -> Mapping {
        let mut translated = Mapping::new();

        for (key, value) in header {
            let result = match (key.as_str(), value) {
                (Some(name), Value::String(text))
                    if !self.skip_header_keys.contains(&name.to_lowercase())
                        && !text.trim().is_empty() =>
                {
                    match self
                        .service
                        .translate_text(text, source_language, target_language)
                        .await
                    {
                        Ok(text) => Value::String(text),
                        Err(e) => {
                            warn!(
                                "Failed to translate header field '{}', keeping original: {}",
                                name, e
                            );
                            value.clone()
                        }
                    }
                }
                _ => value.clone(),
            };

            translated.insert(key.clone(), result);
        }

        translated
    }
}
