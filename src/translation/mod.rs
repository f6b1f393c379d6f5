/*!
 * Translation services for Markdown documents.
 *
 * This module contains the functionality that turns a parsed document into
 * its translated counterpart. It is split into two submodules:
 *
 * - `core`: Provider dispatch and raw per-request text translation
 * - `pipeline`: The per-document pipeline: mask protected spans, chunk under
 *   the provider budget, translate chunk by chunk with per-chunk fallback,
 *   restore the spans and normalize formatting
 */

// Re-export main types for easier usage
pub use self::core::TranslationService;
pub use self::pipeline::DocumentTranslator;

// Submodules
pub mod core;
pub mod pipeline;
