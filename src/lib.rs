/*!
 * # mdtrans - Markdown Tree Translator
 *
 * A Rust library for translating directories of Markdown documents through
 * machine-translation services while protecting content that must survive
 * translation byte-for-byte.
 *
 * ## Features
 *
 * - Walk a source tree of `*.md` files and write translated copies to a
 *   mirrored destination tree
 * - Protect code fences, HTML tags, inline emphasis, links, mailto links and
 *   a configurable frozen-term dictionary via placeholder masking
 * - Translate YAML front-matter string fields, passing other values through
 * - Multiple translation backends:
 *   - LibreTranslate (self-hosted, keyless)
 *   - DeepL API
 *   - Google Cloud Translation v2
 * - Paragraph-aligned chunking below the backend's request size limit
 * - Per-chunk and per-field failure tolerance: a failed call degrades that
 *   unit of text, never the document
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Front-matter parsing and document rendering
 * - `masking`: Protected-span masking and restoration
 * - `chunking`: Paragraph-aligned request sizing
 * - `cleanup`: Post-translation formatting normalization
 * - `translation`: The per-document translation pipeline:
 *   - `translation::core`: Provider dispatch and raw text translation
 *   - `translation::pipeline`: mask -> chunk -> translate -> unmask -> cleanup
 * - `providers`: Client implementations for translation backends:
 *   - `providers::libretranslate`: LibreTranslate API client
 *   - `providers::deepl`: DeepL API client
 *   - `providers::google`: Google Cloud Translation client
 *   - `providers::mock`: Scripted providers for tests
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod chunking;
pub mod cleanup;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod masking;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document::MarkdownDocument;
pub use errors::{AppError, DocumentError, ProviderError, TranslationError};
pub use masking::{SpanKind, SpanMap, SpanMasker};
pub use translation::{DocumentTranslator, TranslationService};
