/*!
 * Common test utilities for the mdtrans test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use mdtrans::app_config::{MaskingConfig, TranslationConfig};
use mdtrans::providers::mock::MockProvider;
use mdtrans::translation::{DocumentTranslator, TranslationService};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample Markdown document with front matter for testing
pub fn create_test_document(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"---
title: Ciao mondo
slug: ciao-mondo
draft: false
---

Leaflet is great for maps.

This is the second paragraph.
"#;
    create_test_file(dir, filename, content)
}

/// Build a translation config whose active provider allows `budget`
/// characters per request
pub fn translation_config_with_budget(budget: usize) -> TranslationConfig {
    let mut config = TranslationConfig::default();
    if let Some(provider) = config
        .available_providers
        .iter_mut()
        .find(|p| p.provider_type == "libretranslate")
    {
        provider.max_chars_per_request = budget;
    }
    config
}

/// Build a masking config with the given frozen terms
pub fn masking_config_with_terms(terms: &[&str]) -> MaskingConfig {
    MaskingConfig {
        frozen_terms: terms.iter().map(|t| t.to_string()).collect(),
        ..MaskingConfig::default()
    }
}

/// Build a document translator backed by a mock provider
pub fn mock_translator(
    provider: MockProvider,
    budget: usize,
    terms: &[&str],
) -> DocumentTranslator {
    let service = TranslationService::with_mock(provider, translation_config_with_budget(budget));
    DocumentTranslator::with_service(service, &masking_config_with_terms(terms))
        .expect("Failed to build mock translator")
}
