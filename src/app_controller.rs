use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::document::{translation_notice, MarkdownDocument};
use crate::file_utils::FileManager;
use crate::translation::DocumentTranslator;

// @module: Application controller for Markdown tree translation

/// What happened to one document during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// The document was translated and written
    Translated,
    /// The destination file already existed and was left alone
    SkippedExisting,
}

/// Counters for a completed run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents translated and written
    pub translated: usize,
    /// Documents skipped because the destination already existed
    pub skipped: usize,
    /// Documents that failed outright
    pub failed: usize,
}

/// Main application controller for Markdown translation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Document translation pipeline
    translator: DocumentTranslator,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let translator = DocumentTranslator::new(&config)?;
        Ok(Self { config, translator })
    }

    /// Create a controller around an existing translator.
    ///
    /// Used by tests to inject a mock-backed pipeline.
    pub fn with_translator(config: Config, translator: DocumentTranslator) -> Self {
        Self { config, translator }
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Translate every Markdown document under `source_root` into the
    /// mirrored path under `dest_root`.
    ///
    /// Documents are processed one at a time; a document that fails is
    /// logged and counted, and its siblings still run.
    pub async fn run(
        &self,
        source_root: &Path,
        dest_root: &Path,
        force_overwrite: bool,
    ) -> Result<RunSummary> {
        if !FileManager::dir_exists(source_root) {
            return Err(anyhow::anyhow!(
                "Source directory does not exist: {:?}",
                source_root
            ));
        }

        FileManager::ensure_dir(dest_root)?;

        let files = FileManager::find_markdown_files(source_root)
            .context("Failed to scan source directory")?;

        if files.is_empty() {
            warn!("No Markdown files found under {:?}", source_root);
            return Ok(RunSummary::default());
        }

        info!(
            "Translating {} documents ({} -> {})",
            files.len(),
            self.config.source_language,
            self.config.target_language
        );

        let progress_bar = ProgressBar::new(files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));

        let mut summary = RunSummary::default();

        for file in &files {
            if let Some(name) = file.file_name() {
                progress_bar.set_message(name.to_string_lossy().to_string());
            }

            match self
                .process_document(file, source_root, dest_root, force_overwrite)
                .await
            {
                Ok(DocumentOutcome::Translated) => summary.translated += 1,
                Ok(DocumentOutcome::SkippedExisting) => summary.skipped += 1,
                Err(e) => {
                    summary.failed += 1;
                    error!("Failed to process {:?}: {}", file, e);
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        info!(
            "Run complete: {} translated, {} skipped, {} failed",
            summary.translated, summary.skipped, summary.failed
        );

        Ok(summary)
    }

    /// Translate a single document into its mirrored destination path
    async fn process_document(
        &self,
        file: &Path,
        source_root: &Path,
        dest_root: &Path,
        force_overwrite: bool,
    ) -> Result<DocumentOutcome> {
        let dest = FileManager::mirror_path(file, source_root, dest_root)?;

        if dest.exists() && !force_overwrite {
            debug!(
                "Skipping {:?}, destination already exists (use -f to force overwrite)",
                file
            );
            return Ok(DocumentOutcome::SkippedExisting);
        }

        let raw = FileManager::read_to_string(file)?;
        let document = MarkdownDocument::parse(&raw)
            .with_context(|| format!("Failed to parse document {:?}", file))?;

        let translated = self
            .translator
            .translate_document(
                &document,
                &self.config.source_language,
                &self.config.target_language,
            )
            .await;

        let notice = translation_notice(&self.config.source_language, &self.config.target_language);
        let rendered = translated
            .render(Some(&notice))
            .with_context(|| format!("Failed to render document {:?}", file))?;

        FileManager::write_to_file(&dest, &rendered)?;
        debug!("Wrote {:?}", dest);

        Ok(DocumentOutcome::Translated)
    }
}
