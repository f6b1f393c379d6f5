/*!
 * Core translation service implementation.
 *
 * This module contains the TranslationService struct, which dispatches raw
 * text translation requests to the configured backend. It knows nothing about
 * Markdown, placeholders or chunk boundaries; a request's text is opaque.
 */

use anyhow::{anyhow, Result};
use log::info;

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::ProviderError;
use crate::providers::deepl::{DeepL, DeepLRequest};
use crate::providers::google::{GoogleTranslate, GoogleTranslateRequest};
use crate::providers::libretranslate::{LibreTranslate, LibreTranslateRequest};
use crate::providers::mock::{MockProvider, MockRequest};
use crate::providers::Provider;

/// Translation provider implementation variants
enum TranslationProviderImpl {
    /// LibreTranslate instance
    LibreTranslate {
        /// Client instance
        client: LibreTranslate,
    },

    /// DeepL API service
    DeepL {
        /// Client instance
        client: DeepL,
    },

    /// Google Cloud Translation service
    Google {
        /// Client instance
        client: GoogleTranslate,
    },

    /// Scripted provider for tests
    Mock {
        /// Client instance
        client: MockProvider,
    },
}

/// Translation service dispatching to the configured backend
pub struct TranslationService {
    /// Provider implementation
    provider: TranslationProviderImpl,

    /// Configuration for the translation service
    pub config: TranslationConfig,
}

impl TranslationService {
    /// Create a new translation service with the given configuration
    pub fn new(config: TranslationConfig) -> Result<Self> {
        let timeout_secs = config.get_timeout_secs();

        let provider = match config.provider {
            ConfigTranslationProvider::LibreTranslate => TranslationProviderImpl::LibreTranslate {
                client: LibreTranslate::new(
                    &config.get_endpoint(),
                    config.get_api_key(),
                    timeout_secs,
                )?,
            },
            ConfigTranslationProvider::DeepL => TranslationProviderImpl::DeepL {
                client: DeepL::new(&config.get_endpoint(), config.get_api_key(), timeout_secs)?,
            },
            ConfigTranslationProvider::Google => TranslationProviderImpl::Google {
                client: GoogleTranslate::new(
                    &config.get_endpoint(),
                    config.get_api_key(),
                    timeout_secs,
                )?,
            },
        };

        Ok(Self { provider, config })
    }

    /// Create a service backed by a mock provider, for tests
    pub fn with_mock(client: MockProvider, config: TranslationConfig) -> Self {
        Self {
            provider: TranslationProviderImpl::Mock { client },
            config,
        }
    }

    /// Test the connection to the configured backend
    pub async fn test_connection(&self) -> Result<()> {
        let name = self.config.provider.display_name();

        let result = match &self.provider {
            TranslationProviderImpl::LibreTranslate { client } => client.test_connection().await,
            TranslationProviderImpl::DeepL { client } => client.test_connection().await,
            TranslationProviderImpl::Google { client } => client.test_connection().await,
            TranslationProviderImpl::Mock { client } => client.test_connection().await,
        };

        match result {
            Ok(()) => {
                info!("Successfully connected to {}", name);
                Ok(())
            }
            Err(e) => Err(anyhow!("Failed to connect to {}: {}", name, e)),
        }
    }

    /// Translate a single piece of text through the backend.
    ///
    /// One call, no retries: a failure here is final for this text and the
    /// caller decides how to degrade. Empty input short-circuits without a
    /// request.
    pub async fn translate_text(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let translated = match &self.provider {
            TranslationProviderImpl::LibreTranslate { client } => {
                let request = LibreTranslateRequest::new(text, source_language, target_language);
                let response = client.complete(request).await?;
                LibreTranslate::extract_text(&response)
            }
            TranslationProviderImpl::DeepL { client } => {
                let request = DeepLRequest::new(text, source_language, target_language);
                let response = client.complete(request).await?;
                DeepL::extract_text(&response)
            }
            TranslationProviderImpl::Google { client } => {
                let request = GoogleTranslateRequest::new(text, source_language, target_language);
                let response = client.complete(request).await?;
                GoogleTranslate::extract_text(&response)
            }
            TranslationProviderImpl::Mock { client } => {
                let request = MockRequest::new(text, source_language, target_language);
                let response = client.complete(request).await?;
                MockProvider::extract_text(&response)
            }
        };

        // A blank translation of non-blank input is a backend failure, not a result
        if translated.trim().is_empty() {
            return Err(ProviderError::EmptyTranslation.into());
        }

        Ok(translated)
    }
}
