/*!
 * Provider implementations for translation backends.
 *
 * This module contains client implementations for the supported
 * machine-translation services:
 * - LibreTranslate: self-hosted, keyless
 * - DeepL: DeepL REST API
 * - Google: Google Cloud Translation v2
 * - Mock: scripted behaviors for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation backends
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the translation
/// service. A provider treats the text it receives as opaque: placeholders
/// and Markdown inside a chunk carry no meaning at this layer.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Extract the translated text from the provider response
    ///
    /// # Arguments
    /// * `response` - The response from the provider
    ///
    /// # Returns
    /// * `String` - The extracted text
    fn extract_text(response: &Self::Response) -> String;
}

/// Normalize a configured endpoint into a base URL without trailing slash,
/// defaulting the scheme to https when none is given.
pub(crate) fn normalize_endpoint(endpoint: &str) -> Result<String, ProviderError> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::ConnectionError(
            "Endpoint cannot be empty".to_string(),
        ));
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = url::Url::parse(&with_scheme)
        .map_err(|e| ProviderError::ConnectionError(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

    if url.host_str().is_none() {
        return Err(ProviderError::ConnectionError(format!(
            "Endpoint '{}' has no host",
            endpoint
        )));
    }

    Ok(with_scheme.trim_end_matches('/').to_string())
}

/// Map an HTTP error status to the matching provider error
pub(crate) fn error_for_status(status_code: u16, message: String) -> ProviderError {
    match status_code {
        401 | 403 => ProviderError::AuthenticationError(message),
        429 | 456 => ProviderError::RateLimitExceeded(message),
        _ => ProviderError::ApiError {
            status_code,
            message,
        },
    }
}

pub mod deepl;
pub mod google;
pub mod libretranslate;
pub mod mock;
