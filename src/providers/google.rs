use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{error_for_status, normalize_endpoint, Provider};

/// Google Cloud Translation v2 client
#[derive(Debug)]
pub struct GoogleTranslate {
    /// Base URL of the Translation API
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// API key passed as a query parameter
    api_key: String,
}

/// Translation request for the Cloud Translation v2 API
#[derive(Debug, Clone, Serialize)]
pub struct GoogleTranslateRequest {
    /// Text to translate
    q: String,
    /// Source language code
    source: String,
    /// Target language code
    target: String,
    /// Output format; text so entities are not HTML-escaped
    format: String,
}

impl GoogleTranslateRequest {
    /// Create a new translation request
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            q: text.into(),
            source: source.into(),
            target: target.into(),
            format: "text".to_string(),
        }
    }
}

/// One translation in a v2 response
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTranslation {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Payload of a v2 response
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTranslateData {
    /// Translations, parallel to the request texts
    pub translations: Vec<GoogleTranslation>,
}

/// Translation response from the Cloud Translation v2 API
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTranslateResponse {
    /// Response payload
    pub data: GoogleTranslateData,
}

impl GoogleTranslate {
    /// Create a new client for the given endpoint and key
    pub fn new(endpoint: &str, api_key: String, timeout_secs: u64) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "Google Translate requires an API key".to_string(),
            ));
        }

        let base_url = normalize_endpoint(endpoint)?;

        Ok(Self {
            base_url,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key,
        })
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    type Request = GoogleTranslateRequest;
    type Response = GoogleTranslateResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let url = format!("{}/language/translate/v2", self.base_url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(error_for_status(status.as_u16(), message));
        }

        let parsed = response
            .json::<GoogleTranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        if parsed.data.translations.is_empty() {
            return Err(ProviderError::ParseError(
                "Google Translate returned no translations".to_string(),
            ));
        }

        Ok(parsed)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let url = format!("{}/language/translate/v2/languages", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(
                status.as_u16(),
                format!("HTTP {}", status),
            ));
        }

        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response
            .data
            .translations
            .first()
            .map(|t| t.translated_text.clone())
            .unwrap_or_default()
    }
}
