use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{error_for_status, normalize_endpoint, Provider};

/// LibreTranslate client for self-hosted or public instances
#[derive(Debug)]
pub struct LibreTranslate {
    /// Base URL of the LibreTranslate instance
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Optional API key, required by some public instances
    api_key: Option<String>,
}

/// Translation request for the LibreTranslate API
#[derive(Debug, Clone, Serialize)]
pub struct LibreTranslateRequest {
    /// Text to translate
    q: String,
    /// Source language code
    source: String,
    /// Target language code
    target: String,
    /// Input format; always plain text, Markdown structure is masked upstream
    format: String,
    /// API key when the instance requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

impl LibreTranslateRequest {
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
            api_key: None,
        }
    }

    /// The text being translated
    pub fn text(&self) -> &str {
        &self.q
    }
}

/// Translation response from the LibreTranslate API
#[derive(Debug, Clone, Deserialize)]
pub struct LibreTranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Error body returned by LibreTranslate on failure
#[derive(Debug, Deserialize)]
struct LibreTranslateErrorBody {
    error: String,
}

impl LibreTranslate {
    /// Create a new client for the given endpoint
    pub fn new(endpoint: &str, api_key: String, timeout_secs: u64) -> Result<Self, ProviderError> {
        let base_url = normalize_endpoint(endpoint)?;

        Ok(Self {
            base_url,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: if api_key.is_empty() { None } else { Some(api_key) },
        })
    }
}

#[async_trait]
impl Provider for LibreTranslate {
    type Request = LibreTranslateRequest;
    type Response = LibreTranslateResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let url = format!("{}/translate", self.base_url);

        let mut request = request;
        request.api_key = self.api_key.clone();

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<LibreTranslateErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(error_for_status(status.as_u16(), message));
        }

        response
            .json::<LibreTranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let url = format!("{}/languages", self.base_url);

        let response = self
            .client
            .get(&url)
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
        response.translated_text.clone()
    }
}
