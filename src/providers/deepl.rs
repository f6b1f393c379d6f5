use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{error_for_status, normalize_endpoint, Provider};

/// DeepL API client.
///
/// Works against both the free tier (`api-free.deepl.com`) and the pro tier
/// (`api.deepl.com`); the endpoint decides which.
#[derive(Debug)]
pub struct DeepL {
    /// Base URL of the DeepL API
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// DeepL authentication key
    api_key: String,
}

/// Translation request for the DeepL v2 API
#[derive(Debug, Clone, Serialize)]
pub struct DeepLRequest {
    /// Texts to translate; one entry per request here
    text: Vec<String>,
    /// Source language, uppercased per the API contract
    source_lang: String,
    /// Target language, uppercased per the API contract
    target_lang: String,
}

impl DeepLRequest {
    /// Create a new translation request
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            text: vec![text.into()],
            source_lang: source.into().to_uppercase(),
            target_lang: target.into().to_uppercase(),
        }
    }
}

/// One translated text in a DeepL response
#[derive(Debug, Clone, Deserialize)]
pub struct DeepLTranslation {
    /// Language DeepL detected in the source text
    #[serde(default)]
    pub detected_source_language: Option<String>,
    /// The translated text
    pub text: String,
}

/// Translation response from the DeepL v2 API
#[derive(Debug, Clone, Deserialize)]
pub struct DeepLResponse {
    /// Translations, parallel to the request texts
    pub translations: Vec<DeepLTranslation>,
}

/// Error body returned by DeepL on failure
#[derive(Debug, Deserialize)]
struct DeepLErrorBody {
    message: String,
}

impl DeepL {
    /// Create a new client for the given endpoint and key
    pub fn new(endpoint: &str, api_key: String, timeout_secs: u64) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "DeepL requires an API key".to_string(),
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

    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.api_key)
    }
}

#[async_trait]
impl Provider for DeepL {
    type Request = DeepLRequest;
    type Response = DeepLResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let url = format!("{}/v2/translate", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<DeepLErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            // 456 is DeepL's quota-exhausted status
            return Err(error_for_status(status.as_u16(), message));
        }

        let parsed = response
            .json::<DeepLResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        if parsed.translations.is_empty() {
            return Err(ProviderError::ParseError(
                "DeepL returned no translations".to_string(),
            ));
        }

        Ok(parsed)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let url = format!("{}/v2/usage", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
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
            .translations
            .first()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }
}
