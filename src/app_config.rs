use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    pub source_language: String,

    /// Target language code (ISO)
    pub target_language: String,

    /// Translation config
    pub translation: TranslationConfig,

    /// Masking config
    #[serde(default)]
    pub masking: MaskingConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: LibreTranslate (self-hosted, keyless)
    #[default]
    LibreTranslate,
    // @provider: DeepL
    DeepL,
    // @provider: Google Cloud Translation v2
    Google,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::LibreTranslate => "LibreTranslate",
            Self::DeepL => "DeepL",
            Self::Google => "Google Translate",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::LibreTranslate => "libretranslate".to_string(),
            Self::DeepL => "deepl".to_string(),
            Self::Google => "google".to_string(),
        }
    }
}

// Implement Display trait for TranslationProvider
impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProvider
impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "libretranslate" => Ok(Self::LibreTranslate),
            "deepl" => Ok(Self::DeepL),
            "google" => Ok(Self::Google),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Max chars per request
    #[serde(default = "default_max_chars_per_request")]
    pub max_chars_per_request: usize,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TranslationProvider) -> Self {
        match provider_type {
            TranslationProvider::LibreTranslate => Self {
                provider_type: "libretranslate".to_string(),
                api_key: String::new(),
                endpoint: default_libretranslate_endpoint(),
                max_chars_per_request: default_max_chars_per_request(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::DeepL => Self {
                provider_type: "deepl".to_string(),
                api_key: String::new(),
                endpoint: default_deepl_endpoint(),
                max_chars_per_request: default_deepl_max_chars_per_request(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::Google => Self {
                provider_type: "google".to_string(),
                api_key: String::new(),
                endpoint: default_google_endpoint(),
                max_chars_per_request: default_google_max_chars_per_request(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Available translation providers
    #[serde(default)]
    pub available_providers: Vec<ProviderConfig>,

    /// Common translation settings
    #[serde(default)]
    pub common: TranslationCommonConfig,
}

/// Common translation settings applicable to all providers
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationCommonConfig {
    /// Delay in milliseconds between consecutive requests.
    /// Zero disables the pause. Requests are always sequential either way.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

impl Default for TranslationCommonConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

/// Configuration for protected-span masking and header handling
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MaskingConfig {
    /// Terms that must survive translation unchanged (proper nouns, brands,
    /// technical identifiers). Matched case-insensitively, whole-word unless
    /// the term contains non-word characters.
    #[serde(default = "default_frozen_terms")]
    pub frozen_terms: Vec<String>,

    /// Front-matter keys whose values are never translated (URLs, paths,
    /// identifiers).
    #[serde(default = "default_skip_header_keys")]
    pub skip_header_keys: Vec<String>,
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            frozen_terms: default_frozen_terms(),
            skip_header_keys: default_skip_header_keys(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_max_chars_per_request() -> usize {
    // LibreTranslate instances commonly cap requests at 5000 characters;
    // stay under it with margin for transport re-encoding.
    4800
}

fn default_deepl_max_chars_per_request() -> usize {
    30000
}

fn default_google_max_chars_per_request() -> usize {
    12000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_request_delay_ms() -> u64 {
    0
}

fn default_libretranslate_endpoint() -> String {
    "http://localhost:5000".to_string()
}

fn default_deepl_endpoint() -> String {
    "https://api-free.deepl.com".to_string()
}

fn default_google_endpoint() -> String {
    "https://translation.googleapis.com".to_string()
}

fn default_frozen_terms() -> Vec<String> {
    // Proper nouns and technical identifiers that machine translation keeps
    // mangling when left unprotected.
    [
        "Leaflet",
        "OpenStreetMap",
        "GitHub",
        "JavaScript",
        "TypeScript",
        "Next.js",
        "Markdown",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_skip_header_keys() -> Vec<String> {
    [
        "slug",
        "url",
        "permalink",
        "image",
        "cover",
        "thumbnail",
        "layout",
        "aliases",
        "redirect_from",
        "canonical",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        if self.source_language.eq_ignore_ascii_case(&self.target_language) {
            return Err(anyhow!(
                "Source and target language are both '{}'",
                self.source_language
            ));
        }

        // Validate API key for keyed providers
        match self.translation.provider {
            TranslationProvider::DeepL => {
                if self.translation.get_api_key().is_empty() {
                    return Err(anyhow!("Translation API key is required for DeepL provider"));
                }
            }
            TranslationProvider::Google => {
                if self.translation.get_api_key().is_empty() {
                    return Err(anyhow!(
                        "Translation API key is required for Google Translate provider"
                    ));
                }
            }
            TranslationProvider::LibreTranslate => {}
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "it".to_string(),
            target_language: "en".to_string(),
            translation: TranslationConfig::default(),
            masking: MaskingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl TranslationConfig {
    /// Get the active provider configuration from the available_providers array
    pub fn get_active_provider_config(&self) -> Option<&ProviderConfig> {
        let provider_str = self.provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get a specific provider configuration by type for testing
    pub fn get_provider_config(&self, provider_type: &TranslationProvider) -> Option<&ProviderConfig> {
        let provider_str = provider_type.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get the API key for the active provider
    pub fn get_api_key(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.api_key.is_empty() {
                return provider_config.api_key.clone();
            }
        }

        // Default fallback - LibreTranslate doesn't require API keys
        String::new()
    }

    /// Get the endpoint for the active provider
    pub fn get_endpoint(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.endpoint.is_empty() {
                return provider_config.endpoint.clone();
            }
        }

        // Default fallback based on provider type
        match self.provider {
            TranslationProvider::LibreTranslate => default_libretranslate_endpoint(),
            TranslationProvider::DeepL => default_deepl_endpoint(),
            TranslationProvider::Google => default_google_endpoint(),
        }
    }

    /// Get the max chars per request for the active provider
    pub fn get_max_chars_per_request(&self) -> usize {
        if let Some(provider_config) = self.get_active_provider_config() {
            if provider_config.max_chars_per_request > 0 {
                return provider_config.max_chars_per_request;
            }
        }

        // Default fallback based on provider type
        match self.provider {
            TranslationProvider::LibreTranslate => default_max_chars_per_request(),
            TranslationProvider::DeepL => default_deepl_max_chars_per_request(),
            TranslationProvider::Google => default_google_max_chars_per_request(),
        }
    }

    /// Get the request timeout for the active provider
    pub fn get_timeout_secs(&self) -> u64 {
        if let Some(provider_config) = self.get_active_provider_config() {
            if provider_config.timeout_secs > 0 {
                return provider_config.timeout_secs;
            }
        }

        default_timeout_secs()
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        let mut config = Self {
            provider: TranslationProvider::default(),
            available_providers: Vec::new(),
            common: TranslationCommonConfig::default(),
        };

        // Add default providers
        config
            .available_providers
            .push(ProviderConfig::new(TranslationProvider::LibreTranslate));
        config
            .available_providers
            .push(ProviderConfig::new(TranslationProvider::DeepL));
        config
            .available_providers
            .push(ProviderConfig::new(TranslationProvider::Google));

        config
    }
}
