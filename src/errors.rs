/*!
 * Error types for the mdtrans application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with translation backend APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting or quota exhaustion
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The backend returned an empty translation for non-empty input
    #[error("Empty translation returned for non-empty input")]
    EmptyTranslation,
}

/// Errors that can occur while parsing or rendering a Markdown document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// A front-matter block was opened but never closed
    #[error("Front matter opened with '---' but never closed")]
    UnterminatedFrontMatter,

    /// The front-matter block is not a valid YAML mapping
    #[error("Invalid front matter: {0}")]
    InvalidFrontMatter(String),

    /// The header could not be re-serialized as YAML
    #[error("Failed to serialize header: {0}")]
    HeaderSerialization(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the backend API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error with document handling
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// A masking rule could not be compiled
    #[error("Invalid masking rule: {0}")]
    InvalidMaskingRule(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a backend
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from document handling
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
