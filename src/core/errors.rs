//! Error types for translation and dictionary lookups

use thiserror::Error;

/// Translation-related errors
///
/// This is the complete set of failures a caller of
/// [`TranslationService`](crate::core::client::TranslationService) can observe.
/// Transport-specific errors never leak past it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationError {
    /// Nothing to translate
    #[error("Text to translate is empty")]
    EmptyText,

    /// Missing API key, or the endpoint rejected it (HTTP 403)
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Transport failure: connection refused, DNS, timeout, offline
    #[error("Network error")]
    NetworkError,

    /// Character quota exhausted (HTTP 456)
    #[error("Translation quota exceeded")]
    QuotaExceeded,

    /// Malformed or unexpected payload, or any unclassified failure
    #[error("Invalid response from translation service")]
    InvalidResponse,
}

impl TranslationError {
    /// Message suitable for showing to the person who asked for the translation
    pub fn user_message(&self) -> &'static str {
        match self {
            TranslationError::EmptyText => "Please enter some text to translate",
            TranslationError::InvalidApiKey => "Invalid API key. Please check your DeepL API key.",
            TranslationError::NetworkError => "Network error. Please check your internet connection.",
            TranslationError::QuotaExceeded => "Translation quota exceeded. Please try again later.",
            TranslationError::InvalidResponse => "Invalid response from translation service.",
        }
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() {
            TranslationError::InvalidResponse
        } else {
            TranslationError::NetworkError
        }
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(_: serde_json::Error) -> Self {
        TranslationError::InvalidResponse
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

/// Failure of a single dictionary lookup
///
/// Only used for diagnostics: the pronunciation service logs these and
/// degrades to "no pronunciation".
#[derive(Error, Debug)]
pub enum LookupError {
    /// The word could not be turned into a request URL
    #[error("Invalid lookup URL: {message}")]
    InvalidUrl {
        /// Why the URL could not be built
        message: String,
    },

    /// Endpoint answered with a non-success status
    #[error("Dictionary returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Request never completed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not a list of dictionary entries
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
