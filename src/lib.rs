//! BMO Translator - Danish <-> English translation over DeepL
//!
//! This library provides the translation service, its network client
//! abstraction, and a best-effort IPA pronunciation lookup for English words.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::TranslationService,
    config::ApiConfiguration,
    dictionary::{DictionaryClient, HttpDictionaryClient},
    errors::{LookupError, TranslationError},
    models::{DeepLResponse, DictionaryEntry, Language, Phonetic, Translation, TranslationRequest, TranslationResult},
    network::{HttpNetworkClient, NetworkClient},
    pronunciation::{PronunciationCacheKey, PronunciationService},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
