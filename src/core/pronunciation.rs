//! IPA pronunciation lookup with an in-process cache

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::core::config::ApiConfiguration;
use crate::core::dictionary::{DictionaryClient, HttpDictionaryClient};
use crate::core::errors::LookupError;
use crate::core::models::Language;

/// Cache key: language plus the lowercased first word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PronunciationCacheKey {
    /// Language the word belongs to
    pub language: Language,
    /// Lowercased first word
    pub word: String,
}

impl PronunciationCacheKey {
    /// Key for the first word of `text`, or `None` when there is no word
    pub fn for_text(text: &str, language: Language) -> Option<Self> {
        first_word(text).map(|word| Self {
            language,
            word: word.to_lowercase(),
        })
    }
}

impl fmt::Display for PronunciationCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.language.code(), self.word)
    }
}

/// First whitespace-delimited token of the trimmed text
fn first_word(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Best-effort pronunciation lookup
///
/// Only English is looked up. Every failure degrades to `None`; the cause is
/// logged at debug level.
#[derive(Clone)]
pub struct PronunciationService {
    dictionary: Arc<dyn DictionaryClient>,
    cache: Arc<RwLock<HashMap<PronunciationCacheKey, String>>>,
}

impl PronunciationService {
    /// Service with an empty cache over `dictionary`
    pub fn new(dictionary: Arc<dyn DictionaryClient>) -> Self {
        Self {
            dictionary,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Service talking to the configured dictionary endpoint
    pub fn with_http_client(config: &ApiConfiguration) -> Result<Self, LookupError> {
        let dictionary = HttpDictionaryClient::from_config(config)?;
        Ok(Self::new(Arc::new(dictionary)))
    }

    /// IPA transcription of the first word of `text`, if one is available
    pub async fn fetch_pronunciation(&self, text: &str, language: Language) -> Option<String> {
        if language != Language::English {
            return None;
        }

        let key = PronunciationCacheKey::for_text(text, language)?;

        if let Some(cached) = self.cache.read().await.get(&key) {
            debug!("Pronunciation cache hit for {}", key);
            return Some(cached.clone());
        }
        debug!("Pronunciation cache miss for {}", key);

        let entries = match self.dictionary.lookup(&key.word).await {
            Ok(entries) => entries,
            Err(e) => {
                debug!("No pronunciation for {}: {}", key, e);
                return None;
            }
        };

        let Some(ipa) = entries
            .first()
            .and_then(|entry| entry.first_transcription())
            .map(str::to_string)
        else {
            debug!("No transcription in dictionary entries for {}", key);
            return None;
        };

        self.cache.write().await.insert(key, ipa.clone());
        Some(ipa)
    }

    /// Cached transcription for `text`, without any lookup
    pub async fn cached(&self, text: &str, language: Language) -> Option<String> {
        let key = PronunciationCacheKey::for_text(text, language)?;
        self.cache.read().await.get(&key).cloned()
    }

    /// Number of cached transcriptions
    pub async fn cache_len(&self) -> usize {
        self.cache.read().await.len()
    }
}

impl fmt::Debug for PronunciationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PronunciationService").finish_non_exhaustive()
    }
}
