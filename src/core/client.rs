//! DeepL translation service

use reqwest::Url;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::config::ApiConfiguration;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{Language, TranslationRequest, TranslationResult};
use crate::core::network::{HttpNetworkClient, NetworkClient};

/// Translation service over an injected [`NetworkClient`]
///
/// Holds no mutable state after construction, so one instance can be shared
/// between concurrent callers.
#[derive(Clone)]
pub struct TranslationService {
    api_key: String,
    api_endpoint: String,
    network_client: Arc<dyn NetworkClient>,
}

impl TranslationService {
    /// Create a new translation service
    ///
    /// Fails with [`TranslationError::InvalidApiKey`] when the configured key
    /// is empty.
    pub fn new(config: &ApiConfiguration, network_client: Arc<dyn NetworkClient>) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(TranslationError::InvalidApiKey);
        }

        Ok(Self {
            api_key: config.api_key.clone(),
            api_endpoint: config.api_endpoint.clone(),
            network_client,
        })
    }

    /// Service backed by a reqwest client built from `config`
    pub fn with_http_client(config: &ApiConfiguration) -> Result<Self> {
        let network_client = HttpNetworkClient::from_config(config)?;
        Self::new(config, Arc::new(network_client))
    }

    /// Create from environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ApiConfiguration::from_env()?;
        Ok(Self::with_http_client(&config)?)
    }

    /// Translate `text` and return only the translated string
    pub async fn translate(
        &self,
        text: &str,
        source_language: Language,
        target_language: Language,
    ) -> Result<String> {
        let request = TranslationRequest::new(text, source_language, target_language);
        let result = self.execute(&request).await?;
        Ok(result.translated_text)
    }

    /// Translate a single request
    pub async fn execute(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        if request.text.is_empty() {
            return Err(TranslationError::EmptyText);
        }

        let url = Url::parse(&self.api_endpoint).map_err(|e| {
            warn!("Invalid translation endpoint {}: {}", self.api_endpoint, e);
            TranslationError::InvalidResponse
        })?;

        debug!(
            "Translating {} chars {} -> {}",
            request.text.chars().count(),
            request.source_language,
            request.target_language
        );

        let response = self
            .network_client
            .perform_request(&url, &request.form_body(), &self.headers())
            .await
            .map_err(|e| {
                warn!("Translation failed: {}", e);
                e
            })?;

        let translation = response.translations.into_iter().next().ok_or_else(|| {
            warn!("Translation response contained no translations");
            TranslationError::InvalidResponse
        })?;

        info!(
            "Translated {} -> {} ({} chars)",
            request.source_language,
            request.target_language,
            translation.text.chars().count()
        );

        Ok(TranslationResult {
            translated_text: translation.text,
            detected_source_language: translation.detected_source_language,
        })
    }

    fn headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(
            "Authorization".to_string(),
            format!("DeepL-Auth-Key {}", self.api_key),
        )])
    }
}

impl fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationService")
            .field("api_key", &"<redacted>")
            .field("api_endpoint", &self.api_endpoint)
            .finish_non_exhaustive()
    }
}
