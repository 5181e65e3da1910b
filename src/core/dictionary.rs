//! Dictionary lookups against dictionaryapi.dev

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Url;
use tracing::debug;

use crate::core::config::ApiConfiguration;
use crate::core::errors::LookupError;
use crate::core::models::DictionaryEntry;

/// Capability to fetch the dictionary entries of one word
#[async_trait]
pub trait DictionaryClient: Send + Sync {
    /// All entries the dictionary has for `word`
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError>;
}

/// [`DictionaryClient`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpDictionaryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDictionaryClient {
    /// Client for `endpoint`, which the word is appended to
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Build a client for the configured dictionary endpoint
    pub fn from_config(config: &ApiConfiguration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self::new(client, config.dictionary_endpoint.clone()))
    }

    /// Endpoint URL with `word` appended as a percent-encoded path segment
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| LookupError::InvalidUrl {
            message: e.to_string(),
        })?;

        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl {
                message: format!("{} cannot be a base URL", self.endpoint),
            })?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }
}

#[async_trait]
impl DictionaryClient for HttpDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let url = self.entry_url(word)?;
        debug!("Dictionary lookup: {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
