//! Network client abstraction and its reqwest implementation

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::core::config::ApiConfiguration;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::DeepLResponse;

/// HTTP status DeepL uses for an exhausted character quota
pub const STATUS_QUOTA_EXCEEDED: u16 = 456;

/// Capability to send one form-encoded translation request
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// POST `form` to `url` with `headers` and decode the DeepL response
    async fn perform_request(
        &self,
        url: &Url,
        form: &BTreeMap<String, String>,
        headers: &BTreeMap<String, String>,
    ) -> Result<DeepLResponse>;
}

/// Map an HTTP status onto the translation error taxonomy
///
/// `Ok(())` means the body should be decoded.
pub fn check_status(status: StatusCode) -> Result<()> {
    match status.as_u16() {
        200..=299 => Ok(()),
        403 => Err(TranslationError::InvalidApiKey),
        STATUS_QUOTA_EXCEEDED => Err(TranslationError::QuotaExceeded),
        _ => Err(TranslationError::InvalidResponse),
    }
}

/// [`NetworkClient`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpNetworkClient {
    client: reqwest::Client,
}

impl HttpNetworkClient {
    /// Wrap an existing reqwest client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client honouring the configured timeout
    pub fn from_config(config: &ApiConfiguration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self::new(client))
    }
}

#[async_trait]
impl NetworkClient for HttpNetworkClient {
    async fn perform_request(
        &self,
        url: &Url,
        form: &BTreeMap<String, String>,
        headers: &BTreeMap<String, String>,
    ) -> Result<DeepLResponse> {
        let mut request = self.client.post(url.clone()).form(form);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            warn!("Translation request failed before a response: {}", e);
            TranslationError::from(e)
        })?;

        let status = response.status();
        debug!("Translation endpoint answered {}", status);
        check_status(status)?;

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read translation response body: {}", e);
            TranslationError::NetworkError
        })?;

        Ok(serde_json::from_slice::<DeepLResponse>(&body)?)
    }
}
