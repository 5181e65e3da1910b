//! Configuration management

use std::fmt;
use std::time::Duration;
use tracing::info;

/// Default DeepL free-tier endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

/// Default dictionaryapi.dev endpoint for English entries
pub const DEFAULT_DICTIONARY_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Configuration for the translation and pronunciation services
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfiguration {
    /// DeepL authentication key; never logged
    pub api_key: String,
    /// DeepL translate URL
    pub api_endpoint: String,
    /// Dictionary URL the looked-up word is appended to
    pub dictionary_endpoint: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ApiConfiguration {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            dictionary_endpoint: DEFAULT_DICTIONARY_ENDPOINT.to_string(),
            timeout_ms: 30000,
        }
    }
}

impl fmt::Debug for ApiConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfiguration")
            .field("api_key", &"<redacted>")
            .field("api_endpoint", &self.api_endpoint)
            .field("dictionary_endpoint", &self.dictionary_endpoint)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl ApiConfiguration {
    /// Explicit endpoint and key, everything else default
    pub fn custom(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_endpoint: base_url.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self::read_env()?;
        if config.api_key.is_empty() {
            return Err(anyhow::anyhow!("DEEPL_API_KEY environment variable is required"));
        }
        config.validate()?;

        info!("Loaded configuration for endpoint {}", config.api_endpoint);
        Ok(config)
    }

    /// Like [`from_env`](Self::from_env), but the API key may be missing
    ///
    /// Enough for dictionary lookups, which need no credentials.
    pub fn from_env_without_key() -> anyhow::Result<Self> {
        let config = Self::read_env()?;
        config.validate_endpoints()?;
        Ok(config)
    }

    fn read_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("DEEPL_API_KEY").unwrap_or_default();

        let api_endpoint = std::env::var("DEEPL_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

        let dictionary_endpoint = std::env::var("DICTIONARY_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_DICTIONARY_ENDPOINT.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        Ok(Self {
            api_key,
            api_endpoint,
            dictionary_endpoint,
            timeout_ms,
        })
    }

    /// Replace the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            return Err(anyhow::anyhow!("API key is required"));
        }

        self.validate_endpoints()
    }

    /// Validate everything except the API key
    pub fn validate_endpoints(&self) -> anyhow::Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.dictionary_endpoint.is_empty() {
            return Err(anyhow::anyhow!("Dictionary endpoint is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = ApiConfiguration::custom("https://test.com", "test_key");
        assert!(config.validate().is_ok());
        assert_eq!(config.dictionary_endpoint, DEFAULT_DICTIONARY_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_validation_missing_key() {
        let config = ApiConfiguration::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = ApiConfiguration {
            timeout_ms: 0,
            ..ApiConfiguration::custom(DEFAULT_API_ENDPOINT, "key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_validation_ignores_key() {
        let config = ApiConfiguration::default();
        assert!(config.validate_endpoints().is_ok());

        let config = ApiConfiguration {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate_endpoints().is_err());

        let config = ApiConfiguration {
            dictionary_endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate_endpoints().is_err());
    }

    const ENV_VARS: [&str; 4] = [
        "DEEPL_API_KEY",
        "DEEPL_API_ENDPOINT",
        "DICTIONARY_API_ENDPOINT",
        "REQUEST_TIMEOUT_MS",
    ];

    fn clear_env() {
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
    }

    // Single test so the steps never race on the process environment
    #[test]
    fn test_from_env() {
        let saved: Vec<_> = ENV_VARS.iter().map(|name| (*name, std::env::var(name).ok())).collect();

        clear_env();
        assert!(ApiConfiguration::from_env().is_err());

        std::env::set_var("DEEPL_API_KEY", "");
        assert!(ApiConfiguration::from_env().is_err());

        std::env::set_var("DEEPL_API_KEY", "env-key");
        let config = ApiConfiguration::from_env().unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.dictionary_endpoint, DEFAULT_DICTIONARY_ENDPOINT);
        assert_eq!(config.timeout_ms, 30000);

        std::env::set_var("DEEPL_API_ENDPOINT", "https://api.deepl.com/v2/translate");
        std::env::set_var("DICTIONARY_API_ENDPOINT", "http://localhost:9000/entries/en");
        std::env::set_var("REQUEST_TIMEOUT_MS", "1500");
        let config = ApiConfiguration::from_env().unwrap();
        assert_eq!(config.api_endpoint, "https://api.deepl.com/v2/translate");
        assert_eq!(config.dictionary_endpoint, "http://localhost:9000/entries/en");
        assert_eq!(config.timeout(), Duration::from_millis(1500));

        std::env::set_var("REQUEST_TIMEOUT_MS", "soon");
        assert!(ApiConfiguration::from_env().is_err());

        // Dictionary-only configuration needs no key but still checks the rest
        std::env::remove_var("DEEPL_API_KEY");
        std::env::set_var("REQUEST_TIMEOUT_MS", "0");
        assert!(ApiConfiguration::from_env_without_key().is_err());

        std::env::set_var("REQUEST_TIMEOUT_MS", "1500");
        let config = ApiConfiguration::from_env_without_key().unwrap();
        assert!(config.api_key.is_empty());
        assert_eq!(config.dictionary_endpoint, "http://localhost:9000/entries/en");

        clear_env();
        for (name, value) in saved {
            if let Some(value) = value {
                std::env::set_var(name, value);
            }
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ApiConfiguration::default().with_api_key("super-secret-key");
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
