//! Configuration management

use serde::{Deserialize, Serialize};

/// Configuration for the translation client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub api_url: String,
    pub api_token: String,
    pub fallback_source_locale: String,
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: std::env::var("DEEPL_API_URL")
                .unwrap_or_else(|_| "https://api.deepl.com/v2/translate".to_string()),
            api_token: std::env::var("DEEPL_API_TOKEN").unwrap_or_default(),
            fallback_source_locale: std::env::var("FALLBACK_SOURCE_LOCALE")
                .unwrap_or_else(|_| "en".to_string()),
            timeout_ms: 30000,
        }
    }
}

impl TranslatorConfig {
    /// Create a configuration with explicit endpoint and credential
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_token: api_token.into(),
            ..Default::default()
        }
    }

    /// Set the fallback source locale used when a request omits one
    pub fn with_fallback_source_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_source_locale = locale.into();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let api_token = std::env::var("DEEPL_API_TOKEN")
            .map_err(|_| anyhow::anyhow!("DEEPL_API_TOKEN environment variable is required"))?;

        let api_url = std::env::var("DEEPL_API_URL")
            .unwrap_or_else(|_| "https://api.deepl.com/v2/translate".to_string());

        let fallback_source_locale = std::env::var("FALLBACK_SOURCE_LOCALE")
            .unwrap_or_else(|_| "en".to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        Ok(Self {
            api_url,
            api_token,
            fallback_source_locale,
            timeout_ms,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_token.is_empty() {
            return Err(anyhow::anyhow!("API token is required"));
        }

        if self.api_url.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.fallback_source_locale.is_empty() {
            return Err(anyhow::anyhow!("fallback source locale is required"));
        }

        Ok(())
    }
}
