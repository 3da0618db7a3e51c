//! Async client for the DeepL translation endpoint

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationRequest, TranslationResponse};
use crate::core::sanitize::strip_tags;

/// Translation client. One round trip per call, no retries, no caching.
#[derive(Debug, Clone)]
pub struct DeeplClient {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl DeeplClient {
    /// Create a new client from a validated configuration
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env()?;
        Self::new(config)
    }

    /// The active configuration
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a single request
    ///
    /// Markup outside the allow-list is stripped from the source text and
    /// language codes are uppercased before transmission. A request without
    /// a source language falls back to the configured source locale.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let source_language = request
            .source_lang
            .as_deref()
            .unwrap_or(&self.config.fallback_source_locale)
            .to_uppercase();
        let target_lang = request.target_lang.to_uppercase();
        let text = strip_tags(&request.text);

        debug!(
            "Requesting translation {} -> {} ({} chars)",
            source_language,
            target_lang,
            text.len()
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .query(&[
                ("auth_key", self.config.api_token.as_str()),
                ("text", text.as_str()),
                ("source_language", source_language.as_str()),
                ("target_lang", target_lang.as_str()),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: TranslationResponse =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        let translation = body.translations.into_iter().next().ok_or_else(|| {
            TranslationError::InvalidResponseError {
                message: "No translation in response".to_string(),
            }
        })?;

        Ok(translation.text)
    }

    /// Translate a plain string to a target language
    pub async fn translate_text(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<String> {
        let mut request = TranslationRequest::new(text, target_lang);
        if let Some(source_lang) = source_lang {
            request = request.with_source_lang(source_lang);
        }

        self.translate(&request).await
    }
}
