//! Whole-model and single-attribute translation entry points

use tracing::debug;

use crate::core::client::DeeplClient;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::LocalizedAttributeMap;
use crate::model::translatable::Translatable;

/// Translates a model's attributes and persists the result back onto it
#[derive(Debug, Clone)]
pub struct ModelTranslator {
    client: DeeplClient,
}

impl ModelTranslator {
    /// Create a new model translator
    pub fn new(client: DeeplClient) -> Self {
        Self { client }
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(DeeplClient::from_env()?))
    }

    /// The underlying translation client
    pub fn client(&self) -> &DeeplClient {
        &self.client
    }

    /// Translate every non-empty translatable attribute of `model` into
    /// `target_lang` and persist the resulting bundle.
    ///
    /// Attributes are translated sequentially in declared order; empty
    /// values are skipped entirely (no request, no map entry). The update
    /// is a single call carrying `target_lang` as its only top-level key,
    /// so the whole per-language bundle is written at once; any failure
    /// beforehand aborts the operation with nothing persisted.
    pub async fn translate_model<M>(
        &self,
        model: &mut M,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<()>
    where
        M: Translatable + Send,
    {
        let mut translations = LocalizedAttributeMap::new(target_lang);

        for attribute in model.translated_attributes() {
            let value = match model.attribute(&attribute) {
                Some(value) if !value.is_empty() => value,
                // empty fields are not worth a request
                _ => continue,
            };

            let translated = self
                .client
                .translate_text(&value, target_lang, source_lang)
                .await?;
            translations.insert(attribute, translated);
        }

        debug!(
            "Translated {} attributes to {}",
            translations.len(),
            translations.locale()
        );

        model.update(translations).await
    }

    /// Translate a single named attribute of `model` and persist it.
    ///
    /// Unlike [`translate_model`](Self::translate_model), an empty value
    /// is not skipped; it is sent to the endpoint as-is. An attribute the
    /// model does not expose fails before any request is made.
    pub async fn translate_model_attribute<M>(
        &self,
        model: &mut M,
        attr: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<()>
    where
        M: Translatable + Send,
    {
        let value = model
            .attribute(attr)
            .ok_or_else(|| TranslationError::UnknownAttribute {
                attribute: attr.to_string(),
            })?;

        let translated = self
            .client
            .translate_text(&value, target_lang, source_lang)
            .await?;

        let mut translations = LocalizedAttributeMap::new(target_lang);
        translations.insert(attr, translated);

        model.update(translations).await
    }
}
