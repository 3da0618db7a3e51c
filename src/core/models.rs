//! Core data models for translation

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: None,
            target_lang: target_lang.into(),
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }
}

/// One translated item in an API response
#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub text: String,
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

/// Response body returned by the translation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponse {
    pub translations: Vec<Translation>,
}

/// Per-language bundle of attribute name to translated value.
///
/// Serializes to the nested persistence shape expected by locale-aware
/// model storage, with the locale as the single top-level key:
///
/// ```json
/// { "de": { "title": "Hallo", "body": "Welt" } }
/// ```
///
/// Insertion order of attributes is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedAttributeMap {
    locale: String,
    attributes: IndexMap<String, String>,
}

impl LocalizedAttributeMap {
    /// Create an empty bundle for a target locale
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Target locale this bundle is keyed under
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Add a translated attribute value
    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(attribute.into(), value.into());
    }

    /// Look up a translated value by attribute name
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    /// Attribute names in insertion order
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Serialize for LocalizedAttributeMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.locale, &self.attributes)?;
        map.end()
    }
}
