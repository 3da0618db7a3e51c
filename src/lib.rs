//! DeepL Translator - translate persisted model attributes
//!
//! This library translates the translatable attributes of a host
//! application's models through the DeepL HTTP API and writes the results
//! back as per-language attribute bundles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod model;

// Re-export key types for convenience
pub use crate::core::{
    client::DeeplClient,
    config::TranslatorConfig,
    errors::{Result, TranslationError},
    models::{LocalizedAttributeMap, Translation, TranslationRequest, TranslationResponse},
};

pub use crate::model::{translatable::Translatable, translator::ModelTranslator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
