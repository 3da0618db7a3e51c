//! Capability contract for models with translatable attributes

use async_trait::async_trait;

use crate::core::errors::Result;
use crate::core::models::LocalizedAttributeMap;

/// Capability a persisted model must provide to be machine-translated.
///
/// Implementing this trait is the admission ticket: the translation entry
/// points are generic over `Translatable`, so a model without the
/// capability is rejected at compile time, before any network activity.
#[async_trait]
pub trait Translatable {
    /// Names of the attributes eligible for translation, in declared order.
    ///
    /// Attributes are translated one at a time in exactly this order.
    fn translated_attributes(&self) -> Vec<String>;

    /// Read the current value of a single attribute by name
    fn attribute(&self, name: &str) -> Option<String>;

    /// Persist a per-language attribute bundle onto the model.
    ///
    /// The bundle carries a single locale key with the full attribute map
    /// beneath it (see [`LocalizedAttributeMap`]). Whether the host
    /// storage merges or replaces at the attribute level under that key is
    /// owned by the host persistence layer, not by this crate.
    async fn update(&mut self, translations: LocalizedAttributeMap) -> Result<()>;
}
