use crate::{ElementInstance, ElementType};
use serde::{Deserialize, Serialize};

/// Per-render format selection for a value.
///
/// Any field left `None` is resolved at render time with the precedence:
/// explicit per-instance override → injected per-type global default →
/// the type's built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSpec {
    /// Format id for a single value (`"value"`, `"raw"`, `"link"`, `"custom"`, …).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_format: Option<String>,
    /// Format id for a value collection (`"comma"`, `"ul"`, `"and"`, `"custom"`, …).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_format: Option<String>,
    /// Template used when `item_format` is `"custom"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_template: Option<String>,
    /// Template used when `items_format` is `"custom"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_template: Option<String>,
}

impl FormatSpec {
    /// A spec that resolves everything from instance/global/type defaults.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn item(format: &str) -> Self {
        Self {
            item_format: Some(format.into()),
            ..Self::default()
        }
    }

    pub fn items(format: &str) -> Self {
        Self {
            items_format: Some(format.into()),
            ..Self::default()
        }
    }

    /// Effective single-value format id for this render.
    pub fn resolve_item(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        defaults: &dyn DefaultsProvider,
    ) -> String {
        self.item_format
            .clone()
            .or_else(|| non_empty(instance.property_str("format")))
            .or_else(|| defaults.default_item_format(&ty.id))
            .unwrap_or_else(|| ty.default_item_format.clone())
    }

    /// Effective collection format id for this render.
    pub fn resolve_items(
        &self,
        instance: &ElementInstance,
        ty: &ElementType,
        defaults: &dyn DefaultsProvider,
    ) -> String {
        self.items_format
            .clone()
            .or_else(|| non_empty(instance.property_str("format_items")))
            .or_else(|| defaults.default_items_format(&ty.id))
            .unwrap_or_else(|| ty.default_items_format.clone())
    }

    /// Template for the custom single-value path, falling back to the
    /// instance's `format_item_template` property.
    pub fn resolve_item_template<'a>(&'a self, instance: &'a ElementInstance) -> Option<&'a str> {
        self.item_template
            .as_deref()
            .or_else(|| instance.property_str("format_item_template"))
            .filter(|t| !t.is_empty())
    }

    /// Template for the custom collection path, falling back to the
    /// instance's `format_items_template` property.
    pub fn resolve_items_template<'a>(&'a self, instance: &'a ElementInstance) -> Option<&'a str> {
        self.items_template
            .as_deref()
            .or_else(|| instance.property_str("format_items_template"))
            .filter(|t| !t.is_empty())
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(String::from)
}

/// Injected source of per-type global format defaults.
///
/// The surrounding system's settings tier; modeled as an explicit capability
/// rather than a process-wide settings lookup.
pub trait DefaultsProvider: Send + Sync {
    /// Global default single-value format for a type id, if configured.
    fn default_item_format(&self, type_id: &str) -> Option<String> {
        let _ = type_id;
        None
    }

    /// Global default collection format for a type id, if configured.
    fn default_items_format(&self, type_id: &str) -> Option<String> {
        let _ = type_id;
        None
    }
}

/// Provider with no global configuration; types fall back to their built-ins.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefaults;

impl DefaultsProvider for NoDefaults {}
