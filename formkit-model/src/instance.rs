use crate::ElementType;
use crate::value::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One configured field or container in a form definition.
///
/// Produced by the form definition parser; `properties` overrides and extends
/// the type's resolved defaults. Unknown property keys are preserved opaquely
/// so definitions round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementInstance {
    #[serde(rename = "type")]
    pub type_id: String,
    pub key: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    /// Ordered children, only meaningful when the resolved type is a container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementInstance>,
}

impl ElementInstance {
    pub fn new(type_id: &str, key: &str) -> Self {
        Self {
            type_id: type_id.into(),
            key: key.into(),
            properties: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: &str, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn with_children(mut self, children: Vec<ElementInstance>) -> Self {
        self.children = children;
        self
    }

    /// Raw instance-level property lookup. `None` means undefined, which is
    /// distinct from a property explicitly set to `null`.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// String property accessor.
    pub fn property_str(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(|v| v.as_str())
    }

    /// Boolean-ish property accessor: truthiness of whatever is stored.
    pub fn property_truthy(&self, name: &str) -> Option<bool> {
        self.property(name).map(is_truthy)
    }

    /// The label used in administrative listings and selector labels:
    /// `admin_title`, falling back to `title`, falling back to the key.
    pub fn admin_label(&self) -> &str {
        self.property_str("admin_title")
            .filter(|s| !s.is_empty())
            .or_else(|| self.property_str("title").filter(|s| !s.is_empty()))
            .unwrap_or(&self.key)
    }

    /// Effective multiple-value flag: the instance's `multiple` property when
    /// set, otherwise the type's declared default. A type that supports
    /// neither a value list nor the list wrapper is never multiple.
    pub fn has_multiple(&self, ty: &ElementType) -> bool {
        if !ty.caps.supports_multiple && !ty.caps.states_wrapper {
            return false;
        }
        match self.property("multiple") {
            Some(v) => is_truthy(v),
            None => ty
                .default_properties
                .get("multiple")
                .map(is_truthy)
                .unwrap_or(false),
        }
    }
}
