use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Capability flags for an element type.
///
/// Every other subsystem keys its behavior off these flags rather than off
/// concrete type ids: the formatting engine gates the multiple-value path,
/// the property model picks a base property set, and the selector generator
/// decides how many addressable inputs a type exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// The element holds children instead of a value (fieldset, container).
    pub container: bool,
    /// The element's value is a map of named, independently typed parts.
    pub composite: bool,
    /// The element may only appear at the root of a form definition.
    pub root: bool,
    /// The element is not offered in type listings (internal/placeholder types).
    pub hidden: bool,
    /// Default multiline rendering (textarea-like types).
    pub multiline: bool,
    /// The element's value may be a list without any wrapper rewrite
    /// (checkboxes, multi-select).
    pub supports_multiple: bool,
    /// The element supports the repeatable-list wrapper rewrite; when an
    /// instance is wrapped, its inputs stop being individually addressable.
    pub states_wrapper: bool,
    /// The element holds a value but has no visible presentation of its own
    /// (`value`, `hidden`). Selects the minimal value-only property base.
    pub bare_value: bool,
    /// The element renders static markup and stores nothing.
    pub markup: bool,
}

/// Which base property set a type inherits before its own defaults are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyBase {
    /// Full title/description/format base shared by ordinary input types.
    Standard,
    /// Minimal base for plain value holders.
    Value,
    /// Minimal base for markup-only types.
    Markup,
    /// Composite base (parts carry their own titles).
    Composite,
}

/// A declared sub-input of a type that exposes several inputs for one value
/// (datelist day/month/year, datetime date/time, select-other select/other).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubInput {
    pub key: String,
    pub label: String,
}

impl SubInput {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A named, independently typed part of a composite element.
///
/// Part access and requiredness are structured fields here, never
/// `<key>__access`-style synthesized property names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositePart {
    pub key: String,
    pub title: String,
    /// Type id of the part's own element type (typically a simple scalar type).
    pub type_id: String,
    #[serde(default = "default_true")]
    pub accessible: bool,
    #[serde(default)]
    pub required: bool,
    /// The part is a hybrid select-with-custom-other input, which exposes two
    /// addressable inputs (`[select]` and `[other]`) instead of one.
    #[serde(default)]
    pub select_other: bool,
}

fn default_true() -> bool {
    true
}

impl CompositePart {
    pub fn new(key: &str, title: &str, type_id: &str) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            type_id: type_id.into(),
            accessible: true,
            required: false,
            select_other: false,
        }
    }

    /// Marks the part as a hybrid select-or-other input.
    pub fn with_other(mut self) -> Self {
        self.select_other = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.accessible = false;
        self
    }
}

/// The shared, registered behavior/capability descriptor for a kind of element.
///
/// Constructed once at registry build time and never mutated afterwards;
/// instances reference it through the registry as `Arc<ElementType>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementType {
    pub id: String,
    pub label: String,
    pub category: String,
    pub caps: Capabilities,
    /// Type-declared defaults, layered over the capability-selected base set.
    #[serde(default)]
    pub default_properties: Map<String, Value>,
    /// Declared sub-inputs, for types whose single value is entered through
    /// several inputs.
    #[serde(default)]
    pub sub_inputs: Vec<SubInput>,
    /// Ordered parts, only meaningful when `caps.composite`.
    #[serde(default)]
    pub composite_parts: Vec<CompositePart>,
    /// Extra item format ids this type understands beyond `"value"`/`"raw"`.
    #[serde(default)]
    pub item_formats: Vec<String>,
    pub default_item_format: String,
    pub default_items_format: String,
    /// Keys removed from the resolved default map after merging. Lets a type
    /// suppress inherited base properties without per-type branching in the
    /// property model.
    #[serde(default)]
    pub suppressed_properties: Vec<String>,
}

impl ElementType {
    /// Creates a type with standard capabilities and format defaults.
    pub fn new(id: &str, label: &str, category: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: category.into(),
            caps: Capabilities::default(),
            default_properties: Map::new(),
            sub_inputs: Vec::new(),
            composite_parts: Vec::new(),
            item_formats: Vec::new(),
            default_item_format: "value".into(),
            default_items_format: "ul".into(),
            suppressed_properties: Vec::new(),
        }
    }

    pub fn with_caps(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    pub fn with_default(mut self, key: &str, value: Value) -> Self {
        self.default_properties.insert(key.into(), value);
        self
    }

    pub fn with_sub_inputs(mut self, sub_inputs: Vec<SubInput>) -> Self {
        self.sub_inputs = sub_inputs;
        self
    }

    pub fn with_parts(mut self, parts: Vec<CompositePart>) -> Self {
        self.caps.composite = true;
        self.composite_parts = parts;
        self
    }

    pub fn with_item_formats(mut self, formats: &[&str]) -> Self {
        self.item_formats = formats.iter().map(|f| (*f).into()).collect();
        self
    }

    pub fn with_default_item_format(mut self, format: &str) -> Self {
        self.default_item_format = format.into();
        self
    }

    pub fn suppressing(mut self, keys: &[&str]) -> Self {
        self.suppressed_properties = keys.iter().map(|k| (*k).into()).collect();
        self
    }

    /// Which base property set this type inherits, selected by capability
    /// flags (never by concrete type id).
    pub fn property_base(&self) -> PropertyBase {
        if self.caps.composite {
            PropertyBase::Composite
        } else if self.caps.markup {
            PropertyBase::Markup
        } else if self.caps.bare_value {
            PropertyBase::Value
        } else {
            PropertyBase::Standard
        }
    }

    /// Whether `format` is a recognized item format id for this type.
    pub fn knows_item_format(&self, format: &str) -> bool {
        format == "value"
            || format == "raw"
            || format == "custom"
            || self.item_formats.iter().any(|f| f == format)
    }
}
