//! Universal form element model for formkit.
//!
//! Defines the types that every other formkit subsystem depends on:
//! - [`ElementType`] — the shared, registered capability descriptor for a kind of element
//! - [`ElementInstance`] — one configured field/container in a form definition
//! - [`Shape`] — defensive classification of a stored value against a type's capabilities
//! - [`FormatSpec`] — per-render item/items format selection with layered defaults
//! - [`Selector`] — an addressable input identifier for conditional show/hide logic
//!
//! Property maps and stored values are `serde_json` values throughout; the
//! surrounding system owns (de)serialization to whatever its config format is.

mod element_type;
mod format_spec;
mod instance;
mod selector;
mod value;

pub use element_type::{Capabilities, CompositePart, ElementType, PropertyBase, SubInput};
pub use format_spec::{DefaultsProvider, FormatSpec, NoDefaults};
pub use instance::ElementInstance;
pub use selector::Selector;
pub use value::{Shape, is_empty_value, is_truthy};
