//! The property model: effective default maps per element type.
//!
//! Every non-exempt type shares a base property set (administrative metadata,
//! access-rule fields, flex-layout weight, conditional-logic container) plus
//! the generic title/description/format display set. Three families are
//! exempt from the display set and substitute a minimal base of their own:
//! plain value holders, markup-only types, and composites. The family is
//! selected by capability flags, never by concrete type id.

use formkit_model::{ElementType, PropertyBase};
use serde_json::{Map, Value, json};

/// Administrative/access/layout/conditional base shared by every type.
fn shared_base() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("admin_title".into(), json!(""));
    map.insert("admin_notes".into(), json!(""));
    map.insert("private".into(), json!(false));
    map.insert("access_create".into(), json!(true));
    map.insert("access_update".into(), json!(true));
    map.insert("access_view".into(), json!(true));
    map.insert("flex".into(), json!(1));
    map.insert("states".into(), json!({}));
    map
}

/// Generic display base for ordinary input types.
fn display_base() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("title".into(), json!(""));
    map.insert("description".into(), json!(""));
    map.insert("help".into(), json!(""));
    map.insert("title_display".into(), json!(""));
    map.insert("description_display".into(), json!(""));
    map.insert("default_value".into(), json!(""));
    map.insert("required".into(), json!(false));
    map.insert("required_error".into(), json!(""));
    map.insert("disabled".into(), json!(false));
    map.insert("format".into(), json!(""));
    map.insert("format_items".into(), json!(""));
    map
}

/// Computes the effective default property map for a type.
///
/// Starts from the capability-selected base set and layers the type's own
/// declared defaults on top, type-declared keys winning on conflict; keys in
/// `suppressed_properties` are removed after the merge. Deterministic and
/// idempotent: the result depends only on the type descriptor.
pub fn resolve_default_properties(ty: &ElementType) -> Map<String, Value> {
    let mut map = shared_base();
    match ty.property_base() {
        PropertyBase::Standard => {
            map.extend(display_base());
        }
        PropertyBase::Value => {
            // Plain value holders: storable but presentation-free.
            map.insert("default_value".into(), json!(""));
        }
        PropertyBase::Markup => {
            // Markup types store nothing and are not access-controlled.
            map.remove("access_create");
            map.remove("access_update");
            map.remove("access_view");
            map.insert("display_on".into(), json!("form"));
        }
        PropertyBase::Composite => {
            // Parts carry their own titles; the composite keeps a wrapper
            // title and value map.
            map.insert("title".into(), json!(""));
            map.insert("default_value".into(), json!({}));
            map.insert("required".into(), json!(false));
            map.insert("format".into(), json!(""));
            map.insert("format_items".into(), json!(""));
        }
    }

    for (key, value) in &ty.default_properties {
        map.insert(key.clone(), value.clone());
    }
    for key in &ty.suppressed_properties {
        map.remove(key);
    }
    map
}
