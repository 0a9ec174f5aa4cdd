//! The multiple-value wrapper rewrite.
//!
//! A single-value element whose `multiple` property is truthy is rewritten
//! into a repeatable-list definition: the original input becomes a nested
//! row template, the outer element keeps only the properties meaningful to a
//! repeatable container, and the `multiple__*` configuration keys are filled
//! in with defaults. The rewrite is pure and idempotent — prepare phases run
//! redundantly, so wrapping an already-wrapped instance is a no-op.

use formkit_model::{ElementInstance, ElementType};
use formkit_registry::ElementTypeRegistry;
use serde_json::{Map, Value, json};
use tracing::debug;

/// Marker property the transform sets on the outer instance; its presence
/// makes a second wrap a no-op.
pub const WRAPPED_MARKER: &str = "multiple__wrapped";

/// Property holding the nested row template on the wrapped instance.
pub const INNER_ELEMENT: &str = "element";

/// Properties meaningful only to the outer repeatable container; stripped
/// from the inner row template.
const PARENT_ONLY: &[&str] = &[
    "default_value",
    "description",
    "help",
    "required",
    "required_error",
    "states",
    "wrapper_attributes",
    "prefix",
    "suffix",
    "multiple",
];

/// Properties meaningful only to a single input; stripped from the outer
/// instance because they now live on each inner row.
const ELEMENT_ONLY: &[&str] = &[
    "attributes",
    "maxlength",
    "minlength",
    "size",
    "placeholder",
    "pattern",
    "pattern_error",
    "autocomplete",
    "input_mask",
    "field_prefix",
    "field_suffix",
    "counter_type",
    "counter_minimum",
    "counter_maximum",
    "element_validate",
];

/// `multiple__*` configuration keys copied onto the outer instance, with the
/// defaults substituted when unset: minimum items, empty rows, add-more
/// count, sorting enabled, row operations enabled.
fn multiple_defaults() -> [(&'static str, Value); 5] {
    [
        ("multiple__min_items", json!(0)),
        ("multiple__empty_items", json!(1)),
        ("multiple__add_more_items", json!(1)),
        ("multiple__sorting", json!(true)),
        ("multiple__operations", json!(true)),
    ]
}

/// Rewrites a single-value element definition into a repeatable-list
/// definition, when its effective `multiple` property is truthy and the type
/// supports the list wrapper. Returns the input unchanged otherwise.
///
/// Idempotent: `wrap_as_multiple(wrap_as_multiple(i)) == wrap_as_multiple(i)`.
pub fn wrap_as_multiple(instance: &ElementInstance, ty: &ElementType) -> ElementInstance {
    if !ty.caps.states_wrapper || !instance.has_multiple(ty) {
        return instance.clone();
    }
    if instance.property(WRAPPED_MARKER).is_some() {
        debug!(key = %instance.key, "instance already wrapped, skipping");
        return instance.clone();
    }

    // (a) Clone the input's properties into the nested row template,
    // (b) stripping everything that belongs to the outer container.
    let mut inner: Map<String, Value> = instance
        .properties
        .iter()
        .filter(|(key, _)| !PARENT_ONLY.contains(&key.as_str()) && key.as_str() != WRAPPED_MARKER)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    inner.insert("type".into(), json!(instance.type_id));
    // (c) The row header already labels each row; the inner title is
    // redundant and must not render.
    inner.insert("title_display".into(), json!("invisible"));

    let mut outer = instance.clone();
    // (e) Single-input properties move onto the rows.
    for key in ELEMENT_ONLY {
        outer.properties.remove(*key);
    }
    // (d) Repeatable-list configuration, defaults substituted when unset.
    for (key, default) in multiple_defaults() {
        outer.properties.entry(key.to_string()).or_insert(default);
    }
    outer
        .properties
        .insert(INNER_ELEMENT.into(), Value::Object(inner));
    outer.properties.insert(WRAPPED_MARKER.into(), json!(true));
    outer
}

/// Registry-resolving form of [`wrap_as_multiple`]: the prepare phase only
/// has the type id. Unresolvable ids degrade to the placeholder type, which
/// never wraps.
pub fn prepare_multiple(
    registry: &ElementTypeRegistry,
    instance: &ElementInstance,
) -> ElementInstance {
    wrap_as_multiple(instance, &registry.resolve(&instance.type_id))
}
