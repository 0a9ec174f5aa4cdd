//! Defensive stored-value shape classification.
//!
//! A stored value's shape must match the `(composite, multiple)` capabilities
//! of its element. Display code must never fail loudly on mismatched data, so
//! classification maps every mismatch to [`Shape::Absent`] instead of
//! attempting a partial interpretation.

use serde_json::{Map, Value};

/// The shape of a stored value relative to its element's capabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// No value: absent, null, empty, or a shape that contradicts the type.
    Absent,
    /// A single scalar value.
    Scalar(&'a Value),
    /// An ordered list of scalar values (multiple-value element).
    List(&'a [Value]),
    /// A map of named sub-values (composite element).
    Composite(&'a Map<String, Value>),
    /// An ordered list of maps (multiple composite element).
    CompositeList(&'a [Value]),
}

impl Shape<'_> {
    /// Classifies `value` against the element's `(composite, multiple)` flags.
    ///
    /// The submission store distinguishes "absent" from "empty"; both classify
    /// as [`Shape::Absent`] here because formatting treats them identically.
    pub fn classify(value: Option<&Value>, composite: bool, multiple: bool) -> Shape<'_> {
        let Some(value) = value else {
            return Shape::Absent;
        };
        if is_empty_value(value) {
            return Shape::Absent;
        }
        match (composite, multiple, value) {
            (true, true, Value::Array(items)) => Shape::CompositeList(items),
            (true, false, Value::Object(map)) => Shape::Composite(map),
            (false, true, Value::Array(items)) => Shape::List(items),
            (false, false, v) if !v.is_array() && !v.is_object() => Shape::Scalar(v),
            // Contract violation: stored shape disagrees with the type.
            _ => Shape::Absent,
        }
    }
}

/// Whether a stored value counts as "no value" for formatting purposes:
/// null, the empty string, or an empty list/map.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Property-map truthiness: `false`, `0`, `""`, `null`, and empty
/// collections are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
