use serde::{Deserialize, Serialize};

/// An addressable identifier for one concrete input of an element, paired
/// with a human-readable label.
///
/// Selectors are derived on demand from `(ElementType, ElementInstance)` and
/// never stored; the conditional-logic evaluator consumes them as its
/// universe of trigger points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    /// The input address, e.g. `"contact"`, `"contact[city]"`, or
    /// `"choice[select]"` for a hybrid select-or-other input.
    pub target: String,
    pub label: String,
}

impl Selector {
    pub fn new(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
        }
    }
}
