//! Conditional-logic selector derivation.
//!
//! Produces the set of addressable input selectors for an element, consumed
//! by the external conditional-logic evaluator as its universe of trigger
//! points. Pure in `(type, properties)` and cheap to recompute — the
//! evaluator queries it repeatedly.

use formkit_model::{ElementInstance, ElementType, Selector};
use formkit_registry::ElementTypeRegistry;

/// Derives the addressable input selectors for an instance, in declaration
/// order.
///
/// - A wrapped repeatable list exposes nothing at this layer; the wrapper's
///   own inputs are addressed separately by its own type.
/// - Types with declared sub-inputs expose one selector per sub-input
///   present in the instance.
/// - Composites expose one selector per visible part — two for a hybrid
///   select-or-other part (the dropdown and the free-text input).
/// - Everything else exposes a single whole-element selector.
pub fn selectors_for(instance: &ElementInstance, ty: &ElementType) -> Vec<Selector> {
    if instance.has_multiple(ty) && ty.caps.states_wrapper {
        return Vec::new();
    }

    let label = instance.admin_label();

    if !ty.sub_inputs.is_empty() {
        return ty
            .sub_inputs
            .iter()
            .filter(|sub| sub_input_present(instance, &sub.key))
            .map(|sub| {
                Selector::new(
                    format!("{}[{}]", instance.key, sub.key),
                    format!("{label} {}", sub.label),
                )
            })
            .collect();
    }

    if ty.caps.composite {
        let overrides = instance.property("parts").and_then(|v| v.as_object());
        let mut selectors = Vec::new();
        for part in &ty.composite_parts {
            let accessible = overrides
                .and_then(|o| o.get(&part.key))
                .and_then(|o| o.get("access"))
                .and_then(|v| v.as_bool())
                .unwrap_or(part.accessible);
            if !accessible {
                continue;
            }
            if part.select_other {
                selectors.push(Selector::new(
                    format!("{}[{}][select]", instance.key, part.key),
                    format!("{label} {}", part.title),
                ));
                selectors.push(Selector::new(
                    format!("{}[{}][other]", instance.key, part.key),
                    format!("{label} {} (other)", part.title),
                ));
            } else {
                selectors.push(Selector::new(
                    format!("{}[{}]", instance.key, part.key),
                    format!("{label} {}", part.title),
                ));
            }
        }
        return selectors;
    }

    vec![Selector::new(
        instance.key.clone(),
        format!("{label} [{}]", ty.label),
    )]
}

/// Registry-resolving form of [`selectors_for`]. A whole-form selector
/// listing walks instance trees with only type ids in hand.
pub fn selectors_in_registry(
    registry: &ElementTypeRegistry,
    instance: &ElementInstance,
) -> Vec<Selector> {
    selectors_for(instance, &registry.resolve(&instance.type_id))
}

/// Whether a declared sub-input applies to this instance. An instance may
/// narrow the declared set through its `parts_order` list property (a
/// datelist configured without seconds, for example); absent, every declared
/// sub-input is present.
fn sub_input_present(instance: &ElementInstance, key: &str) -> bool {
    match instance.property("parts_order").and_then(|v| v.as_array()) {
        Some(order) => order.iter().any(|v| v.as_str() == Some(key)),
        None => true,
    }
}
