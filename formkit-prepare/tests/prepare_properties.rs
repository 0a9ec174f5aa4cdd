use formkit_prepare::{WRAPPED_MARKER, prepare_multiple, selectors_for};
use formkit_registry::ElementTypeRegistry;
use formkit_model::ElementInstance;
use proptest::prelude::*;
use serde_json::json;

fn arb_property() -> impl Strategy<Value = (String, serde_json::Value)> {
    (
        prop::string::string_regex("[a-z_]{1,16}").unwrap(),
        prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::from),
            any::<i32>().prop_map(serde_json::Value::from),
            ".{0,24}".prop_map(serde_json::Value::from),
        ],
    )
}

proptest! {
    // Prepare phases run redundantly; a second wrap must change nothing.
    #[test]
    fn wrapping_is_idempotent_for_any_properties(
        props in prop::collection::vec(arb_property(), 0..12)
    ) {
        let registry = ElementTypeRegistry::builtin();
        let mut instance = ElementInstance::new("textfield", "field")
            .with_property("multiple", json!(true));
        for (name, value) in props {
            if name == WRAPPED_MARKER {
                continue;
            }
            instance = instance.with_property(&name, value);
        }

        let once = prepare_multiple(&registry, &instance);
        let twice = prepare_multiple(&registry, &once);
        prop_assert_eq!(once, twice);
    }

    // A wrapped repeatable list is never addressable by conditional logic.
    #[test]
    fn wrapped_instances_expose_no_selectors(
        props in prop::collection::vec(arb_property(), 0..12)
    ) {
        let registry = ElementTypeRegistry::builtin();
        let mut instance = ElementInstance::new("textfield", "field")
            .with_property("multiple", json!(true));
        for (name, value) in props {
            if name == "multiple" || name == "parts_order" {
                continue;
            }
            instance = instance.with_property(&name, value);
        }

        let wrapped = prepare_multiple(&registry, &instance);
        let ty = registry.resolve("textfield");
        prop_assert!(selectors_for(&wrapped, &ty).is_empty());
    }
}
