//! Property-based tests for the formatting algebra.
//!
//! - `"raw"` round-trips any scalar for types without a raw override
//! - the `"and"` join honors its boundary rules at every length
//! - formatting is deterministic

use formkit_format::{FormatEngine, and_join};
use formkit_model::{ElementInstance, FormatSpec};
use formkit_registry::ElementTypeRegistry;
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn engine() -> FormatEngine {
    FormatEngine::new(Arc::new(ElementTypeRegistry::builtin()))
}

fn item_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{1,12}").unwrap()
}

proptest! {
    /// Formatting a raw value returns the value unchanged for scalar types
    /// with no raw-format override.
    #[test]
    fn raw_round_trips(text in prop::string::string_regex(".{1,64}").unwrap()) {
        let engine = engine();
        let instance = ElementInstance::new("textfield", "a");
        let value = json!(text);
        let rendered = engine.format_text(&instance, Some(&value), &FormatSpec::item("raw"));
        prop_assert_eq!(rendered, text);
    }

    /// One item comes back unwrapped, two join with " and ", three or more
    /// use a serial comma — at every length.
    #[test]
    fn and_join_structure(items in prop::collection::vec(item_strategy(), 1..8)) {
        let joined = and_join(&items);
        match items.len() {
            1 => prop_assert_eq!(&joined, &items[0]),
            2 => prop_assert_eq!(joined, format!("{} and {}", items[0], items[1])),
            n => {
                let tail = format!(", and {}", items[n - 1]);
                prop_assert!(joined.ends_with(&tail));
                prop_assert!(joined.starts_with(&items[0]));
                // Every item appears, in order.
                let mut cursor = 0;
                for item in &items {
                    let found = joined[cursor..].find(item.as_str());
                    prop_assert!(found.is_some());
                    cursor += found.unwrap_or(0);
                }
            }
        }
    }

    /// The engine is a pure function of its inputs.
    #[test]
    fn formatting_is_deterministic(items in prop::collection::vec(item_strategy(), 0..6)) {
        let engine = engine();
        let instance = ElementInstance::new("textfield", "tags")
            .with_property("multiple", json!(true));
        let value = json!(items);
        let spec = FormatSpec::items("comma");
        let first = engine.format_text(&instance, Some(&value), &spec);
        let second = engine.format_text(&instance, Some(&value), &spec);
        prop_assert_eq!(first, second);
    }
}
