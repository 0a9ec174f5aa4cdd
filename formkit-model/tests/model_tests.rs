use formkit_model::{
    Capabilities, CompositePart, ElementInstance, ElementType, FormatSpec, NoDefaults,
    PropertyBase, Shape, is_empty_value, is_truthy,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn textfield() -> ElementType {
    ElementType::new("textfield", "Text field", "basic")
}

// ── Shape classification ─────────────────────────────────────────

#[test]
fn absent_value_is_absent() {
    assert_eq!(Shape::classify(None, false, false), Shape::Absent);
}

#[test]
fn null_and_empty_values_are_absent() {
    let null = json!(null);
    let empty_string = json!("");
    let empty_list = json!([]);
    let empty_map = json!({});
    assert_eq!(Shape::classify(Some(&null), false, false), Shape::Absent);
    assert_eq!(
        Shape::classify(Some(&empty_string), false, false),
        Shape::Absent
    );
    assert_eq!(Shape::classify(Some(&empty_list), false, true), Shape::Absent);
    assert_eq!(Shape::classify(Some(&empty_map), true, false), Shape::Absent);
}

#[test]
fn scalar_for_scalar_element() {
    let value = json!("hello");
    assert!(matches!(
        Shape::classify(Some(&value), false, false),
        Shape::Scalar(_)
    ));
}

#[test]
fn list_for_multiple_element() {
    let value = json!(["a", "b"]);
    match Shape::classify(Some(&value), false, true) {
        Shape::List(items) => assert_eq!(items.len(), 2),
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn map_for_composite_element() {
    let value = json!({"first": "Ada"});
    assert!(matches!(
        Shape::classify(Some(&value), true, false),
        Shape::Composite(_)
    ));
}

#[test]
fn list_of_maps_for_multiple_composite() {
    let value = json!([{"first": "Ada"}, {"first": "Grace"}]);
    assert!(matches!(
        Shape::classify(Some(&value), true, true),
        Shape::CompositeList(_)
    ));
}

// ── Shape mismatches degrade to absent ───────────────────────────

#[test]
fn scalar_stored_for_composite_is_absent() {
    let value = json!("not a map");
    assert_eq!(Shape::classify(Some(&value), true, false), Shape::Absent);
}

#[test]
fn scalar_stored_for_multiple_is_absent() {
    let value = json!("not a list");
    assert_eq!(Shape::classify(Some(&value), false, true), Shape::Absent);
}

#[test]
fn list_stored_for_scalar_is_absent() {
    let value = json!(["a"]);
    assert_eq!(Shape::classify(Some(&value), false, false), Shape::Absent);
}

// ── Truthiness / emptiness ───────────────────────────────────────

#[test]
fn truthiness() {
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!("")));
    assert!(!is_truthy(&json!([])));
    assert!(is_truthy(&json!(true)));
    assert!(is_truthy(&json!(3)));
    assert!(is_truthy(&json!("x")));
    assert!(is_truthy(&json!({"a": 1})));
}

#[test]
fn emptiness_is_not_truthiness() {
    // `false` and `0` are falsy but present values.
    assert!(!is_empty_value(&json!(false)));
    assert!(!is_empty_value(&json!(0)));
    assert!(is_empty_value(&json!("")));
}

// ── ElementInstance ──────────────────────────────────────────────

#[test]
fn admin_label_precedence() {
    let bare = ElementInstance::new("textfield", "first_name");
    assert_eq!(bare.admin_label(), "first_name");

    let titled = bare.clone().with_property("title", json!("First name"));
    assert_eq!(titled.admin_label(), "First name");

    let admin = titled.with_property("admin_title", json!("Given name"));
    assert_eq!(admin.admin_label(), "Given name");
}

#[test]
fn undefined_property_is_distinct_from_null() {
    let instance = ElementInstance::new("textfield", "a").with_property("explicit", json!(null));
    assert_eq!(instance.property("explicit"), Some(&json!(null)));
    assert_eq!(instance.property("missing"), None);
}

#[test]
fn unknown_properties_round_trip() {
    let instance = ElementInstance::new("textfield", "a")
        .with_property("vendor_extension", json!({"custom": true}));
    let text = serde_json::to_string(&instance).unwrap();
    let back: ElementInstance = serde_json::from_str(&text).unwrap();
    assert_eq!(back, instance);
}

#[test]
fn multiple_defaults_to_type_declaration() {
    let ty = textfield()
        .with_caps(Capabilities {
            states_wrapper: true,
            ..Capabilities::default()
        })
        .with_default("multiple", json!(true));
    let instance = ElementInstance::new("textfield", "a");
    assert!(instance.has_multiple(&ty));

    let overridden = instance.with_property("multiple", json!(false));
    assert!(!overridden.has_multiple(&ty));
}

#[test]
fn multiple_requires_capability() {
    // No list support of any kind: the property is ignored.
    let ty = textfield();
    let instance = ElementInstance::new("textfield", "a").with_property("multiple", json!(true));
    assert!(!instance.has_multiple(&ty));
}

// ── ElementType ──────────────────────────────────────────────────

#[test]
fn property_base_selection() {
    assert_eq!(textfield().property_base(), PropertyBase::Standard);
    assert_eq!(
        textfield()
            .with_caps(Capabilities {
                bare_value: true,
                ..Capabilities::default()
            })
            .property_base(),
        PropertyBase::Value
    );
    assert_eq!(
        textfield()
            .with_caps(Capabilities {
                markup: true,
                ..Capabilities::default()
            })
            .property_base(),
        PropertyBase::Markup
    );
    assert_eq!(
        textfield()
            .with_parts(vec![CompositePart::new("first", "First", "textfield")])
            .property_base(),
        PropertyBase::Composite
    );
}

#[test]
fn known_item_formats() {
    let ty = textfield().with_item_formats(&["link"]);
    assert!(ty.knows_item_format("value"));
    assert!(ty.knows_item_format("raw"));
    assert!(ty.knows_item_format("custom"));
    assert!(ty.knows_item_format("link"));
    assert!(!ty.knows_item_format("does_not_exist"));
}

// ── FormatSpec resolution ────────────────────────────────────────

struct GlobalDefaults;

impl formkit_model::DefaultsProvider for GlobalDefaults {
    fn default_item_format(&self, type_id: &str) -> Option<String> {
        (type_id == "textfield").then(|| "raw".to_string())
    }
}

#[test]
fn spec_override_wins() {
    let ty = textfield();
    let instance = ElementInstance::new("textfield", "a").with_property("format", json!("link"));
    let spec = FormatSpec::item("value");
    assert_eq!(spec.resolve_item(&instance, &ty, &GlobalDefaults), "value");
}

#[test]
fn instance_property_beats_global_default() {
    let ty = textfield();
    let instance = ElementInstance::new("textfield", "a").with_property("format", json!("link"));
    let spec = FormatSpec::unset();
    assert_eq!(spec.resolve_item(&instance, &ty, &GlobalDefaults), "link");
}

#[test]
fn global_default_beats_type_builtin() {
    let ty = textfield();
    let instance = ElementInstance::new("textfield", "a");
    let spec = FormatSpec::unset();
    assert_eq!(spec.resolve_item(&instance, &ty, &GlobalDefaults), "raw");
}

#[test]
fn type_builtin_is_last_resort() {
    let ty = textfield();
    let instance = ElementInstance::new("textfield", "a");
    let spec = FormatSpec::unset();
    assert_eq!(spec.resolve_item(&instance, &ty, &NoDefaults), "value");
    assert_eq!(spec.resolve_items(&instance, &ty, &NoDefaults), "ul");
}

#[test]
fn empty_format_property_is_unset() {
    let ty = textfield();
    let instance = ElementInstance::new("textfield", "a").with_property("format", json!(""));
    let spec = FormatSpec::unset();
    assert_eq!(spec.resolve_item(&instance, &ty, &NoDefaults), "value");
}
