use formkit_model::{Capabilities, ElementInstance, ElementType};
use formkit_registry::{
    ElementTypeRegistry, RegistryError, UNKNOWN_TYPE_ID, builtin_types, resolve_default_properties,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

// ── Resolution and fallback ──────────────────────────────────────

#[test]
fn resolve_known_type() {
    let registry = ElementTypeRegistry::builtin();
    assert_eq!(registry.resolve("textfield").id, "textfield");
}

#[test]
fn unresolvable_type_degrades_to_placeholder() {
    let registry = ElementTypeRegistry::builtin();
    let ty = registry.resolve("does_not_exist");
    assert_eq!(ty.id, UNKNOWN_TYPE_ID);
    assert!(ty.caps.hidden);
}

#[test]
fn get_is_strict() {
    let registry = ElementTypeRegistry::builtin();
    assert!(registry.get("textfield").is_some());
    assert!(registry.get("does_not_exist").is_none());
}

#[test]
fn resolve_returns_shared_singleton() {
    let registry = ElementTypeRegistry::builtin();
    let a = registry.resolve("textfield");
    let b = registry.resolve("textfield");
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn overrides_produce_fresh_descriptor() {
    let registry = ElementTypeRegistry::builtin();
    let shared = registry.resolve("textfield");

    let mut overrides = serde_json::Map::new();
    overrides.insert("maxlength".into(), json!(10));
    let fresh = registry.resolve_with_overrides("textfield", Some(&overrides));

    assert!(!Arc::ptr_eq(&shared, &fresh));
    assert_eq!(fresh.default_properties.get("maxlength"), Some(&json!(10)));
    // The shared descriptor is untouched.
    assert_eq!(shared.default_properties.get("maxlength"), Some(&json!(255)));
}

#[test]
fn empty_overrides_keep_the_singleton() {
    let registry = ElementTypeRegistry::builtin();
    let shared = registry.resolve("textfield");
    let same = registry.resolve_with_overrides("textfield", Some(&serde_json::Map::new()));
    assert!(Arc::ptr_eq(&shared, &same));
}

// ── Registration errors ──────────────────────────────────────────

#[test]
fn duplicate_registration_fails() {
    let mut registry = ElementTypeRegistry::builtin();
    let err = registry
        .register(ElementType::new("textfield", "Dup", "basic"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateType(id) if id == "textfield"));
}

#[test]
fn reserved_id_fails() {
    let mut registry = ElementTypeRegistry::builtin();
    let err = registry
        .register(ElementType::new(UNKNOWN_TYPE_ID, "Nope", "basic"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::ReservedId(_)));
}

#[test]
fn builtin_catalogue_has_unique_ids() {
    let types = builtin_types();
    let mut ids: Vec<&str> = types.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), types.len());
}

// ── Property model ───────────────────────────────────────────────

#[test]
fn standard_base_includes_display_and_admin_sets() {
    let registry = ElementTypeRegistry::builtin();
    let defaults = registry.default_properties("textfield");
    for key in ["title", "description", "format", "required", "admin_title", "flex", "states"] {
        assert!(defaults.contains_key(key), "missing {key}");
    }
    // Type-declared defaults layer on top.
    assert_eq!(defaults.get("maxlength"), Some(&json!(255)));
}

#[test]
fn value_family_is_exempt_from_display_base() {
    let registry = ElementTypeRegistry::builtin();
    let defaults = registry.default_properties("value");
    assert!(!defaults.contains_key("title"));
    assert!(!defaults.contains_key("format"));
    assert!(defaults.contains_key("default_value"));
    assert!(defaults.contains_key("admin_title"));
}

#[test]
fn markup_family_has_no_value_or_access_properties() {
    let registry = ElementTypeRegistry::builtin();
    let defaults = registry.default_properties("markup");
    assert!(!defaults.contains_key("default_value"));
    assert!(!defaults.contains_key("access_view"));
    assert_eq!(defaults.get("display_on"), Some(&json!("form")));
}

#[test]
fn composite_family_keeps_wrapper_title_only() {
    let registry = ElementTypeRegistry::builtin();
    let defaults = registry.default_properties("name");
    assert!(defaults.contains_key("title"));
    assert!(!defaults.contains_key("description"));
    assert_eq!(defaults.get("default_value"), Some(&json!({})));
}

#[test]
fn type_declared_keys_win_on_conflict() {
    let ty = ElementType::new("custom_text", "Custom", "basic").with_default("title", json!("Preset"));
    let defaults = resolve_default_properties(&ty);
    assert_eq!(defaults.get("title"), Some(&json!("Preset")));
}

#[test]
fn suppressed_properties_are_removed_after_merge() {
    let ty = ElementType::new("native_date", "Native date", "date")
        .with_default("time_format", json!("%H:%M"))
        .suppressing(&["time_format", "description"]);
    let defaults = resolve_default_properties(&ty);
    // Suppression beats both the base set and the type's own declaration.
    assert!(!defaults.contains_key("time_format"));
    assert!(!defaults.contains_key("description"));
}

#[test]
fn resolution_is_deterministic_and_idempotent() {
    for ty in builtin_types() {
        let first = resolve_default_properties(&ty);
        let second = resolve_default_properties(&ty);
        assert_eq!(first, second, "non-deterministic defaults for {}", ty.id);
    }
}

#[test]
fn cached_defaults_match_direct_resolution() {
    let registry = ElementTypeRegistry::builtin();
    let cached = registry.default_properties("telephone");
    let direct = resolve_default_properties(&registry.resolve("telephone"));
    assert_eq!(*cached, direct);
    // Second lookup hits the cache and yields the same map.
    let again = registry.default_properties("telephone");
    assert!(Arc::ptr_eq(&cached, &again));
}

// ── Layered instance property lookup ─────────────────────────────

#[test]
fn instance_property_wins_over_default() {
    let registry = ElementTypeRegistry::builtin();
    let instance = ElementInstance::new("textfield", "a").with_property("maxlength", json!(12));
    assert_eq!(registry.property(&instance, "maxlength"), Some(json!(12)));
}

#[test]
fn default_fills_in_missing_property() {
    let registry = ElementTypeRegistry::builtin();
    let instance = ElementInstance::new("textfield", "a");
    assert_eq!(registry.property(&instance, "maxlength"), Some(json!(255)));
    assert_eq!(registry.property(&instance, "required"), Some(json!(false)));
}

#[test]
fn unknown_property_is_undefined() {
    let registry = ElementTypeRegistry::builtin();
    let instance = ElementInstance::new("textfield", "a");
    assert_eq!(registry.property(&instance, "no_such_property"), None);
}

#[test]
fn explicit_null_is_defined() {
    let registry = ElementTypeRegistry::builtin();
    let instance = ElementInstance::new("textfield", "a").with_property("pattern", json!(null));
    assert_eq!(registry.property(&instance, "pattern"), Some(json!(null)));
}

// ── Listings ─────────────────────────────────────────────────────

#[test]
fn hidden_types_are_not_listed() {
    let registry = ElementTypeRegistry::builtin();
    let visible = registry.visible_types();
    assert!(visible.iter().all(|ty| !ty.caps.hidden));
    assert!(visible.iter().any(|ty| ty.id == "textfield"));
    assert!(!visible.iter().any(|ty| ty.id == "hidden"));
}

#[test]
fn custom_catalogue_registry() {
    let registry = ElementTypeRegistry::new(vec![
        ElementType::new("badge", "Badge", "custom").with_caps(Capabilities {
            bare_value: true,
            ..Capabilities::default()
        }),
    ])
    .unwrap();
    assert_eq!(registry.resolve("badge").id, "badge");
    assert_eq!(registry.resolve("textfield").id, UNKNOWN_TYPE_ID);
}
