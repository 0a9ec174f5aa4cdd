//! The builtin element type catalogue.
//!
//! Every type is a flat descriptor — capabilities, default properties, parts
//! and sub-inputs — with no behavior of its own. Formatting strategies are
//! registered separately by the formatting engine, keyed by these ids.

use formkit_model::{Capabilities, CompositePart, ElementType, SubInput};
use serde_json::json;

/// Id of the hidden placeholder type used by registry fallback.
pub const UNKNOWN_TYPE_ID: &str = "unknown";

fn input_caps() -> Capabilities {
    Capabilities {
        states_wrapper: true,
        ..Capabilities::default()
    }
}

fn composite_caps() -> Capabilities {
    Capabilities {
        composite: true,
        states_wrapper: true,
        ..Capabilities::default()
    }
}

/// The placeholder type returned when an id cannot be resolved: hidden from
/// listings, inert, but formattable (values render with the generic paths).
pub fn unknown_type() -> ElementType {
    ElementType::new(UNKNOWN_TYPE_ID, "Unknown element", "advanced").with_caps(Capabilities {
        hidden: true,
        ..Capabilities::default()
    })
}

/// Builds the builtin catalogue. The fallback [`unknown_type`] is not part of
/// the list; the registry always carries it separately.
pub fn builtin_types() -> Vec<ElementType> {
    let mut types = Vec::new();

    // Value-only and markup family.
    types.push(
        ElementType::new("value", "Value", "advanced").with_caps(Capabilities {
            bare_value: true,
            states_wrapper: true,
            ..Capabilities::default()
        }),
    );
    types.push(
        ElementType::new("hidden", "Hidden", "advanced").with_caps(Capabilities {
            bare_value: true,
            hidden: true,
            ..Capabilities::default()
        }),
    );
    types.push(
        ElementType::new("markup", "Basic HTML", "markup").with_caps(Capabilities {
            markup: true,
            ..Capabilities::default()
        }),
    );
    types.push(
        ElementType::new("processed_text", "Processed text", "markup").with_caps(Capabilities {
            markup: true,
            ..Capabilities::default()
        }),
    );

    // Text family.
    types.push(
        ElementType::new("textfield", "Text field", "basic")
            .with_caps(input_caps())
            .with_default("maxlength", json!(255)),
    );
    types.push(
        ElementType::new("textarea", "Textarea", "basic")
            .with_caps(Capabilities {
                multiline: true,
                ..input_caps()
            })
            .with_default("rows", json!(5)),
    );
    types.push(
        ElementType::new("email", "Email", "advanced")
            .with_caps(input_caps())
            .with_item_formats(&["link"]),
    );
    types.push(
        ElementType::new("url", "URL", "advanced")
            .with_caps(input_caps())
            .with_item_formats(&["link"])
            .with_default_item_format("link"),
    );
    types.push(ElementType::new("search", "Search", "advanced").with_caps(input_caps()));

    // Numeric family.
    types.push(
        ElementType::new("number", "Number", "basic")
            .with_caps(input_caps())
            .with_default("step", json!(1)),
    );
    types.push(
        ElementType::new("range", "Range", "advanced")
            .with_caps(input_caps())
            .with_default("min", json!(0))
            .with_default("max", json!(100)),
    );

    // Boolean.
    types.push(ElementType::new("checkbox", "Checkbox", "basic").with_caps(input_caps()));

    // Date family. HTML5-native date inputs have no per-part time formats, so
    // the plain date type suppresses the inherited time pattern key.
    types.push(
        ElementType::new("date", "Date", "date")
            .with_caps(input_caps())
            .with_default("date_format", json!("%Y-%m-%d"))
            .suppressing(&["time_format"]),
    );
    types.push(
        ElementType::new("time", "Time", "date")
            .with_caps(input_caps())
            .with_default("time_format", json!("%H:%M")),
    );
    types.push(
        ElementType::new("datetime", "Date/time", "date")
            .with_caps(input_caps())
            .with_default("date_format", json!("%Y-%m-%d %H:%M"))
            .with_sub_inputs(vec![
                SubInput::new("date", "date"),
                SubInput::new("time", "time"),
            ]),
    );
    types.push(
        ElementType::new("datelist", "Date list", "date")
            .with_caps(input_caps())
            .with_default("date_format", json!("%Y-%m-%d %H:%M"))
            .with_sub_inputs(vec![
                SubInput::new("day", "day"),
                SubInput::new("month", "month"),
                SubInput::new("year", "year"),
                SubInput::new("hour", "hour"),
                SubInput::new("minute", "minute"),
                SubInput::new("second", "second"),
                SubInput::new("ampm", "am/pm"),
            ]),
    );

    // Choice family.
    types.push(
        ElementType::new("select", "Select", "options")
            .with_caps(Capabilities {
                supports_multiple: true,
                ..input_caps()
            })
            .with_default("options", json!({})),
    );
    types.push(
        ElementType::new("radios", "Radios", "options")
            .with_caps(input_caps())
            .with_default("options", json!({})),
    );
    types.push(
        ElementType::new("checkboxes", "Checkboxes", "options")
            .with_caps(Capabilities {
                supports_multiple: true,
                states_wrapper: false,
                ..Capabilities::default()
            })
            .with_default("options", json!({}))
            .with_default("multiple", json!(true)),
    );
    types.push(
        ElementType::new("select_other", "Select other", "options")
            .with_caps(input_caps())
            .with_default("options", json!({}))
            .with_sub_inputs(vec![
                SubInput::new("select", "select"),
                SubInput::new("other", "other"),
            ]),
    );

    // Password: the value format is masked; raw stays available for export
    // paths with the access to use it.
    types.push(ElementType::new("password", "Password", "advanced").with_caps(input_caps()));

    // Composites.
    types.push(
        ElementType::new("name", "Name", "composite")
            .with_caps(composite_caps())
            .with_parts(vec![
                CompositePart::new("title", "Title", "select").with_other(),
                CompositePart::new("first", "First", "textfield").required(),
                CompositePart::new("middle", "Middle", "textfield"),
                CompositePart::new("last", "Last", "textfield").required(),
                CompositePart::new("suffix", "Suffix", "textfield"),
                CompositePart::new("degree", "Degree", "textfield"),
            ]),
    );
    types.push(
        ElementType::new("address", "Address", "composite")
            .with_caps(composite_caps())
            .with_parts(vec![
                CompositePart::new("address", "Address", "textfield"),
                CompositePart::new("address_2", "Address 2", "textfield"),
                CompositePart::new("city", "City/Town", "textfield"),
                CompositePart::new("state_province", "State/Province", "select").with_other(),
                CompositePart::new("postal_code", "ZIP/Postal Code", "textfield"),
                CompositePart::new("country", "Country", "select").with_other(),
            ]),
    );
    types.push(
        ElementType::new("telephone", "Telephone", "composite")
            .with_caps(composite_caps())
            .with_parts(vec![
                CompositePart::new("type", "Type", "select"),
                CompositePart::new("phone", "Phone", "textfield").required(),
                CompositePart::new("ext", "Ext", "number"),
            ]),
    );
    types.push(
        ElementType::new("link", "Link", "composite")
            .with_caps(composite_caps())
            .with_parts(vec![
                CompositePart::new("title", "Link Title", "textfield").required(),
                CompositePart::new("url", "Link URL", "url").required(),
            ]),
    );

    // Containers.
    let container_caps = Capabilities {
        container: true,
        ..Capabilities::default()
    };
    types.push(ElementType::new("container", "Container", "container").with_caps(container_caps));
    types.push(ElementType::new("fieldset", "Fieldset", "container").with_caps(container_caps));
    types.push(ElementType::new("details", "Details", "container").with_caps(container_caps));

    types
}
