//! Per-type single-item formatting strategies.
//!
//! Every type gets `"value"` and `"raw"` from the generic formatter; types
//! with richer presentations (boolean yes/no, masked passwords, pattern
//! dates, anchors) register a strategy keyed by their type id. A strategy
//! returns `None` for format ids it does not recognize, and the engine falls
//! back to the generic `"value"` rendering — formatting never errors.

use crate::output::Formatted;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use formkit_model::{ElementInstance, ElementType, is_truthy};
use serde_json::Value;

/// Everything a strategy may consult to format one stored item.
pub struct ItemContext<'a> {
    pub instance: &'a ElementInstance,
    pub ty: &'a ElementType,
    pub value: &'a Value,
    /// The resolved, non-custom item format id.
    pub format: &'a str,
}

impl ItemContext<'_> {
    /// Instance property with type-declared default fallback. Sufficient for
    /// format-relevant keys, which types declare themselves.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.instance
            .property(name)
            .or_else(|| self.ty.default_properties.get(name))
    }

    /// The stored item as a display string.
    pub fn value_text(&self) -> String {
        scalar_text(self.value)
    }
}

/// A per-type single-item formatting strategy.
pub trait ItemFormatter: Send + Sync {
    /// Text rendering for the context's format id; `None` when the id is not
    /// recognized by this type.
    fn format_text(&self, ctx: &ItemContext<'_>) -> Option<String>;

    /// HTML rendering. Any format without an HTML-specific override falls
    /// back to the text rendering.
    fn format_html(&self, ctx: &ItemContext<'_>) -> Option<Formatted> {
        self.format_text(ctx).map(Formatted::Text)
    }
}

/// A scalar as a display string. Booleans render as `1`/`0` so the raw
/// format of a checkbox round-trips the stored flag.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".into(),
        Value::Bool(false) => "0".into(),
        Value::Number(n) => n.to_string(),
        // Lists/maps reaching a scalar formatter is a shape violation;
        // degrade to JSON text rather than fail.
        other => other.to_string(),
    }
}

/// Fallback strategy used when a type registers nothing of its own:
/// `"value"` renders the scalar as-is (escaped downstream), `"raw"` renders
/// it without escaping or decoration.
pub struct GenericFormatter;

impl ItemFormatter for GenericFormatter {
    fn format_text(&self, ctx: &ItemContext<'_>) -> Option<String> {
        match ctx.format {
            "value" | "raw" => Some(ctx.value_text()),
            _ => None,
        }
    }

    fn format_html(&self, ctx: &ItemContext<'_>) -> Option<Formatted> {
        match ctx.format {
            "value" => Some(Formatted::Text(ctx.value_text())),
            "raw" => Some(Formatted::Raw(ctx.value_text())),
            _ => None,
        }
    }
}

/// Checkbox: `"value"` renders Yes/No, `"raw"` renders the stored 1/0.
pub struct BooleanFormatter;

impl ItemFormatter for BooleanFormatter {
    fn format_text(&self, ctx: &ItemContext<'_>) -> Option<String> {
        match ctx.format {
            "value" => Some(if is_truthy(ctx.value) { "Yes" } else { "No" }.into()),
            "raw" => Some(if is_truthy(ctx.value) { "1" } else { "0" }.into()),
            _ => None,
        }
    }
}

/// Password: the default rendering is masked; `"raw"` is reserved for export
/// paths that are allowed to see the submitted value.
pub struct PasswordFormatter;

impl ItemFormatter for PasswordFormatter {
    fn format_text(&self, ctx: &ItemContext<'_>) -> Option<String> {
        match ctx.format {
            "value" => Some("********".into()),
            "raw" => Some(ctx.value_text()),
            _ => None,
        }
    }
}

/// Date/time types: `"value"` parses the stored string and re-formats it
/// with the type's pattern property; unparseable values degrade to the
/// stored text.
pub struct DateFormatter {
    /// Property holding the strftime pattern (`date_format` or `time_format`).
    pattern_property: &'static str,
    fallback_pattern: &'static str,
}

impl DateFormatter {
    pub fn date() -> Self {
        Self {
            pattern_property: "date_format",
            fallback_pattern: "%Y-%m-%d",
        }
    }

    pub fn time() -> Self {
        Self {
            pattern_property: "time_format",
            fallback_pattern: "%H:%M",
        }
    }

    fn pattern<'a>(&self, ctx: &'a ItemContext<'_>) -> &'a str {
        ctx.property(self.pattern_property)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(self.fallback_pattern)
    }
}

impl ItemFormatter for DateFormatter {
    fn format_text(&self, ctx: &ItemContext<'_>) -> Option<String> {
        match ctx.format {
            "raw" => Some(ctx.value_text()),
            "value" => {
                let text = ctx.value_text();
                Some(
                    parse_datetime(&text)
                        .map(|dt| dt.format(self.pattern(ctx)).to_string())
                        .unwrap_or(text),
                )
            }
            _ => None,
        }
    }
}

/// Parses the storage formats the host writes: RFC 3339, ISO date-time with
/// or without seconds, plain dates, and plain times (mapped onto an epoch
/// date so one formatter covers the time element).
fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    for pattern in ["%H:%M:%S", "%H:%M"] {
        if let Ok(time) = NaiveTime::parse_from_str(text, pattern) {
            return NaiveDate::from_ymd_opt(1970, 1, 1).map(|d| d.and_time(time));
        }
    }
    None
}

/// Link-like scalar types (url, email): `"link"` produces an anchor node in
/// HTML and the plain address in text.
pub struct LinkFormatter {
    /// Scheme prefixed to the href when the stored value has none
    /// (`"mailto:"` for email elements, empty for urls).
    href_prefix: &'static str,
}

impl LinkFormatter {
    pub fn url() -> Self {
        Self { href_prefix: "" }
    }

    pub fn email() -> Self {
        Self {
            href_prefix: "mailto:",
        }
    }
}

impl ItemFormatter for LinkFormatter {
    fn format_text(&self, ctx: &ItemContext<'_>) -> Option<String> {
        match ctx.format {
            "value" | "raw" | "link" => Some(ctx.value_text()),
            _ => None,
        }
    }

    fn format_html(&self, ctx: &ItemContext<'_>) -> Option<Formatted> {
        match ctx.format {
            "link" => {
                let text = ctx.value_text();
                let href = if text.contains(':') {
                    text.clone()
                } else {
                    format!("{}{text}", self.href_prefix)
                };
                Some(Formatted::Link { href, text })
            }
            "value" => Some(Formatted::Text(ctx.value_text())),
            "raw" => Some(Formatted::Raw(ctx.value_text())),
            _ => None,
        }
    }
}

/// Choice types (select, radios, checkboxes, select_other): `"value"` maps
/// the stored key through the element's `options` map to its label, `"raw"`
/// keeps the key.
pub struct OptionsFormatter;

impl ItemFormatter for OptionsFormatter {
    fn format_text(&self, ctx: &ItemContext<'_>) -> Option<String> {
        match ctx.format {
            "raw" => Some(ctx.value_text()),
            "value" => {
                let key = ctx.value_text();
                let label = ctx
                    .property("options")
                    .and_then(|v| v.as_object())
                    .and_then(|options| options.get(&key))
                    .and_then(|v| v.as_str())
                    .map(String::from);
                Some(label.unwrap_or(key))
            }
            _ => None,
        }
    }
}
