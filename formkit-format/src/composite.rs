//! Composite value flattening.
//!
//! A composite value is a small ordered set of named sub-fields. The generic
//! routine walks the declared parts in order, skips inaccessible parts and
//! empty values, and builds labeled lines. Concrete composites (name,
//! address, telephone, link) plug in a renderer that replaces the default
//! line-builder with a natural-language rendering; the `"list"` and `"raw"`
//! formats are shared and not overridable.

use crate::formatters::scalar_text;
use crate::output::{Formatted, Join};
use formkit_model::{CompositePart, ElementInstance, ElementType};
use serde_json::{Map, Value};

/// One part of a composite value, resolved against the instance's overrides.
pub struct RenderedPart<'a> {
    pub part: &'a CompositePart,
    /// Effective title (instance part override, else the declared title).
    pub title: String,
    /// The part's stored value as display text (never empty).
    pub text: String,
}

/// Natural-language rendering override for one concrete composite type.
pub trait CompositeRenderer: Send + Sync {
    /// Default-format text rendering. `None` falls back to labeled lines.
    fn render_text(&self, parts: &[RenderedPart<'_>]) -> Option<String>;

    /// Default-format HTML rendering; falls back to the text rendering.
    fn render_html(&self, parts: &[RenderedPart<'_>]) -> Option<Formatted> {
        self.render_text(parts).map(Formatted::Text)
    }
}

/// Resolves the visible, non-empty parts of a composite value, in declared
/// order. Part access/title overrides come from the instance's structured
/// `parts` property (`{part_key: {"access": bool, "title": "..."}}`).
pub fn rendered_parts<'a>(
    instance: &ElementInstance,
    ty: &'a ElementType,
    value: &Map<String, Value>,
) -> Vec<RenderedPart<'a>> {
    let overrides = instance.property("parts").and_then(|v| v.as_object());
    ty.composite_parts
        .iter()
        .filter_map(|part| {
            let over = overrides.and_then(|o| o.get(&part.key)).and_then(|v| v.as_object());
            let accessible = over
                .and_then(|o| o.get("access"))
                .and_then(|v| v.as_bool())
                .unwrap_or(part.accessible);
            if !accessible {
                return None;
            }
            let text = value.get(&part.key).map(scalar_text).unwrap_or_default();
            if text.is_empty() {
                return None;
            }
            let title = over
                .and_then(|o| o.get("title"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| part.title.clone());
            Some(RenderedPart { part, title, text })
        })
        .collect()
}

/// Flattens one composite value through the formatting pipeline.
pub fn format_composite(
    parts: &[RenderedPart<'_>],
    format: &str,
    html: bool,
    renderer: Option<&dyn CompositeRenderer>,
) -> Formatted {
    if parts.is_empty() {
        return Formatted::Empty;
    }
    match format {
        // Machine-oriented: part keys, titles ignored.
        "raw" => Formatted::Joined {
            join: Join::LineBreak,
            items: parts
                .iter()
                .map(|p| Formatted::Raw(format!("{}: {}", p.part.key, p.text)))
                .collect(),
        },
        "list" => Formatted::List {
            ordered: false,
            items: parts.iter().map(|p| labeled_line(p)).collect(),
        },
        _ => {
            if let Some(renderer) = renderer {
                let rendered = if html {
                    renderer.render_html(parts)
                } else {
                    renderer.render_text(parts).map(Formatted::Text)
                };
                if let Some(rendered) = rendered {
                    return rendered;
                }
            }
            Formatted::Joined {
                join: Join::LineBreak,
                items: parts.iter().map(|p| labeled_line(p)).collect(),
            }
        }
    }
}

fn labeled_line(part: &RenderedPart<'_>) -> Formatted {
    Formatted::Text(format!("{}: {}", part.title, part.text))
}

fn part_text<'a>(parts: &'a [RenderedPart<'_>], key: &str) -> Option<&'a str> {
    parts
        .iter()
        .find(|p| p.part.key == key)
        .map(|p| p.text.as_str())
}

/// Name: parts joined with single spaces in declared order, no punctuation.
pub struct NameRenderer;

impl CompositeRenderer for NameRenderer {
    fn render_text(&self, parts: &[RenderedPart<'_>]) -> Option<String> {
        Some(
            parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// Address: street lines, then `"city, state zip"`, then country.
pub struct AddressRenderer;

impl CompositeRenderer for AddressRenderer {
    fn render_text(&self, parts: &[RenderedPart<'_>]) -> Option<String> {
        let mut lines: Vec<String> = Vec::new();
        for key in ["address", "address_2"] {
            if let Some(text) = part_text(parts, key) {
                lines.push(text.to_string());
            }
        }
        let mut locality = String::new();
        if let Some(city) = part_text(parts, "city") {
            locality.push_str(city);
        }
        if let Some(state) = part_text(parts, "state_province") {
            if !locality.is_empty() {
                locality.push_str(", ");
            }
            locality.push_str(state);
        }
        if let Some(zip) = part_text(parts, "postal_code") {
            if !locality.is_empty() {
                locality.push(' ');
            }
            locality.push_str(zip);
        }
        if !locality.is_empty() {
            lines.push(locality);
        }
        if let Some(country) = part_text(parts, "country") {
            lines.push(country.to_string());
        }
        Some(lines.join("\n"))
    }
}

/// Telephone: `"<type>: <number> x<ext>"` with the type and extension
/// segments omitted when absent.
pub struct TelephoneRenderer;

impl CompositeRenderer for TelephoneRenderer {
    fn render_text(&self, parts: &[RenderedPart<'_>]) -> Option<String> {
        let phone = part_text(parts, "phone")?;
        let mut out = String::new();
        if let Some(ty) = part_text(parts, "type") {
            out.push_str(ty);
            out.push_str(": ");
        }
        out.push_str(phone);
        if let Some(ext) = part_text(parts, "ext") {
            out.push_str(" x");
            out.push_str(ext);
        }
        Some(out)
    }
}

/// Link: an anchor node in HTML, `"title (url)"` in text.
pub struct LinkRenderer;

impl CompositeRenderer for LinkRenderer {
    fn render_text(&self, parts: &[RenderedPart<'_>]) -> Option<String> {
        let url = part_text(parts, "url")?;
        Some(match part_text(parts, "title") {
            Some(title) if title != url => format!("{title} ({url})"),
            _ => url.to_string(),
        })
    }

    fn render_html(&self, parts: &[RenderedPart<'_>]) -> Option<Formatted> {
        let url = part_text(parts, "url")?;
        let title = part_text(parts, "title").unwrap_or(url);
        Some(Formatted::Link {
            href: url.to_string(),
            text: title.to_string(),
        })
    }
}
