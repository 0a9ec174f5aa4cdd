//! Custom-template context construction.
//!
//! When an item or items format is `"custom"`, the per-type formatters are
//! bypassed: the engine scans the template for placeholder references, pre-
//! renders each referenced item format, and hands the template plus context
//! to the host's template renderer. Engine responsibility ends at context
//! construction.

/// Extracts the item format ids referenced by a template, in order of first
/// appearance, deduplicated.
///
/// Recognized placeholder spellings: `item['value']`, `item["value"]`,
/// `item.value`, and the same three with `items` (used by collection
/// templates). The token must stand alone, not be the tail of a longer
/// identifier.
pub fn referenced_item_formats(template: &str) -> Vec<String> {
    let bytes = template.as_bytes();
    let mut found: Vec<String> = Vec::new();
    let mut i = 0;
    while let Some(pos) = template[i..].find("item") {
        let start = i + pos;
        i = start + 4;
        if start > 0 && is_ident_byte(bytes[start - 1]) {
            continue;
        }
        // Accept the plural token too.
        let mut rest = &template[i..];
        if let Some(stripped) = rest.strip_prefix('s') {
            rest = stripped;
        }
        if let Some(name) = placeholder_name(rest) {
            if !found.iter().any(|f| f == name) {
                found.push(name.to_string());
            }
        }
    }
    found
}

/// Parses the `['X']`, `["X"]`, or `.X` accessor at the head of `rest`.
fn placeholder_name(rest: &str) -> Option<&str> {
    if let Some(stripped) = rest.strip_prefix("['") {
        stripped.split('\'').next().filter(|n| !n.is_empty())
    } else if let Some(stripped) = rest.strip_prefix("[\"") {
        stripped.split('"').next().filter(|n| !n.is_empty())
    } else if let Some(stripped) = rest.strip_prefix('.') {
        let end = stripped
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(stripped.len());
        (end > 0).then_some(&stripped[..end])
    } else {
        None
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
