//! Multi-value combination rules.

use crate::output::{Formatted, Join};

/// Items format ids with a built-in combination rule.
const KNOWN: &[&str] = &[
    "comma",
    "semicolon",
    "space",
    "and",
    "br",
    "hr",
    "ol",
    "ul",
    "custom",
];

/// Whether the engine has a combination rule for this items format id.
pub fn is_known_items_format(format: &str) -> bool {
    KNOWN.contains(&format)
}

/// Combines per-item outputs according to the items format.
///
/// Empty items are dropped first. A single remaining item is returned
/// unwrapped for the `"and"` join; the other joins keep their structure even
/// for one item so the renderer still sees a list/line-break node.
pub fn combine(format: &str, items: Vec<Formatted>) -> Formatted {
    let items: Vec<Formatted> = items.into_iter().filter(|i| !i.is_empty()).collect();
    if items.is_empty() {
        return Formatted::Empty;
    }
    match format {
        "comma" => Formatted::Joined {
            join: Join::Comma,
            items,
        },
        "semicolon" => Formatted::Joined {
            join: Join::Semicolon,
            items,
        },
        "space" => Formatted::Joined {
            join: Join::Space,
            items,
        },
        "and" => {
            if let [only] = items.as_slice() {
                only.clone()
            } else {
                Formatted::Joined {
                    join: Join::And,
                    items,
                }
            }
        }
        "br" => Formatted::Joined {
            join: Join::LineBreak,
            items,
        },
        "hr" => Formatted::Joined {
            join: Join::Rule,
            items,
        },
        "ol" => Formatted::List {
            ordered: true,
            items,
        },
        // "ul" and anything the caller failed to map beforehand.
        _ => Formatted::List {
            ordered: false,
            items,
        },
    }
}
