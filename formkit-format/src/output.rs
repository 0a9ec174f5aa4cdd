//! Structured formatting output.
//!
//! The engine never produces markup. HTML renderings are structured nodes
//! ([`Formatted::Link`], [`Formatted::List`], …) that the host's renderer
//! turns into markup; text renderings flatten through [`Formatted::to_text`].
//! [`Formatted::Text`] content is escaped by the renderer, [`Formatted::Raw`]
//! content must not be.

use serde_json::{Map, Value};

/// How a collection of formatted items is joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// `", "` separated.
    Comma,
    /// `"; "` separated.
    Semicolon,
    /// `" "` separated.
    Space,
    /// Natural-language join: two items as `"A and B"`, three or more with a
    /// serial comma (`"A, B, and C"`).
    And,
    /// One item per line.
    LineBreak,
    /// One item per line with a rule between items.
    Rule,
}

impl Join {
    fn separator(self) -> &'static str {
        match self {
            Self::Comma => ", ",
            Self::Semicolon => "; ",
            Self::Space => " ",
            // And is handled structurally in `to_text`.
            Self::And => ", ",
            Self::LineBreak | Self::Rule => "\n",
        }
    }
}

/// A formatted value: a single unit or a multi-unit composition.
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted {
    /// No output (absent value, or every item empty).
    Empty,
    /// Plain text; the renderer escapes it.
    Text(String),
    /// Pre-rendered text the renderer must not escape or decorate.
    Raw(String),
    /// An anchor node. The text path renders the label, with the href
    /// parenthesized when it differs.
    Link { href: String, text: String },
    /// An ordered (`ol`) or unordered (`ul`) list structure.
    List { ordered: bool, items: Vec<Formatted> },
    /// Items combined with a join rule.
    Joined { join: Join, items: Vec<Formatted> },
    /// Custom-template output: the engine's responsibility ends at context
    /// construction; the host's template renderer consumes this.
    Custom {
        template: String,
        context: Map<String, Value>,
    },
}

impl Formatted {
    /// Whether this output renders nothing. Empty text counts: a stored
    /// empty string formats to `Text("")`, which must drop out of joins the
    /// same way an absent value does.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Flattens to the plain-text rendering.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) | Self::Raw(s) => s.clone(),
            Self::Link { href, text } => {
                if text.is_empty() || text == href {
                    href.clone()
                } else {
                    format!("{text} ({href})")
                }
            }
            Self::List { ordered, items } => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    if *ordered {
                        format!("{}. {}", i + 1, item.to_text())
                    } else {
                        format!("- {}", item.to_text())
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Joined { join, items } => {
                let texts: Vec<String> = items.iter().map(Self::to_text).collect();
                match join {
                    Join::And => and_join(&texts),
                    other => texts.join(other.separator()),
                }
            }
            // The raw template; rendering belongs to the host.
            Self::Custom { template, .. } => template.clone(),
        }
    }
}

/// Natural-language join. Exactly one item is returned unwrapped, two items
/// join with `" and "` (no comma), three or more use a serial comma.
pub fn and_join(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} and {b}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}
