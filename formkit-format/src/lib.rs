//! Value formatting engine for formkit.
//!
//! Given an element instance, its stored value, and a [`FormatSpec`], the
//! engine produces a single formatted unit or a multi-unit composition,
//! dispatched four ways: single vs. multiple value, HTML vs. text.
//!
//! - [`FormatEngine`] — the entry point ([`FormatEngine::format`],
//!   [`FormatEngine::format_text`])
//! - [`Formatted`] — structured output; no markup is ever produced here
//! - [`ItemFormatter`] — per-type single-item strategy (boolean yes/no,
//!   masked password, pattern dates, anchors, option labels)
//! - [`CompositeRenderer`] — per-composite natural-language override for the
//!   default labeled-lines flattening
//! - custom-template contexts: the engine pre-renders referenced item
//!   formats and hands template + context to the host's renderer
//!
//! [`FormatSpec`]: formkit_model::FormatSpec

mod composite;
mod engine;
mod formatters;
mod items;
mod output;
mod template;

pub use composite::{
    AddressRenderer, CompositeRenderer, LinkRenderer, NameRenderer, RenderedPart,
    TelephoneRenderer, format_composite, rendered_parts,
};
pub use engine::{FormatEngine, RenderMode};
pub use formatters::{
    BooleanFormatter, DateFormatter, GenericFormatter, ItemContext, ItemFormatter, LinkFormatter,
    OptionsFormatter, PasswordFormatter, scalar_text,
};
pub use items::{combine, is_known_items_format};
pub use output::{Formatted, Join, and_join};
pub use template::referenced_item_formats;
