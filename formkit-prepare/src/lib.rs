//! Form preparation transforms for formkit.
//!
//! Two pure, instance-level rewrites/queries run by the form-preparation
//! phase before rendering:
//!
//! - [`wrap_as_multiple`] — rewrites a single-value element definition into
//!   a repeatable-list definition (idempotent; safe under redundant prepare
//!   passes)
//! - [`selectors_for`] — derives the addressable input selectors consumed by
//!   the conditional show/hide evaluator
//!
//! Both operate on caller-owned instances and return new values; nothing
//! here mutates in place or touches shared state.

mod multiple;
mod selectors;

pub use multiple::{INNER_ELEMENT, WRAPPED_MARKER, prepare_multiple, wrap_as_multiple};
pub use selectors::{selectors_for, selectors_in_registry};
