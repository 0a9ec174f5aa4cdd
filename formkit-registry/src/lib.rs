//! Element type registry for formkit.
//!
//! - [`resolve_default_properties`] — the property model: capability-selected
//!   base property sets layered under type-declared defaults
//! - [`builtin_types`] — the builtin element catalogue
//! - [`ElementTypeRegistry`] — id → type resolution with a hidden `unknown`
//!   placeholder fallback and a cached-default tier
//!
//! Resolution never hard-fails: a missing or unregistered type id degrades to
//! a visible-but-inert placeholder so form display can always proceed.

mod base;
mod builtin;
mod error;
mod registry;

pub use base::resolve_default_properties;
pub use builtin::{UNKNOWN_TYPE_ID, builtin_types, unknown_type};
pub use error::{RegistryError, RegistryResult};
pub use registry::ElementTypeRegistry;
