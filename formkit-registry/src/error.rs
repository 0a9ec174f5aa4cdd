//! Error types for registry construction.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while building a registry.
///
/// Lookup itself never errors — unresolvable ids fall back to the `unknown`
/// placeholder type.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two type declarations share an id.
    #[error("element type already registered: {0}")]
    DuplicateType(String),

    /// A type declaration reserved the fallback id.
    #[error("element type id is reserved: {0}")]
    ReservedId(String),
}
