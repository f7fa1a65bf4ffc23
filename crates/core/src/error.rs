//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. The HTTP
/// layer decides which status each variant maps to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The catalog holds no items; nothing can be listed or ordered.
    #[error("no items found")]
    CatalogEmpty,

    /// The referenced item does not exist in the catalog.
    #[error("couldn't find item with id: {0}")]
    ItemNotFound(ItemId),

    /// A request body could not be decoded into the expected shape.
    #[error("can't decode body: {0}")]
    MalformedRequest(String),

    /// A value failed validation (e.g. quantity policy, arithmetic overflow).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Backing storage is unusable (e.g. poisoned lock).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRequest(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
