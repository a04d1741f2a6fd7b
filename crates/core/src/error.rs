//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Aging inventory never fails; these errors only come out of the fallible
/// construction paths (parsing labels, converting external records).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A category label did not match any known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::UnknownCategory(label.into())
    }
}
