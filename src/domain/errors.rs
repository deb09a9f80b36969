//! Domain-specific error types

use thiserror::Error;

/// Domain-level errors for component names and API path segments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Component name cannot be empty")]
    EmptyComponentName,

    #[error("Invalid path segment for {field}: {value}")]
    InvalidPathSegment { field: String, value: String },
}
