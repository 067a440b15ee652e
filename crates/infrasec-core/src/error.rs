//! # Error Types
//!
//! Shared error type for the foundational crate. Higher layers define their
//! own `thiserror` enums and wrap this one where needed.

use thiserror::Error;

/// Top-level error type for infrasec core primitives.
#[derive(Error, Debug)]
pub enum InfrasecError {
    /// A value failed validation at construction.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
