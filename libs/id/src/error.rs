//! Error types for ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ARN does not start with `arn:`.
    #[error("ARN missing prefix: expected 'arn:', got '{actual}'")]
    MissingPrefix { actual: String },

    /// The ARN names a different service.
    #[error("invalid ARN service: expected '{expected}', got '{actual}'")]
    InvalidService {
        expected: &'static str,
        actual: String,
    },

    /// The ARN resource is not an application.
    #[error("invalid ARN resource type: expected '{expected}', got '{actual}'")]
    InvalidResourceType {
        expected: &'static str,
        actual: String,
    },

    /// A required ARN component is empty.
    #[error("ARN component '{0}' cannot be empty")]
    EmptyComponent(&'static str),

    /// The ARN format is invalid.
    #[error("invalid ARN format: {message}")]
    InvalidFormat { message: String },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty | IdError::EmptyComponent(_))
    }
}
