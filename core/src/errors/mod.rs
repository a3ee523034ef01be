//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// Every failure a request can hit is one of these. The presentation layer
/// maps each variant to an HTTP status; `Storage`, `Hashing` and `Internal`
/// carry detail for server-side logs only.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Password hashing error: {message}")]
    Hashing { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a missing record of the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a persistence-layer failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the server rather than the caller
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Storage { .. } | Self::Hashing { .. } | Self::Internal { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
