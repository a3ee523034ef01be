//! Error type definitions for validation, authentication and token handling

use thiserror::Error;

/// Authentication errors
///
/// Unknown email and wrong password share one variant so responses never
/// reveal which half of the credential was wrong.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing or invalid Authorization header")]
    MissingToken,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
///
/// Messages are caller-facing and carry only what the caller sent.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },

    #[error("Field must not be empty or zero: {field}")]
    EmptyValue { field: String },

    #[error("Invalid identifier: {value}")]
    InvalidIdentifier { value: String },

    #[error("Identifier is required for update")]
    MissingIdentifier,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl ValidationError {
    pub fn empty(field: impl Into<String>) -> Self {
        Self::EmptyValue {
            field: field.into(),
        }
    }
}
