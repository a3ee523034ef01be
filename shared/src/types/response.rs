//! API response types

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Generic acknowledgement for mutations that return no record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    /// `{"status":"updated"}`
    pub fn updated() -> Self {
        Self {
            status: String::from("updated"),
        }
    }

    /// `{"status":"deleted"}`
    pub fn deleted() -> Self {
        Self {
            status: String::from("deleted"),
        }
    }
}
