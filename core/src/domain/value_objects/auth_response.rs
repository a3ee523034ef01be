//! Values returned by the credential service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// A freshly signed bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWT
    pub token: String,

    /// Expiration as epoch seconds
    pub expires_at: i64,
}

/// Result of a successful registration: the stored user and its first token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub user: User,
    pub token: String,
}
