//! Credential lookup for the login flow.
//!
//! Generic reads never return the password hash, so login goes through
//! this narrower interface instead of `ResourceRepository<User>`.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Identifier and stored bcrypt hash for one user
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub user_id: i64,
    pub password_hash: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user_id", &self.user_id)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Repository trait for credential lookups
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the credentials registered under `email`
    ///
    /// # Returns
    /// * `Ok(Some(UserCredentials))` - A user with this email exists
    /// * `Ok(None)` - No user found with given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, DomainError>;
}
