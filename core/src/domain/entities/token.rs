//! Token claims for JWT-based session issuance.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as a decimal string)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates new claims for a session token
    ///
    /// # Arguments
    ///
    /// * `user_id` - Store identifier of the authenticated user
    /// * `issuer` - Value for the `iss` claim
    /// * `lifetime_seconds` - Seconds between issuance and expiry
    pub fn new(user_id: i64, issuer: impl Into<String>, lifetime_seconds: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: user_id.to_string(),
            iat: now,
            exp: now.saturating_add(lifetime_seconds),
            iss: issuer.into(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    ///
    /// Returns `None` when the subject is not a positive integer.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse::<i64>().ok().filter(|id| *id > 0)
    }
}
