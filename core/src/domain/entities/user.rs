//! User entity representing a landlord or staff account.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

use crate::domain::resource::{require, Resource};
use crate::errors::ValidationError;

/// User entity
///
/// `password` is accepted on input only and is replaced by `password_hash`
/// before the record reaches the store. Neither is ever serialized.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Login name; uniqueness is intended but not enforced by the store
    pub email: String,

    #[serde(default)]
    pub phone: String,

    /// Plaintext password, present only on registration requests
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// bcrypt hash written on insert
    #[serde(skip)]
    pub password_hash: Option<String>,

    #[serde(default)]
    pub role: String,
}

impl User {
    /// Swap the plaintext password for its hash
    pub fn with_password_hash(mut self, hash: String) -> Self {
        self.password = None;
        self.password_hash = Some(hash);
        self
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("password_hash", &self.password_hash.as_ref().map(|_| "<redacted>"))
            .field("role", &self.role)
            .finish()
    }
}

impl Resource for User {
    const NAME: &'static str = "User";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        require("email", &self.email)?;
        if !self.email.validate_email() {
            return Err(ValidationError::InvalidEmail);
        }
        require("password", &self.password)
    }
}
