//! Registration and login

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::domain::resource::{require, Resource};
use crate::domain::value_objects::{IssuedToken, RegisteredUser};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{ResourceRepository, UserRepository};
use crate::services::token::TokenService;

use super::password::{hash_password, verify_password};

/// Service for credential-based session issuance
pub struct CredentialService {
    /// Generic store for user records
    users: Arc<dyn ResourceRepository<User>>,
    /// Credential lookup by email
    credentials: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    hash_cost: u32,
}

impl CredentialService {
    /// Create a new credential service
    ///
    /// `users` and `credentials` are usually the same repository seen
    /// through two interfaces.
    pub fn new(
        users: Arc<dyn ResourceRepository<User>>,
        credentials: Arc<dyn UserRepository>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            credentials,
            tokens,
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Override the bcrypt cost
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Register a new user and issue its first token
    ///
    /// # Errors
    ///
    /// * `Validation` - email or password empty
    /// * `Hashing` - bcrypt failed
    /// * `Storage` - insert failed
    pub async fn register(&self, user: User) -> DomainResult<RegisteredUser> {
        user.validate_new()?;

        let password = user.password.clone().unwrap_or_default();
        let hash = hash_password(password, self.hash_cost).await?;
        let mut user = user.with_password_hash(hash);

        let id = self.users.insert(&user).await?;
        user.set_id(id);

        let issued = self.tokens.issue(id)?;
        tracing::info!(user_id = id, "User registered");

        user.password_hash = None;
        Ok(RegisteredUser {
            user,
            token: issued.token,
        })
    }

    /// Exchange an email/password pair for a token
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<IssuedToken> {
        require("email", email)?;
        require("password", password)?;

        let Some(credentials) = self.credentials.find_credentials(email).await? else {
            tracing::info!("Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        let matches =
            verify_password(password.to_string(), credentials.password_hash.clone()).await?;
        if !matches {
            tracing::info!(user_id = credentials.user_id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let issued = self.tokens.issue(credentials.user_id)?;
        tracing::info!(user_id = credentials.user_id, "User logged in");
        Ok(issued)
    }

    /// Load the user a verified token refers to
    pub async fn current_user(&self, user_id: i64) -> DomainResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(User::NAME))
    }
}
