//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::{env_or, ConfigError};

/// Default bearer token lifetime: 24 hours
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 86_400;

/// Default issuer claim
pub const DEFAULT_ISSUER: &str = "renttracker";

/// Longest accepted token lifetime: 10 years
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 10 * 365 * 86_400;

/// Default bcrypt work factor
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 12;

/// Work factors bcrypt accepts
pub const PASSWORD_HASH_COST_RANGE: RangeInclusive<u32> = 4..=31;

/// JWT signing configuration
///
/// There is intentionally no `Default` impl: the signing secret must be
/// injected at process start.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign and verify tokens
    #[serde(skip_serializing)]
    pub secret: String,

    /// Token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl JwtConfig {
    /// Create a JWT configuration with the given secret and default lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: DEFAULT_TOKEN_EXPIRY_SECONDS,
            issuer: default_issuer(),
        }
    }

    /// Set token expiry in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.token_expiry = hours * 3600;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        if secret.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "JWT_SECRET".to_string(),
            });
        }

        let config = Self {
            secret,
            token_expiry: env_or("JWT_TOKEN_EXPIRY", DEFAULT_TOKEN_EXPIRY_SECONDS)?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| default_issuer()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject lifetimes that would issue already-expired or unrepresentable tokens
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TOKEN_EXPIRY_SECONDS).contains(&self.token_expiry) {
            return Err(ConfigError::Invalid {
                key: "JWT_TOKEN_EXPIRY".to_string(),
                value: self.token_expiry.to_string(),
            });
        }
        Ok(())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor for new password hashes
    #[serde(default = "default_password_hash_cost")]
    pub password_hash_cost: u32,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            jwt: JwtConfig::from_env()?,
            password_hash_cost: env_or("BCRYPT_COST", DEFAULT_PASSWORD_HASH_COST)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the JWT settings and that the bcrypt cost is one bcrypt accepts
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;
        if !PASSWORD_HASH_COST_RANGE.contains(&self.password_hash_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST".to_string(),
                value: self.password_hash_cost.to_string(),
            });
        }
        Ok(())
    }

    /// Authentication settings with default cost for the given JWT config
    pub fn new(jwt: JwtConfig) -> Self {
        Self {
            jwt,
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

fn default_token_expiry() -> i64 {
    DEFAULT_TOKEN_EXPIRY_SECONDS
}

fn default_password_hash_cost() -> u32 {
    DEFAULT_PASSWORD_HASH_COST
}

fn default_issuer() -> String {
    DEFAULT_ISSUER.to_string()
}
