//! Configuration for the token service

use jsonwebtoken::Algorithm;
use rt_shared::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in seconds
    pub token_expiry_seconds: i64,
    /// Value of the `iss` claim
    pub issuer: String,
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: jwt.token_expiry,
            issuer: jwt.issuer.clone(),
        }
    }
}
