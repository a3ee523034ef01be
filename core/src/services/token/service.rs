//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::IssuedToken;
use crate::errors::{DomainError, TokenError};

use rt_shared::config::auth::MAX_TOKEN_EXPIRY_SECONDS;

use super::config::TokenServiceConfig;

/// Service for signing and verifying session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `TokenGenerationFailed` when the secret is
    /// empty or the lifetime is outside `1..=MAX_TOKEN_EXPIRY_SECONDS`
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::Token(TokenError::TokenGenerationFailed));
        }
        if !(1..=MAX_TOKEN_EXPIRY_SECONDS).contains(&config.token_expiry_seconds) {
            tracing::error!(
                lifetime = config.token_expiry_seconds,
                "Token lifetime out of range"
            );
            return Err(DomainError::Token(TokenError::TokenGenerationFailed));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Token lifetime in seconds
    pub fn token_expiry_seconds(&self) -> i64 {
        self.config.token_expiry_seconds
    }

    /// Signs a new token for `user_id`
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Compact JWT and its expiry
    /// * `Err(TokenError)` - Signing failed
    pub fn issue(&self, user_id: i64) -> Result<IssuedToken, DomainError> {
        let claims = Claims::new(
            user_id,
            self.config.issuer.as_str(),
            self.config.token_expiry_seconds,
        );
        let token = self.encode_jwt(&claims)?;

        tracing::debug!(user_id, expires_at = claims.exp, "Issued session token");

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a bearer token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT presented by the caller
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is expired, wrongly signed or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_) => {
                    TokenError::InvalidClaims
                }
                _ => TokenError::InvalidTokenFormat,
            })?;

        if token_data.claims.user_id().is_none() {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }

        Ok(token_data.claims)
    }
}
