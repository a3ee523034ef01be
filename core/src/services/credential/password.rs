//! bcrypt hashing on the blocking pool

use crate::errors::DomainError;

/// Hash `password` with bcrypt at `cost`, off the async executor
pub async fn hash_password(password: String, cost: u32) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Hashing task failed: {}", e),
        })?
        .map_err(|e| DomainError::Hashing {
            message: e.to_string(),
        })
}

/// Check `password` against a stored bcrypt hash
///
/// A malformed stored hash counts as a mismatch so callers cannot tell it
/// apart from a wrong password.
pub async fn verify_password(password: String, hash: String) -> Result<bool, DomainError> {
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Hashing task failed: {}", e),
        })?;

    match outcome {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            Ok(false)
        }
    }
}
