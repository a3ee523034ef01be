//! Generic repository trait for CRUD-exposed entities.
//!
//! One implementation serves every entity. Absence is reported as `None`
//! or as a zero affected-row count, never as an error; the service decides
//! what a missing row means.

use async_trait::async_trait;

use crate::domain::resource::Resource;
use crate::errors::DomainError;

/// Persistence operations shared by all resources
#[async_trait]
pub trait ResourceRepository<E: Resource>: Send + Sync {
    /// Insert a new row and return the identifier the store assigned
    ///
    /// # Returns
    /// * `Ok(i64)` - Positive, strictly increasing identifier
    /// * `Err(DomainError::Storage)` - Constraint violation or I/O failure
    async fn insert(&self, entity: &E) -> Result<i64, DomainError>;

    /// Every row of the table, in identifier order
    async fn find_all(&self) -> Result<Vec<E>, DomainError>;

    /// Find one row by identifier
    ///
    /// # Returns
    /// * `Ok(Some(E))` - Row found
    /// * `Ok(None)` - No row with this identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DomainError>;

    /// Overwrite every writable column of row `id`, returning rows affected
    async fn update(&self, id: i64, entity: &E) -> Result<u64, DomainError>;

    /// Delete row `id`, returning rows affected
    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
}
