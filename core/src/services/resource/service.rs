//! Validation and lifecycle rules in front of a `ResourceRepository`

use std::sync::Arc;

use crate::domain::resource::Resource;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::ResourceRepository;

/// CRUD service for one entity type
pub struct ResourceService<E: Resource> {
    repository: Arc<dyn ResourceRepository<E>>,
}

impl<E: Resource> Clone for ResourceService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<E: Resource> ResourceService<E> {
    pub fn new(repository: Arc<dyn ResourceRepository<E>>) -> Self {
        Self { repository }
    }

    /// Validate and insert `entity`, returning it with its new identifier
    pub async fn create(&self, mut entity: E) -> DomainResult<E> {
        entity.validate_new()?;

        let id = self.repository.insert(&entity).await?;
        entity.set_id(id);

        tracing::debug!(resource = E::NAME, id, "Created record");
        Ok(entity)
    }

    /// Every record, possibly none
    pub async fn list(&self) -> DomainResult<Vec<E>> {
        self.repository.find_all().await
    }

    /// One record by identifier
    pub async fn get(&self, id: i64) -> DomainResult<E> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(E::NAME))
    }

    /// Overwrite the record named by `entity`'s identifier
    ///
    /// An identifier that is absent or zero is rejected before anything is
    /// written. A row that does not exist is not an error.
    pub async fn update(&self, entity: E) -> DomainResult<()> {
        let id = match entity.id() {
            Some(id) if id != 0 => id,
            _ => return Err(ValidationError::MissingIdentifier.into()),
        };

        let affected = self.repository.update(id, &entity).await?;
        if affected == 0 {
            tracing::warn!(resource = E::NAME, id, "Update matched no rows");
        }
        Ok(())
    }

    /// Delete by identifier; deleting a missing row still succeeds
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            tracing::warn!(resource = E::NAME, id, "Delete matched no rows");
        }
        Ok(())
    }
}
