//! In-memory implementation of the repository traits for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::domain::resource::Resource;
use crate::errors::DomainError;
use crate::repositories::user::{UserCredentials, UserRepository};

use super::trait_::ResourceRepository;

struct Table<E> {
    rows: BTreeMap<i64, E>,
    next_id: i64,
}

/// Mock repository backed by an ordered map
pub struct InMemoryRepository<E> {
    table: Arc<RwLock<Table<E>>>,
}

impl<E> InMemoryRepository<E> {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Resource> ResourceRepository<E> for InMemoryRepository<E> {
    async fn insert(&self, entity: &E) -> Result<i64, DomainError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let mut row = entity.clone();
        row.set_id(id);
        table.rows.insert(id, row);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, entity: &E) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = entity.clone();
                row.set_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository<User> {
    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|(_, user)| user.email == email)
            .and_then(|(id, user)| {
                user.password_hash.clone().map(|password_hash| UserCredentials {
                    user_id: *id,
                    password_hash,
                })
            }))
    }
}
