//! Generic SQLite repository
//!
//! One instance per entity type. The five statements are rendered from the
//! entity's `SqlEntity` description once, at construction.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::marker::PhantomData;

use rt_core::domain::entities::User;
use rt_core::errors::DomainError;
use rt_core::repositories::{ResourceRepository, UserCredentials, UserRepository};

use super::entity::SqlEntity;

/// Rendered SQL for one table
#[derive(Debug, Clone)]
struct Statements {
    insert: String,
    select_all: String,
    select_one: String,
    update: String,
    delete: String,
}

impl Statements {
    fn for_entity<E: SqlEntity>() -> Self {
        let table = E::TABLE;
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        let selected = E::SELECT_COLUMNS.join(", ");
        let assignments = E::UPDATE_COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            insert: format!(
                "INSERT INTO {} ({}) VALUES ({})",
                table,
                E::COLUMNS.join(", "),
                placeholders
            ),
            select_all: format!("SELECT id, {} FROM {} ORDER BY id", selected, table),
            select_one: format!("SELECT id, {} FROM {} WHERE id = ?", selected, table),
            update: format!("UPDATE {} SET {} WHERE id = ?", table, assignments),
            delete: format!("DELETE FROM {} WHERE id = ?", table),
        }
    }
}

/// SQLite implementation of `ResourceRepository<E>`
pub struct SqliteRepository<E> {
    /// Database connection pool
    pool: SqlitePool,
    statements: Statements,
    _entity: PhantomData<fn() -> E>,
}

impl<E: SqlEntity> SqliteRepository<E> {
    /// Create a repository for `E` on `pool`
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            statements: Statements::for_entity::<E>(),
            _entity: PhantomData,
        }
    }

    fn storage_error(action: &str, e: sqlx::Error) -> DomainError {
        DomainError::storage(format!("Failed to {} {}: {}", action, E::TABLE, e))
    }
}

#[async_trait]
impl<E: SqlEntity> ResourceRepository<E> for SqliteRepository<E> {
    async fn insert(&self, entity: &E) -> Result<i64, DomainError> {
        let result = entity
            .bind(sqlx::query(&self.statements.insert))
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("insert into", e))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        let rows = sqlx::query(&self.statements.select_all)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::storage_error("select from", e))?;

        rows.iter()
            .map(|row| E::from_row(row).map_err(|e| Self::storage_error("decode row of", e)))
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DomainError> {
        let row = sqlx::query(&self.statements.select_one)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::storage_error("select from", e))?;

        row.as_ref()
            .map(E::from_row)
            .transpose()
            .map_err(|e| Self::storage_error("decode row of", e))
    }

    async fn update(&self, id: i64, entity: &E) -> Result<u64, DomainError> {
        let result = entity
            .bind_update(sqlx::query(&self.statements.update))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("update", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        let result = sqlx::query(&self.statements.delete)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("delete from", e))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl UserRepository for SqliteRepository<User> {
    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
        let row = sqlx::query(
            "SELECT id, password_hash FROM users WHERE email = ? ORDER BY id LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::storage_error("look up credentials in", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(UserCredentials {
            user_id: row
                .try_get("id")
                .map_err(|e| Self::storage_error("decode row of", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| Self::storage_error("decode row of", e))?,
        }))
    }
}
