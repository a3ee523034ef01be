//! Database connection pool management
//!
//! Wraps a SQLx SQLite pool. Foreign keys are enforced on every connection
//! and statements are logged through `tracing`.

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions, SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use rt_shared::DatabaseConfig;

use crate::database::schema;
use crate::InfrastructureError;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx SQLite connection pool
    pool: SqlitePool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Database pool or error
    ///
    /// In-memory URLs get a single long-lived connection; a second
    /// connection would open a second, empty database.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let in_memory = config.is_in_memory();
        let max_connections = if in_memory { 1 } else { config.max_connections };

        tracing::info!(
            url = %config.url,
            max_connections,
            "Creating database connection pool"
        );

        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(config.connect_timeout))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_query_threshold),
            );

        let mut options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .test_before_acquire(true);

        if in_memory {
            options = options.idle_timeout(None).max_lifetime(None);
        } else {
            options = options
                .idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(1800));
        }

        let pool = options.connect_with(connect_options).await.map_err(|e| {
            tracing::error!("Failed to create database pool: {}", e);
            InfrastructureError::Database(e)
        })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create any missing tables
    pub async fn ensure_schema(&self) -> Result<(), InfrastructureError> {
        schema::ensure_schema(&self.pool).await
    }

    /// Check if the database connection is healthy
    ///
    /// Performs a simple query to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let value: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        if value == 1 {
            Ok(true)
        } else {
            tracing::warn!("Database health check returned unexpected value: {}", value);
            Ok(false)
        }
    }

    /// Get connection pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }
}

/// Connection pool statistics
#[derive(Debug, Clone)]
pub struct PoolStatistics {
    /// Total number of connections in the pool
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creation_with_unreachable_path() {
        let mut config = DatabaseConfig::new("sqlite:///nonexistent-dir/nested/rt.db");
        config.connect_timeout = 2;

        let result = DatabasePool::new(config).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_in_memory_pool_is_capped_at_one_connection() {
        let config = DatabaseConfig::in_memory().with_max_connections(8);

        let pool = DatabasePool::new(config).await.unwrap();
        assert!(pool.health_check().await.unwrap());
        assert_eq!(pool.get_statistics().max_connections, 1);
    }

    #[test]
    fn test_pool_statistics_display() {
        let stats = PoolStatistics {
            connections: 5,
            idle_connections: 3,
            max_connections: 10,
        };

        let display = format!("{}", stats);
        assert!(display.contains("5/10"));
        assert!(display.contains("3 idle"));
    }
}
