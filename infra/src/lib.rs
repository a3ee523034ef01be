//! # Infrastructure Layer
//!
//! Concrete persistence for the RentTracker backend: a SQLite connection
//! pool, an idempotent schema bootstrap, and one generic repository that
//! serves every entity through its `SqlEntity` description.

// Re-export core types for convenience
pub use rt_core::errors::*;

/// Database module - SQLite implementations using SQLx
pub mod database;

pub use database::{ensure_schema, DatabasePool, PoolStatistics, SqlEntity, SqliteRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or statement error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
