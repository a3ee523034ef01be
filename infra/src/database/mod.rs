//! Database module - SQLite implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Schema bootstrap
//! - The generic repository and per-entity column mappings

pub mod connection;
pub mod schema;
pub mod sqlite;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use schema::ensure_schema;
pub use sqlite::{SqlEntity, SqliteQuery, SqliteRepository};
