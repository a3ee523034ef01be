//! Shared utilities and common types for the RentTracker server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response structures shared by every endpoint

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LogFormat,
    LoggingConfig, ServerConfig,
};
pub use types::{ErrorResponse, StatusResponse};
