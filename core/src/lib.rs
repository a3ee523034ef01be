//! # RentTracker Core
//!
//! Core business logic and domain layer for the RentTracker backend.
//! This crate contains the entity model, the per-entity validation rules,
//! repository interfaces, the resource and credential services, and the
//! error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
