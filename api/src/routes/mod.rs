//! HTTP route handlers
//!
//! - `resource` - Generic create/read/update/delete for every entity
//! - `auth` - Registration, login and the current-user lookup
//! - `health` - Liveness and database connectivity

pub mod auth;
pub mod health;
pub mod resource;
