//! Token service module for JWT management
//!
//! Issues HS256 session tokens after registration or login and verifies
//! bearer tokens presented to protected routes.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
