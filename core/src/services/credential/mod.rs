//! Credential service module
//!
//! Registration hashes the password and issues the first token; login
//! checks an email/password pair against the stored hash.

mod password;
mod service;


pub use password::{hash_password, verify_password};
pub use service::CredentialService;
