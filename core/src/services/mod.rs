//! Business services containing domain logic and use cases.

pub mod credential;
pub mod resource;
pub mod token;

// Re-export commonly used types
pub use credential::{hash_password, verify_password, CredentialService};
pub use resource::ResourceService;
pub use token::{TokenService, TokenServiceConfig};
